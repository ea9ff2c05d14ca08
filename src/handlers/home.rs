//! 홈 페이지 핸들러
//!
//! 설정된 이름으로 인사하는 HTML 페이지를 Handlebars 템플릿으로 렌더링합니다.

use actix_web::{get, web, HttpResponse};
use actix_web::http::header::ContentType;
use handlebars::Handlebars;
use serde_json::json;
use crate::errors::{AppError, AppResult, ErrorContext};

/// 홈 페이지 템플릿 이름
const INDEX_TEMPLATE_NAME: &str = "index";

/// `name` 값은 Handlebars 기본 HTML 이스케이프를 거칩니다.
const INDEX_TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head><meta charset=\"utf-8\"><title>Home</title></head>
<body><h1>Hello, {{name}}!</h1></body>
</html>
";

/// 홈 페이지 렌더러
///
/// 템플릿은 생성 시 한 번만 등록되고, 이후 요청마다 `name`만 채워 렌더링합니다.
pub struct HomePage {
    registry: Handlebars<'static>,
    name: String,
}

impl HomePage {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 템플릿 등록 실패
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)
            .context("홈 페이지 템플릿 등록 실패")?;

        Ok(Self {
            registry,
            name: name.into(),
        })
    }

    /// 인사 페이지 HTML
    pub fn render(&self) -> AppResult<String> {
        self.registry
            .render(INDEX_TEMPLATE_NAME, &json!({ "name": self.name }))
            .context("홈 페이지 렌더링 실패")
    }
}

/// 홈 페이지 핸들러
///
/// # 엔드포인트
///
/// `GET /`
#[get("/")]
pub async fn index(page: web::Data<HomePage>) -> Result<HttpResponse, AppError> {
    let html = page.render()?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    #[test]
    fn test_render_escapes_name() {
        let html = HomePage::new("<b>Arun</b>").unwrap().render().unwrap();

        assert!(html.contains("Hello, &lt;b&gt;Arun&lt;/b&gt;!"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_fills_template() {
        let html = HomePage::new("Arun").unwrap().render().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Hello, Arun!</h1>"));
    }

    #[actix_web::test]
    async fn test_index_renders_greeting() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HomePage::new("Arun").unwrap()))
                .service(index),
        ).await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = actix_test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Hello, Arun!"));
    }
}
