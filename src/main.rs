//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 저장소와 서비스를 초기화합니다.
//! 저장소 백엔드는 `STORE_BACKEND` 설정(mongo | memory)에 따라 선택됩니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_service_backend::config::{
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig, SiteConfig, StoreBackend, StoreConfig,
};
use user_service_backend::db::Database;
use user_service_backend::handlers::home::HomePage;
use user_service_backend::handlers::message::GreetingCounter;
use user_service_backend::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중... (environment: {:?})", Environment::current());

    // 저장소 및 서비스 초기화
    let store = initialize_user_store().await?;
    let user_service = web::Data::new(UserService::new(store));

    info!("✅ 사용자 서비스 초기화 완료 (store: {})", user_service.store_name());

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let home_page = web::Data::new(HomePage::new(SiteConfig::greeting_name()).map_err(io::Error::other)?);
    let greeting_counter = web::Data::new(GreetingCounter::new());

    HttpServer::new(move || {
        App::new()
            // 마지막에 등록한 미들웨어가 가장 바깥에서 요청을 받습니다.
            // 요청 순서: NormalizePath → Logger → CORS → Rate Limiting → 핸들러
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 공유 상태
            .app_data(user_service.clone())
            .app_data(home_page.clone())
            .app_data(greeting_counter.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => eprintln!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => eprintln!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드로 사용자 저장소를 생성합니다
///
/// MongoDB 백엔드는 연결 확인(`ping`)과 `email` 인덱스 생성을 수행합니다.
/// 인덱스 생성 실패는 조회 성능에만 영향을 주므로 경고만 남깁니다.
///
/// # Errors
///
/// * MongoDB 연결 실패 시 `io::Error`
async fn initialize_user_store() -> io::Result<Arc<dyn UserStore>> {
    let backend = StoreConfig::backend();
    info!("🗄️ 저장소 백엔드: {}", backend.as_str());

    match backend {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("MongoDB 연결 실패: {}", e);
                io::Error::other(e)
            })?;

            let repository = MongoUserRepository::new(Arc::new(database), DatabaseConfig::users_collection());

            if let Err(e) = repository.create_indexes().await {
                warn!("사용자 인덱스 생성 실패: {}", e);
            }

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용중: 재시작하면 모든 사용자 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
