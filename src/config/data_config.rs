//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 백엔드, 서버, 요청 제한 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 파싱에 실패하면 기본값을 사용합니다.

use std::env;
use std::str::FromStr;
use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        parse_env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        parse_env_or("WORKERS", 4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: "user_service_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_service_dev".to_string())
    }

    /// 사용자 문서 컬렉션 이름. 기본값: "users"
    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string())
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션
    Mongo,
    /// 프로세스 메모리 (재시작 시 데이터 소실)
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Mongo => "mongodb",
            StoreBackend::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" | "inmemory" => Ok(StoreBackend::Memory),
            other => Err(format!("알 수 없는 저장소 백엔드: {}", other)),
        }
    }
}

/// 저장소 선택 설정
pub struct StoreConfig;

impl StoreConfig {
    /// `STORE_BACKEND` 환경 변수로 저장소를 선택합니다. 기본값: MongoDB
    pub fn backend() -> StoreBackend {
        match env::var("STORE_BACKEND") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                error!("STORE_BACKEND 파싱 실패: {}. 기본값 mongodb 사용", e);
                StoreBackend::Mongo
            }),
            Err(_) => StoreBackend::Mongo,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        Self {
            per_second: parse_env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 홈 페이지 설정
pub struct SiteConfig;

impl SiteConfig {
    /// 홈 페이지 인사말에 쓰일 이름. 기본값: "Arun"
    pub fn greeting_name() -> String {
        env::var("GREETING_NAME").unwrap_or_else(|_| "Arun".to_string())
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("mongo".parse::<StoreBackend>(), Ok(StoreBackend::Mongo));
        assert_eq!("MongoDB".parse::<StoreBackend>(), Ok(StoreBackend::Mongo));
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or("PORT", "9090", 8080u16), 9090);
        assert_eq!(parse_or("PORT", " 9090 ", 8080u16), 9090);
        assert_eq!(parse_or("PORT", "not-a-port", 8080u16), 8080);
        assert_eq!(parse_or("RATE_LIMIT_BURST_SIZE", "-1", 200u32), 200);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("USERS_COLLECTION").is_err() {
            assert_eq!(DatabaseConfig::users_collection(), "users");
        }

        if env::var("MONGODB_URI").is_err() {
            assert_eq!(DatabaseConfig::uri(), "mongodb://localhost:27017");
        }
    }
}
