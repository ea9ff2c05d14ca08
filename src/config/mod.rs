//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 저장소, 서버, Rate Limiting 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, StoreConfig, StoreBackend};
//!
//! let bind_address = ServerConfig::bind_address();
//!
//! match StoreConfig::backend() {
//!     StoreBackend::Mongo => { /* MongoDB 연결 */ }
//!     StoreBackend::Memory => { /* 메모리 저장소 */ }
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongo"        # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//! export USERS_COLLECTION="users"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 홈 페이지
//! export GREETING_NAME="Arun"
//! ```

pub mod data_config;

pub use data_config::*;
