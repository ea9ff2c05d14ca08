//! 사용자 관련 데이터 전송 객체

pub mod user_dto;

pub use user_dto::UserDto;
