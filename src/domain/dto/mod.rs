//! # Data Transfer Objects
//!
//! API 계약에 쓰이는 데이터 전송 객체들입니다.
//!
//! - [`users`] - 비밀번호를 제외한 사용자 투영 ([`UserDto`](users::UserDto))
//! - [`message`] - 인사 엔드포인트 응답 ([`Message`](message::Message))

pub mod message;
pub mod users;

pub use message::Message;
pub use users::UserDto;
