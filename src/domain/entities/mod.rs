//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 대응되는 데이터 구조체를 포함하며,
//! 문서 형태로의 변환은 리포지토리 계층이 담당합니다.

pub mod users;
