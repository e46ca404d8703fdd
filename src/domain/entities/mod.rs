//! # Domain Entities Module
//!
//! 저장소에 보관되는 레코드 구조체들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장 대상 레코드)
//! └── models/       ← 인코딩 모델 (FlatRecord)
//! ```
//!
//! 모든 엔티티는 `serde`로 JSON 인코딩을 지원하며,
//! 해시 평탄화가 필요한 엔티티는 [`FlatRecord`](crate::domain::models::FlatRecord)를 구현합니다.

pub mod students;

pub use students::*;
