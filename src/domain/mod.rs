//! 도메인 계층
//!
//! - [`entities`] - 저장 대상 레코드 (`Student`, `StudentDetails`, `Name`)
//! - [`models`] - 인코딩 모델 (`FlatRecord`)

pub mod entities;
pub mod models;
