//! # Domain Models Module
//!
//! 엔티티와 독립적인 인코딩 모델을 정의합니다.
//!
//! - [`flat_record`] - 해시 평탄화 인코딩 계약 ([`FlatRecord`])

pub mod flat_record;

pub use flat_record::*;
