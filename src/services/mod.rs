//! 비즈니스 로직 계층
//!
//! - [`students`] - 저장 방식 비교 ([`StudentShowcase`](students::StudentShowcase))

pub mod students;
