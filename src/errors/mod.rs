//! 에러 모듈
//!
//! [`AppError`]와 [`AppResult`]를 재노출합니다.

pub mod errors;

pub use errors::*;
