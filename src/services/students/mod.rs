//! 학생 레코드 저장 방식 비교 서비스

pub mod student_showcase;

pub use student_showcase::*;
