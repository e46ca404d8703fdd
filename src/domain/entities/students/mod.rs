//! 학생 엔티티 모듈
//!
//! - [`Student`] - 순위와 중첩된 상세 정보를 가진 레코드
//! - [`StudentDetails`] - 이름/성/전공 문자열 묶음
//! - [`Name`] - 이름 값 객체

pub mod name;
pub mod student;

pub use name::*;
pub use student::*;
