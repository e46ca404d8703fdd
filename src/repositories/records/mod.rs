//! 레코드 영속성 리포지토리 모듈
//!
//! 하나의 레코드를 평탄화 해시, JSON-in-hash, 네이티브 JSON 세 가지 인코딩으로
//! 저장하고 되읽는 [`RecordRepository`]를 제공합니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::records::RecordRepository;
//!
//! let repo = RecordRepository::new(Arc::new(store));
//!
//! repo.write_flattened("JohnDoeHash", &student).await?;
//! repo.write_json_native("JohnDoeJSON", &student, SetCondition::Always).await?;
//! let major = repo.read_json_native("JohnDoeJSON", "info.Major").await?;
//! ```

pub mod record_repository;

pub use record_repository::*;
