//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 명시적으로 전달받은 저장소 핸들([`Store`](crate::caching::store::Store))만 사용하며,
//! 전역 연결을 두지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::records::RecordRepository;
//!
//! let repo = RecordRepository::new(Arc::new(RedisClient::connect(url).await?));
//! let raw = repo.read_json_native("JohnDoeJSON", "").await?;
//! ```

pub mod records;
