//! 저장소 계층 모듈
//!
//! 영속성 계층이 사용하는 최소 명령 표면([`store::Store`])과 그 구현체들을 제공합니다.
//!
//! # 구현체
//!
//! - [`redis::RedisClient`] - RedisJSON 모듈이 로드된 Redis 서버
//! - [`memory::MemoryStore`] - 프로세스 내 메모리 저장소
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//! use crate::caching::store::{SetCondition, Store};
//!
//! let store = RedisClient::connect("redis://localhost:6379").await?;
//! store.hset("JohnDoeHashJSON", "JSON", r#"{"rank":1}"#).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_ADDR=localhost:6379  # 기본값
//! ```

pub mod memory;
pub mod redis;
pub mod store;
