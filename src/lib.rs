//! Redis 구조체 저장 방식 비교
//!
//! 중첩 객체를 가진 구조체를 Redis에 저장하는 세 가지 방법을 비교합니다.
//!
//! # Features
//!
//! - **평탄화 해시**: 필드마다 해시 필드 하나 (`HSET`/`HGETALL`), 중첩 객체는 문자열로 축약되어 손실
//! - **JSON-in-hash**: 전체 JSON 텍스트를 해시 필드 하나에 저장 (`HSET`/`HGET`), 손실 없음
//! - **네이티브 JSON**: RedisJSON 문서로 저장 (`JSON.SET`/`JSON.GET`), 손실 없음 + 하위 경로 접근
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Services     │ ← StudentShowcase (데모 시나리오)
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │   Repositories   │ ← RecordRepository (세 가지 인코딩)
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │   Store trait    │ ← RedisClient | MemoryStore
//! └──────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use redis_struct_store::caching::redis::RedisClient;
//! use redis_struct_store::caching::store::SetCondition;
//! use redis_struct_store::repositories::records::RecordRepository;
//!
//! let store = Arc::new(RedisClient::connect("redis://localhost:6379").await?);
//! let repo = RecordRepository::new(store);
//!
//! repo.write_json_native("JohnDoeJSON", &student, SetCondition::IfAbsent).await?;
//! let major = repo.read_json_native("JohnDoeJSON", "info.Major").await?;
//! ```

pub mod caching;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
