//! # Configuration Module
//!
//! 저장소 연결 설정을 담당하는 모듈입니다.
//! 설정 표면은 저장소 주소 하나와 백엔드 선택뿐이며, 모두 환경 변수로 제공됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{StoreBackend, StoreConfig};
//!
//! let config = StoreConfig::from_env();
//! match config.backend {
//!     StoreBackend::Redis => println!("Redis @ {}", config.redis_url()),
//!     StoreBackend::Memory => println!("in-memory store"),
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export REDIS_ADDR="localhost:6379"   # host:port 또는 redis:// URL
//! export STORE_BACKEND="redis"         # redis | memory
//! export PROFILE="dev"                 # .env.dev / .env.prod 선택
//! ```

pub mod store_config;

pub use store_config::*;
