//! # Redis 저장소 클라이언트 구현
//!
//! 이 모듈은 RedisJSON 모듈이 로드된 Redis 서버를 [`Store`]로 사용하기 위한
//! 클라이언트를 제공합니다.
//!
//! ## 연결 관리
//!
//! 연결은 [`RedisClient::connect`]에서 한 번 확보되고 `PING`으로 검증됩니다.
//! 멀티플렉싱 연결이므로 복제본을 만들어도 같은 TCP 연결을 공유하며,
//! 클라이언트가 드롭되면 연결도 해제됩니다.

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, JsonAsyncCommands};
use serde_json::Value;

use crate::caching::store::{normalize_path, SetCondition, Store};
use crate::config::StoreConfig;
use crate::errors::{AppError, AppResult};

/// Redis 저장소 클라이언트 래퍼
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
/// use crate::caching::store::{SetCondition, Store};
///
/// let redis = RedisClient::connect("redis://localhost:6379").await?;
///
/// redis.hset("JohnDoeHashJSON", "JSON", r#"{"rank":1}"#).await?;
/// redis.json_set("JohnDoeJSON", ".", &serde_json::json!({"rank": 1}), SetCondition::Always).await?;
///
/// let raw = redis.json_get("JohnDoeJSON", ".rank").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱된 연결
    ///
    /// 명령마다 복제해서 사용하며, 모든 복제본이 하나의 TCP 연결을 공유합니다.
    conn: MultiplexedConnection,
    /// 접속한 서버 URL (로그용)
    url: String,
}

impl RedisClient {
    /// 지정한 URL의 Redis 서버에 연결합니다.
    ///
    /// 연결 직후 `PING`으로 서버 가용성을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - 잘못된 URL 형식 → `AppError::ConnectionError`
    /// - 서버에 연결할 수 없는 경우 → `AppError::ConnectionError`
    /// - 인증 실패 등 `PING` 거부 → `AppError::RedisError`
    pub async fn connect(url: &str) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::ConnectionError(format!("invalid redis url {}: {}", url, e)))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::ConnectionError(format!("failed to connect to {}: {}", url, e)))?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공: {}", url);

        Ok(Self {
            conn,
            url: url.to_string(),
        })
    }

    /// 설정의 주소로 연결합니다.
    pub async fn from_config(config: &StoreConfig) -> AppResult<Self> {
        Self::connect(&config.redis_url()).await
    }

    /// 접속한 서버 URL
    pub fn url(&self) -> &str {
        &self.url
    }

    fn connection(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}

#[async_trait]
impl Store for RedisClient {
    async fn hset_multiple(&self, key: &str, fields: &[(String, String)]) -> AppResult<()> {
        debug!("HSET {} ({} fields)", key, fields.len());
        let mut conn = self.connection();
        let _: () = conn.hset_multiple(key, fields).await?;
        Ok(())
    }

    async fn hgetall(&self, key: &str) -> AppResult<HashMap<String, String>> {
        debug!("HGETALL {}", key);
        let mut conn = self.connection();
        let fields: HashMap<String, String> = conn.hgetall(key).await?;
        Ok(fields)
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()> {
        debug!("HSET {} {}", key, field);
        let mut conn = self.connection();
        let _: () = conn.hset(key, field, value).await?;
        Ok(())
    }

    async fn hget(&self, key: &str, field: &str) -> AppResult<Option<Vec<u8>>> {
        debug!("HGET {} {}", key, field);
        let mut conn = self.connection();
        let value: Option<Vec<u8>> = conn.hget(key, field).await?;
        Ok(value)
    }

    /// `JSON.SET`은 조건이 맞지 않으면 nil을 응답하므로 그 경우 `false`를 반환합니다.
    async fn json_set(&self, key: &str, path: &str, value: &Value, condition: SetCondition) -> AppResult<bool> {
        let path = normalize_path(path);
        debug!("JSON.SET {} {} {:?}", key, path, condition);

        let mut cmd = redis::cmd("JSON.SET");
        cmd.arg(key).arg(&path).arg(serde_json::to_string(value)?);
        if let Some(flag) = condition.as_arg() {
            cmd.arg(flag);
        }

        let mut conn = self.connection();
        let reply: Option<String> = cmd.query_async(&mut conn).await?;
        Ok(reply.is_some())
    }

    async fn json_get(&self, key: &str, path: &str) -> AppResult<Option<Vec<u8>>> {
        let path = normalize_path(path);
        debug!("JSON.GET {} {}", key, path);
        let mut conn = self.connection();
        let value: Option<Vec<u8>> = conn.json_get(key, path).await?;
        Ok(value)
    }
}
