use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::caching::store::{normalize_path, SetCondition, Store, ROOT_PATH};
use crate::domain::models::FlatRecord;
use crate::errors::{AppError, AppResult};

/// JSON-in-hash 인코딩에서 문서를 담는 해시 필드명
pub const JSON_FIELD: &str = "JSON";

/// 구조체 영속성 Repository
///
/// 하나의 레코드를 세 가지 인코딩으로 저장하고 되읽습니다:
/// - **평탄화 해시**: 필드마다 해시 필드 하나 (`HSET`/`HGETALL`), 중첩 객체는 손실
/// - **JSON-in-hash**: 전체 JSON 텍스트를 `JSON` 필드 하나에 저장 (`HSET`/`HGET`)
/// - **네이티브 JSON**: RedisJSON 문서로 저장 (`JSON.SET`/`JSON.GET`), 하위 경로 단위 접근 가능
///
/// 모든 메서드는 저장소 호출 한 번으로 끝나며 재시도하지 않습니다.
pub struct RecordRepository<S: Store> {
    store: Arc<S>,
}

impl<S: Store> Clone for RecordRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> RecordRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 내부 저장소 핸들
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// 레코드를 평탄화하여 해시로 저장
    ///
    /// 중첩 객체는 하나의 불투명한 문자열 필드가 됩니다.
    /// 필드가 하나도 없으면 저장소를 호출하지 않고 `ValidationError`를 반환합니다.
    ///
    /// # Example
    /// ```rust,ignore
    /// repo.write_flattened("JohnDoeHash", &student).await?;
    /// ```
    pub async fn write_flattened<T: FlatRecord>(&self, key: &str, record: &T) -> AppResult<()> {
        let fields = record.to_flat_fields();
        if fields.is_empty() {
            return Err(AppError::ValidationError(format!("{}: 저장할 필드가 없습니다", key)));
        }

        self.store.hset_multiple(key, &fields).await?;
        info!("평탄화 해시 저장 완료 - key: {}, fields: {}", key, fields.len());
        Ok(())
    }

    /// 평탄화된 해시를 그대로 조회
    ///
    /// # Returns
    /// * `Ok(HashMap)` - 저장된 필드명 → 문자열 값 (중첩 객체 필드는 디코딩하지 않음)
    /// * `Err(NotFound)` - 키가 없는 경우
    pub async fn read_flattened(&self, key: &str) -> AppResult<HashMap<String, String>> {
        let fields = self.store.hgetall(key).await?;
        if fields.is_empty() {
            return Err(AppError::NotFound(format!("hash {}", key)));
        }
        Ok(fields)
    }

    /// 평탄화된 해시에서 레코드를 다시 구성
    ///
    /// 스칼라 필드만 복원되며 중첩 객체는 복원되지 않습니다.
    pub async fn read_flattened_as<T: FlatRecord>(&self, key: &str) -> AppResult<T> {
        let fields = self.read_flattened(key).await?;
        T::from_flat_fields(&fields)
    }

    /// 레코드 전체를 JSON 텍스트로 직렬화하여 해시의 `JSON` 필드에 저장
    ///
    /// 직렬화 실패는 저장소 호출 전에 반환되므로 부분 쓰기가 발생하지 않습니다.
    pub async fn write_json_in_hash<T: Serialize>(&self, key: &str, record: &T) -> AppResult<()> {
        let json = serde_json::to_string(record)?;
        self.store.hset(key, JSON_FIELD, &json).await?;
        info!("JSON 해시 필드 저장 완료 - key: {}, bytes: {}", key, json.len());
        Ok(())
    }

    /// 해시의 `JSON` 필드를 원시 바이트로 조회
    ///
    /// 디코딩은 호출자의 책임입니다. [`read_json_from_hash_as`](Self::read_json_from_hash_as) 참고.
    pub async fn read_json_from_hash(&self, key: &str) -> AppResult<Vec<u8>> {
        self.store
            .hget(key, JSON_FIELD)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("hash field {} {}", key, JSON_FIELD)))
    }

    /// 해시의 `JSON` 필드를 조회하여 디코딩
    pub async fn read_json_from_hash_as<T: DeserializeOwned>(&self, key: &str) -> AppResult<T> {
        let raw = self.read_json_from_hash(key).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// 레코드를 네이티브 JSON 문서로 루트 경로에 저장
    ///
    /// # Arguments
    /// * `condition` - `IfAbsent`(NX) / `IfPresent`(XX) / `Always`
    ///
    /// # Returns
    /// * `Err(ConflictError)` - 조건을 만족하지 못해 저장소가 쓰기를 거부한 경우 (문서 변경 없음)
    pub async fn write_json_native<T: Serialize>(&self, key: &str, record: &T, condition: SetCondition) -> AppResult<()> {
        self.write_json_native_path(key, ROOT_PATH, record, condition).await
    }

    /// 네이티브 JSON 문서의 하위 경로에 값을 저장
    ///
    /// 문서 전체를 읽거나 다시 쓰지 않고 `info.Major` 같은 경로 하나만 갱신합니다.
    ///
    /// # Example
    /// ```rust,ignore
    /// repo.write_json_native_path("JohnDoeJSON", "info.Major", &"EEE", SetCondition::IfPresent).await?;
    /// ```
    pub async fn write_json_native_path<T: Serialize>(
        &self,
        key: &str,
        path: &str,
        value: &T,
        condition: SetCondition,
    ) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        let applied = self.store.json_set(key, path, &value, condition).await?;

        if !applied {
            return Err(AppError::ConflictError(format!(
                "JSON.SET {} {} rejected by condition {:?}",
                key,
                normalize_path(path),
                condition
            )));
        }

        debug!("네이티브 JSON 저장 완료 - key: {}, path: {}", key, normalize_path(path));
        Ok(())
    }

    /// 네이티브 JSON 문서의 경로 값을 원시 바이트로 조회
    ///
    /// `""` 또는 `"."`는 문서 전체, `info.Major`는 해당 하위 값만 반환합니다.
    pub async fn read_json_native(&self, key: &str, path: &str) -> AppResult<Vec<u8>> {
        self.store
            .json_get(key, path)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("json document {}", key)))
    }

    /// 네이티브 JSON 문서의 경로 값을 조회하여 디코딩
    pub async fn read_json_native_as<T: DeserializeOwned>(&self, key: &str, path: &str) -> AppResult<T> {
        let raw = self.read_json_native(key, path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
