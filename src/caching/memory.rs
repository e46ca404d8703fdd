//! 프로세스 내 메모리 저장소
//!
//! Redis 해시와 RedisJSON 문서를 흉내 내는 [`Store`] 구현입니다.
//! 테스트와 서버 없는 데모 실행에 사용합니다.
//!
//! 흉내 내는 서버 동작:
//!
//! - 해시 명령을 JSON 키에 쓰거나 그 반대인 경우 `WRONGTYPE` 에러
//! - 새 JSON 문서는 루트 경로에서만 생성 가능
//! - `NX`/`XX` 조건은 루트와 하위 경로 모두에 적용
//! - 존재하지 않는 경로 조회는 에러

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::caching::store::{normalize_path, path_segments, SetCondition, Store};
use crate::errors::{AppError, AppResult};

const WRONGTYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";

#[derive(Debug, Clone)]
enum Entry {
    Hash(HashMap<String, String>),
    Json(Value),
}

/// 메모리 저장소
///
/// 내부 잠금 하나로 모든 키를 보호하므로 각 명령은 원자적으로 적용됩니다.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 키 개수
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

fn wrong_type() -> AppError {
    AppError::RedisError(WRONGTYPE.to_string())
}

fn missing_path(path: &str) -> AppError {
    AppError::RedisError(format!("ERR Path '{}' does not exist", normalize_path(path)))
}

/// 객체 키 또는 배열 인덱스로 한 단계 내려갑니다.
fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => match segment.parse::<usize>() {
            Ok(i) => items.get_mut(i),
            Err(_) => None,
        },
        _ => None,
    }
}

fn lookup<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments.iter().try_fold(root, |node, segment| child(node, segment))
}

/// 문서 안의 하위 경로에 값을 씁니다. 조건 불일치 시 `Ok(false)`.
fn set_in_document(root: &mut Value, path: &str, segments: &[String], value: Value, condition: SetCondition) -> AppResult<bool> {
    let Some((last, parents)) = segments.split_last() else {
        return Err(AppError::InternalError("root path must be handled by caller".to_string()));
    };

    let mut parent = root;
    for segment in parents {
        parent = child_mut(parent, segment).ok_or_else(|| missing_path(path))?;
    }

    match parent {
        Value::Object(map) => {
            if !condition.allows(map.contains_key(last)) {
                return Ok(false);
            }
            map.insert(last.clone(), value);
            Ok(true)
        }
        Value::Array(items) => {
            let slot = last
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get_mut(i))
                .ok_or_else(|| missing_path(path))?;
            // 배열 원소는 항상 존재하는 경로로 취급
            if !condition.allows(true) {
                return Ok(false);
            }
            *slot = value;
            Ok(true)
        }
        _ => Err(missing_path(path)),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn hset_multiple(&self, key: &str, fields: &[(String, String)]) -> AppResult<()> {
        debug!("[memory] HSET {} ({} fields)", key, fields.len());
        let mut entries = self.entries.lock().await;
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Hash(HashMap::new()));

        match entry {
            Entry::Hash(hash) => {
                for (field, value) in fields {
                    hash.insert(field.clone(), value.clone());
                }
                Ok(())
            }
            Entry::Json(_) => Err(wrong_type()),
        }
    }

    async fn hgetall(&self, key: &str) -> AppResult<HashMap<String, String>> {
        debug!("[memory] HGETALL {}", key);
        let entries = self.entries.lock().await;
        match entries.get(key) {
            Some(Entry::Hash(hash)) => Ok(hash.clone()),
            Some(Entry::Json(_)) => Err(wrong_type()),
            None => Ok(HashMap::new()),
        }
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()> {
        self.hset_multiple(key, &[(field.to_string(), value.to_string())]).await
    }

    async fn hget(&self, key: &str, field: &str) -> AppResult<Option<Vec<u8>>> {
        debug!("[memory] HGET {} {}", key, field);
        let entries = self.entries.lock().await;
        match entries.get(key) {
            Some(Entry::Hash(hash)) => Ok(hash.get(field).map(|v| v.clone().into_bytes())),
            Some(Entry::Json(_)) => Err(wrong_type()),
            None => Ok(None),
        }
    }

    async fn json_set(&self, key: &str, path: &str, value: &Value, condition: SetCondition) -> AppResult<bool> {
        debug!("[memory] JSON.SET {} {} {:?}", key, normalize_path(path), condition);
        let segments = path_segments(path);
        let mut entries = self.entries.lock().await;

        if segments.is_empty() {
            let exists = match entries.get(key) {
                Some(Entry::Json(_)) => true,
                Some(Entry::Hash(_)) => return Err(wrong_type()),
                None => false,
            };
            if !condition.allows(exists) {
                return Ok(false);
            }
            entries.insert(key.to_string(), Entry::Json(value.clone()));
            return Ok(true);
        }

        match entries.get_mut(key) {
            Some(Entry::Json(document)) => set_in_document(document, path, &segments, value.clone(), condition),
            Some(Entry::Hash(_)) => Err(wrong_type()),
            None => Err(AppError::RedisError(
                "ERR new objects must be created at the root".to_string(),
            )),
        }
    }

    async fn json_get(&self, key: &str, path: &str) -> AppResult<Option<Vec<u8>>> {
        debug!("[memory] JSON.GET {} {}", key, normalize_path(path));
        let entries = self.entries.lock().await;
        match entries.get(key) {
            Some(Entry::Json(document)) => {
                let value = lookup(document, &path_segments(path)).ok_or_else(|| missing_path(path))?;
                Ok(Some(serde_json::to_vec(value)?))
            }
            Some(Entry::Hash(_)) => Err(wrong_type()),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_hash_commands() {
        let store = MemoryStore::new();
        store
            .hset_multiple("h", &[("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())])
            .await
            .unwrap();
        store.hset("h", "a", "3").await.unwrap();

        let all = store.hgetall("h").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["a"], "3");
        assert_eq!(store.hget("h", "b").await.unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.hget("h", "missing").await.unwrap(), None);
        assert!(store.hgetall("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_type_is_rejected() {
        let store = MemoryStore::new();
        store.hset("h", "a", "1").await.unwrap();
        store.json_set("j", ".", &json!({"a": 1}), SetCondition::Always).await.unwrap();

        assert!(matches!(store.hget("j", "a").await, Err(AppError::RedisError(_))));
        assert!(matches!(store.json_get("h", ".").await, Err(AppError::RedisError(_))));
        assert!(matches!(
            store.json_set("h", ".", &json!(1), SetCondition::Always).await,
            Err(AppError::RedisError(_))
        ));
    }

    #[tokio::test]
    async fn test_json_paths() {
        let store = MemoryStore::new();
        let doc = json!({"info": {"Major": "CSE", "Tags": ["a", "b"]}, "rank": 1});
        assert!(store.json_set("j", "", &doc, SetCondition::Always).await.unwrap());

        assert_eq!(store.json_get("j", "info.Major").await.unwrap(), Some(br#""CSE""#.to_vec()));
        assert_eq!(store.json_get("j", "$.info.Tags.1").await.unwrap(), Some(br#""b""#.to_vec()));
        assert_eq!(store.json_get("missing", ".").await.unwrap(), None);
        assert!(store.json_get("j", "info.Minor").await.is_err());
    }

    #[tokio::test]
    async fn test_json_sub_path_creation_rules() {
        let store = MemoryStore::new();
        assert!(store.json_set("j", "info.Major", &json!("EEE"), SetCondition::Always).await.is_err());

        store.json_set("j", ".", &json!({"info": {}}), SetCondition::Always).await.unwrap();
        assert!(store.json_set("j", "info.Major", &json!("EEE"), SetCondition::Always).await.unwrap());
        assert!(store.json_set("j", "nope.Major", &json!("EEE"), SetCondition::Always).await.is_err());
    }

    #[tokio::test]
    async fn test_json_conditions_at_sub_path() {
        let store = MemoryStore::new();
        store.json_set("j", ".", &json!({"info": {"Major": "CSE"}}), SetCondition::Always).await.unwrap();

        assert!(!store.json_set("j", "info.Major", &json!("EEE"), SetCondition::IfAbsent).await.unwrap());
        assert!(!store.json_set("j", "info.Minor", &json!("Math"), SetCondition::IfPresent).await.unwrap());
        assert!(store.json_set("j", "info.Minor", &json!("Math"), SetCondition::IfAbsent).await.unwrap());

        assert_eq!(store.json_get("j", "info.Major").await.unwrap(), Some(br#""CSE""#.to_vec()));
        assert_eq!(store.len().await, 1);
    }
}
