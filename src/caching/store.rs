//! # 저장소 명령 표면
//!
//! 영속성 계층이 외부 저장소에 요구하는 최소 명령 집합을 정의합니다.
//!
//! | 메서드 | Redis 명령 |
//! |--------|------------|
//! | `hset_multiple` | `HSET key f1 v1 f2 v2 ...` |
//! | `hgetall` | `HGETALL key` |
//! | `hset` | `HSET key field value` |
//! | `hget` | `HGET key field` |
//! | `json_set` | `JSON.SET key path json [NX\|XX]` |
//! | `json_get` | `JSON.GET key path` |
//!
//! 이 명령들을 지원하는 저장소라면 어떤 구현이든 교체 가능합니다.
//! 모든 메서드는 정확히 한 번의 요청/응답이며, 재시도나 잠금을 하지 않습니다.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppResult;

/// JSON 문서 루트 경로
pub const ROOT_PATH: &str = ".";

/// JSON 쓰기 존재 조건
///
/// 조건 검사와 쓰기의 원자성은 저장소가 보장합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetCondition {
    /// 조건 없이 덮어쓰기
    #[default]
    Always,
    /// 경로가 없을 때만 쓰기 (`NX`)
    IfAbsent,
    /// 경로가 이미 있을 때만 쓰기 (`XX`)
    IfPresent,
}

impl SetCondition {
    /// `JSON.SET`에 덧붙일 플래그
    pub fn as_arg(&self) -> Option<&'static str> {
        match self {
            SetCondition::Always => None,
            SetCondition::IfAbsent => Some("NX"),
            SetCondition::IfPresent => Some("XX"),
        }
    }

    /// 현재 존재 여부에서 쓰기가 허용되는지 판단합니다.
    pub fn allows(&self, exists: bool) -> bool {
        match self {
            SetCondition::Always => true,
            SetCondition::IfAbsent => !exists,
            SetCondition::IfPresent => exists,
        }
    }
}

/// JSON 경로를 레거시 점 표기로 정규화합니다.
///
/// `""`, `"."`, `"$"`는 모두 루트(`"."`)가 되고,
/// `info.Major`, `.info.Major`, `$.info.Major`는 모두 `.info.Major`가 됩니다.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.trim_start_matches('.');

    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

/// 정규화된 경로를 세그먼트로 나눕니다. 루트는 빈 목록입니다.
pub fn path_segments(path: &str) -> Vec<String> {
    normalize_path(path)
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// 외부 키-값 저장소 핸들
///
/// 구현체는 연결을 미리 확보한 상태로 전달되며, 호출자가 수명을 관리합니다.
#[async_trait]
pub trait Store: Send + Sync {
    /// 해시에 여러 필드를 한 번에 설정합니다.
    async fn hset_multiple(&self, key: &str, fields: &[(String, String)]) -> AppResult<()>;

    /// 해시의 모든 필드를 조회합니다. 키가 없으면 빈 맵입니다.
    async fn hgetall(&self, key: &str) -> AppResult<HashMap<String, String>>;

    /// 해시에 필드 하나를 설정합니다.
    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()>;

    /// 해시 필드 하나를 조회합니다.
    async fn hget(&self, key: &str, field: &str) -> AppResult<Option<Vec<u8>>>;

    /// 경로에 JSON 값을 씁니다.
    ///
    /// 조건이 맞지 않아 쓰지 않았으면 `Ok(false)`를 반환하며 문서는 변경되지 않습니다.
    async fn json_set(&self, key: &str, path: &str, value: &Value, condition: SetCondition) -> AppResult<bool>;

    /// 경로의 JSON 값을 인코딩된 바이트로 조회합니다. 키가 없으면 `None`입니다.
    async fn json_get(&self, key: &str, path: &str) -> AppResult<Option<Vec<u8>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_aliases() {
        assert_eq!(normalize_path(""), ".");
        assert_eq!(normalize_path("."), ".");
        assert_eq!(normalize_path("$"), ".");
        assert_eq!(normalize_path(" $. "), ".");
        assert!(path_segments("").is_empty());
    }

    #[test]
    fn test_sub_path_aliases() {
        assert_eq!(normalize_path("info.Major"), ".info.Major");
        assert_eq!(normalize_path(".info.Major"), ".info.Major");
        assert_eq!(normalize_path("$.info.Major"), ".info.Major");
        assert_eq!(path_segments("$.info.Major"), vec!["info", "Major"]);
    }

    #[test]
    fn test_condition_flags() {
        assert_eq!(SetCondition::default(), SetCondition::Always);
        assert_eq!(SetCondition::Always.as_arg(), None);
        assert_eq!(SetCondition::IfAbsent.as_arg(), Some("NX"));
        assert_eq!(SetCondition::IfPresent.as_arg(), Some("XX"));
    }

    #[test]
    fn test_condition_allows() {
        assert!(SetCondition::Always.allows(true));
        assert!(SetCondition::Always.allows(false));
        assert!(SetCondition::IfAbsent.allows(false));
        assert!(!SetCondition::IfAbsent.allows(true));
        assert!(SetCondition::IfPresent.allows(true));
        assert!(!SetCondition::IfPresent.allows(false));
    }
}
