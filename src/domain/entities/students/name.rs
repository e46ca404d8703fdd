//! 이름 값 객체

use serde::{Deserialize, Serialize};

/// 이름 (이름/중간 이름/성)
///
/// JSON 키는 `first`, `middle`, `last`이며 빈 값은 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last: String,
}

impl Name {
    pub fn new(first: impl Into<String>, middle: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    /// 비어 있지 않은 부분만 공백으로 이어 붙입니다.
    pub fn full_name(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_omits_empty_parts() {
        let name = Name::new("John", "", "Doe");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"first":"John","last":"Doe"}"#);
        assert_eq!(name.full_name(), "John Doe");
    }

    #[test]
    fn test_name_decodes_partial_documents() {
        let name: Name = serde_json::from_str(r#"{"middle":"Q"}"#).unwrap();
        assert_eq!(name, Name::new("", "Q", ""));
    }
}
