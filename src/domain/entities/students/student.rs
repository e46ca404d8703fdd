//! Student Entity Implementation
//!
//! 스칼라 필드(`rank`)와 중첩된 상세 정보(`info`)를 가진 학생 엔티티입니다.
//! JSON 인코딩에서는 중첩 객체가 그대로 보존되지만, 해시 평탄화 인코딩에서는
//! 상세 정보가 하나의 불투명한 문자열로 축약됩니다.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::models::FlatRecord;
use crate::errors::{AppError, AppResult};

/// 평탄화 인코딩에서 상세 정보가 저장되는 필드명
pub const INFO_FIELD: &str = "Info";
/// 평탄화 인코딩에서 순위가 저장되는 필드명
pub const RANK_FIELD: &str = "Rank";

/// 학생 엔티티
///
/// 상세 정보는 학생이 소유하며(`Box`), 영속성 계층은 이 값을 변경하지 않습니다.
///
/// JSON 표현:
///
/// ```text
/// {"info":{"FirstName":"John","LastName":"Doe","Major":"CSE"},"rank":1}
/// ```
///
/// `info`가 없거나 `rank`가 0이면 해당 키는 생략됩니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Student {
    /// 학생 상세 정보
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Box<StudentDetails>>,
    /// 순위
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rank: i64,
}

/// 학생 상세 정보
///
/// JSON 키는 `FirstName`, `LastName`, `Major` 입니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentDetails {
    pub first_name: String,
    pub last_name: String,
    pub major: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Student {
    /// 상세 정보와 순위로 학생을 생성합니다.
    pub fn new(details: StudentDetails, rank: i64) -> Self {
        Self {
            info: Some(Box::new(details)),
            rank,
        }
    }

    /// 상세 정보 참조
    pub fn details(&self) -> Option<&StudentDetails> {
        self.info.as_deref()
    }
}

impl StudentDetails {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            major: major.into(),
        }
    }
}

impl FlatRecord for Student {
    /// `Info`는 상세 정보의 `Debug` 표현, `Rank`는 10진수 문자열입니다.
    /// 상세 정보가 없으면 `Info` 필드는 만들지 않습니다.
    fn to_flat_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(2);
        if let Some(details) = self.details() {
            fields.push((INFO_FIELD.to_string(), format!("{:?}", details)));
        }
        fields.push((RANK_FIELD.to_string(), self.rank.to_string()));
        fields
    }

    fn from_flat_fields(fields: &HashMap<String, String>) -> AppResult<Self> {
        let rank = match fields.get(RANK_FIELD) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                AppError::ValidationError(format!("{} 필드를 정수로 해석할 수 없습니다 ({:?}): {}", RANK_FIELD, raw, e))
            })?,
            None => 0,
        };

        if let Some(opaque) = fields.get(INFO_FIELD) {
            // 평탄화된 Info 값은 텍스트 표현일 뿐이라 되돌릴 수 없음
            warn!("{} 필드는 평탄화되어 복원할 수 없습니다: {}", INFO_FIELD, opaque);
        }

        Ok(Self { info: None, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john_doe() -> Student {
        Student::new(StudentDetails::new("John", "Doe", "CSE"), 1)
    }

    #[test]
    fn test_student_json_layout() {
        let json = serde_json::to_string(&john_doe()).unwrap();
        assert_eq!(json, r#"{"info":{"FirstName":"John","LastName":"Doe","Major":"CSE"},"rank":1}"#);
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let json = serde_json::to_string(&Student::default()).unwrap();
        assert_eq!(json, "{}");

        let decoded: Student = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, Student::default());
    }

    #[test]
    fn test_json_round_trip_with_empty_strings() {
        let student = Student::new(StudentDetails::new("", "Doe", ""), 3);
        let json = serde_json::to_string(&student).unwrap();
        let decoded: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, student);
    }

    #[test]
    fn test_flat_fields_collapse_details() {
        let fields = john_doe().to_flat_fields();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, INFO_FIELD);
        assert!(fields[0].1.contains("John"));
        assert!(fields.iter().all(|(name, _)| name != "FirstName" && name != "Major"));
        assert_eq!(fields[1], (RANK_FIELD.to_string(), "1".to_string()));
    }

    #[test]
    fn test_flat_fields_without_details() {
        let student = Student { info: None, rank: 9 };
        assert_eq!(student.to_flat_fields(), vec![(RANK_FIELD.to_string(), "9".to_string())]);
    }

    #[test]
    fn test_from_flat_fields_drops_details() {
        let map: HashMap<String, String> = john_doe().to_flat_fields().into_iter().collect();
        let restored = Student::from_flat_fields(&map).unwrap();

        assert_eq!(restored.rank, 1);
        assert!(restored.info.is_none());
        assert_ne!(restored, john_doe());
    }

    #[test]
    fn test_from_flat_fields_rejects_bad_rank() {
        let mut map = HashMap::new();
        map.insert(RANK_FIELD.to_string(), "first".to_string());

        let result = Student::from_flat_fields(&map);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
