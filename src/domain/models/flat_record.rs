//! 평탄화(flat) 인코딩 모델
//!
//! 구조체를 Redis 해시에 `HSET key field value ...` 형태로 저장하기 위한
//! 필드명 → 문자열 값 매핑을 정의합니다.
//!
//! 런타임 리플렉션 대신 타입마다 명시적으로 매핑을 구현합니다.
//! 중첩된 구조체는 재귀적으로 펼치지 않고 하나의 불투명한 문자열 값으로 축약되므로,
//! 이 인코딩에서 되읽은 레코드는 중첩 객체를 복원하지 못합니다.

use std::collections::HashMap;

use crate::errors::AppResult;

/// 해시 평탄화가 가능한 레코드
///
/// # 계약
///
/// - `to_flat_fields`는 스칼라 필드마다 정확히 하나의 (필드명, 값) 쌍을 만듭니다.
/// - 중첩 객체 필드는 하나의 쌍으로 축약되며, 값은 사람이 읽을 수 있는 텍스트일 뿐
///   구조화된 표현이 아닙니다.
/// - `from_flat_fields`는 스칼라 필드만 복원합니다. 중첩 객체는 복원되지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let fields = student.to_flat_fields();
/// // [("Info", "StudentDetails { first_name: \"John\", .. }"), ("Rank", "1")]
///
/// let restored = Student::from_flat_fields(&map)?;
/// assert!(restored.info.is_none());
/// ```
pub trait FlatRecord: Sized {
    /// 레코드를 필드명 → 문자열 값 목록으로 펼칩니다.
    fn to_flat_fields(&self) -> Vec<(String, String)>;

    /// 평탄화된 필드에서 레코드를 다시 구성합니다.
    fn from_flat_fields(fields: &HashMap<String, String>) -> AppResult<Self>;
}
