use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use crate::caching::store::{SetCondition, Store, ROOT_PATH};
use crate::domain::entities::{Student, StudentDetails, INFO_FIELD};
use crate::errors::AppResult;
use crate::repositories::records::RecordRepository;

/// 평탄화 해시 저장 키
pub const HASH_KEY: &str = "JohnDoeHash";
/// 네이티브 JSON 저장 키
pub const JSON_KEY: &str = "JohnDoeJSON";
/// JSON-in-hash 저장 키
pub const HASH_JSON_KEY: &str = "JohnDoeHashJSON";

/// 예제 학생: John Doe, CSE, 1등
pub fn sample_student() -> Student {
    Student::new(StudentDetails::new("John", "Doe", "CSE"), 1)
}

/// 세 가지 인코딩을 거쳐 되읽은 결과
#[derive(Debug, Clone)]
pub struct ShowcaseReport {
    /// `HGETALL`로 읽은 평탄화 해시 전체
    pub flattened: HashMap<String, String>,
    /// 평탄화 해시에서 다시 구성한 학생 (상세 정보 없음)
    pub flattened_student: Student,
    /// `JSON.GET key .` 원문
    pub native_document: String,
    /// 네이티브 JSON에서 디코딩한 학생
    pub native_student: Student,
    /// `HGET key JSON` 원문
    pub hash_json_document: String,
    /// JSON-in-hash에서 디코딩한 학생
    pub hash_json_student: Student,
}

impl ShowcaseReport {
    /// 평탄화 해시의 `Info` 필드 값 (상세 정보의 텍스트 표현)
    pub fn flattened_info(&self) -> Option<&str> {
        self.flattened.get(INFO_FIELD).map(String::as_str)
    }
}

/// 저장 방식 비교 서비스
///
/// 같은 학생 레코드를 세 가지 인코딩으로 저장한 뒤 되읽어,
/// 중첩된 상세 정보가 어떤 인코딩에서 살아남는지 보여줍니다.
pub struct StudentShowcase<S: Store> {
    repo: RecordRepository<S>,
}

impl<S: Store> StudentShowcase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            repo: RecordRepository::new(store),
        }
    }

    pub fn repository(&self) -> &RecordRepository<S> {
        &self.repo
    }

    /// 비교를 실행합니다.
    ///
    /// 1. 평탄화 해시 저장 (`HASH_KEY`)
    /// 2. 네이티브 JSON 저장 (`JSON_KEY`, 덮어쓰기)
    /// 3. 평탄화 해시 조회
    /// 4. 네이티브 JSON 조회 및 디코딩
    /// 5. JSON-in-hash 저장 (`HASH_JSON_KEY`) 후 조회 및 디코딩
    ///
    /// 어느 단계에서든 실패하면 즉시 에러를 반환합니다.
    pub async fn run(&self, student: &Student) -> AppResult<ShowcaseReport> {
        self.repo.write_flattened(HASH_KEY, student).await?;
        self.repo.write_json_native(JSON_KEY, student, SetCondition::Always).await?;

        let flattened = self.repo.read_flattened(HASH_KEY).await?;
        let flattened_student = self.repo.read_flattened_as::<Student>(HASH_KEY).await?;

        let native_raw = self.repo.read_json_native(JSON_KEY, ROOT_PATH).await?;
        let native_student: Student = serde_json::from_slice(&native_raw)?;

        self.repo.write_json_in_hash(HASH_JSON_KEY, student).await?;
        let hash_json_raw = self.repo.read_json_from_hash(HASH_JSON_KEY).await?;
        let hash_json_student: Student = serde_json::from_slice(&hash_json_raw)?;

        info!("저장 방식 비교 완료 - keys: {}, {}, {}", HASH_KEY, JSON_KEY, HASH_JSON_KEY);

        Ok(ShowcaseReport {
            flattened,
            flattened_student,
            native_document: String::from_utf8_lossy(&native_raw).into_owned(),
            native_student,
            hash_json_document: String::from_utf8_lossy(&hash_json_raw).into_owned(),
            hash_json_student,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::memory::MemoryStore;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_showcase_report() {
        let store = Arc::new(MemoryStore::new());
        let showcase = StudentShowcase::new(Arc::clone(&store));
        let student = sample_student();

        let report = showcase.run(&student).await.unwrap();

        assert!(report.flattened_info().unwrap().contains("CSE"));
        assert!(report.flattened_student.info.is_none());
        assert_eq!(report.native_student, student);
        assert_eq!(report.hash_json_student, student);
        assert_eq!(
            report.hash_json_document,
            r#"{"info":{"FirstName":"John","LastName":"Doe","Major":"CSE"},"rank":1}"#
        );

        let native: Value = serde_json::from_str(&report.native_document).unwrap();
        assert_eq!(
            native,
            json!({"info": {"FirstName": "John", "LastName": "Doe", "Major": "CSE"}, "rank": 1})
        );
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_showcase_can_run_twice() {
        let showcase = StudentShowcase::new(Arc::new(MemoryStore::new()));
        let student = sample_student();

        showcase.run(&student).await.unwrap();
        let report = showcase.run(&student).await.unwrap();
        assert_eq!(report.native_student, student);
    }
}
