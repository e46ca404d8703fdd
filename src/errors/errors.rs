//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 저장소 연결, 저장소 명령, 인코딩/디코딩 실패를 구분하는 통합 에러 타입입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | AppError | 발생 시점 | 복구 가능 여부 |
//! |----------|-----------|----------------|
//! | `ConnectionError` | 저장소 연결 실패 | 호출 프로그램에서 치명적 |
//! | `RedisError` | 명령 실패 (문법 오류, WRONGTYPE 등) | 호출자에게 전달, 재시도 없음 |
//! | `NotFound` | 키 또는 필드가 없음 | 호출자에게 전달 |
//! | `ConflictError` | NX/XX 조건부 쓰기 거부 | 호출자에게 전달, 저장소는 변경되지 않음 |
//! | `SerializationError` | JSON 인코딩/디코딩 실패 | 저장소 호출 전후에 전달 |
//! | `ValidationError` | 평탄화된 필드 값 해석 실패 | 호출자에게 전달 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load(repo: &RecordRepository<RedisClient>) -> Result<Student, AppError> {
//!     let student = repo.read_json_from_hash_as::<Student>("JohnDoeHashJSON").await?;
//!     Ok(student)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 저장소 계층에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 라이브러리 코드는 이 타입을 그대로 반환하며, 치명적으로 처리할지는 호출자가 결정합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 연결 에러
    ///
    /// 주소 형식 오류, 연결 거부, 네트워크 단절 등으로 저장소에 도달할 수 없는 경우입니다.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Redis 명령 에러
    ///
    /// 잘못된 명령, 키 타입 불일치(WRONGTYPE), JSON 모듈 미설치 등
    /// 서버가 명령을 거부한 경우입니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// JSON 직렬화/역직렬화 에러
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 조건부 쓰기 충돌 에러
    ///
    /// `NX`(없을 때만) 또는 `XX`(있을 때만) 조건을 만족하지 못해
    /// 저장소가 쓰기를 거부한 경우입니다. 저장된 값은 변경되지 않습니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<redis::RedisError> for AppError {
    /// Redis 에러를 분류하여 변환합니다.
    ///
    /// I/O 및 연결 관련 에러는 `ConnectionError`로, 나머지는 `RedisError`로 매핑합니다.
    fn from(e: redis::RedisError) -> Self {
        if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() {
            AppError::ConnectionError(e.to_string())
        } else {
            AppError::RedisError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_becomes_serialization_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_error: AppError = err.into();

        assert!(matches!(app_error, AppError::SerializationError(_)));
    }

    #[test]
    fn test_redis_type_error_becomes_redis_error() {
        let err = redis::RedisError::from((redis::ErrorKind::TypeError, "Response was of incompatible type"));
        let app_error: AppError = err.into();

        assert!(matches!(app_error, AppError::RedisError(_)));
    }

    #[test]
    fn test_redis_io_error_becomes_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let app_error: AppError = redis::RedisError::from(io).into();

        assert!(matches!(app_error, AppError::ConnectionError(_)));
    }

    #[test]
    fn test_error_display_messages() {
        let error = AppError::ConflictError("JohnDoeJSON already exists".to_string());
        assert_eq!(error.to_string(), "Conflict error: JohnDoeJSON already exists");

        let error = AppError::NotFound("JohnDoeHash".to_string());
        assert_eq!(error.to_string(), "Not found: JohnDoeHash");
    }
}
