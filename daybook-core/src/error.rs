//! Error types for daybook.

use thiserror::Error;

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("일정을 찾을 수 없습니다: {0}")]
    EventNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("저장 오류: {0}")]
    Storage(String),

    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("데이터 형식 오류: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DaybookError {
    fn from(e: serde_json::Error) -> Self {
        DaybookError::Serialization(e.to_string())
    }
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
