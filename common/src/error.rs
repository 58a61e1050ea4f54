//! エラー型定義

use thiserror::Error;

/// 入力検証エラー（ネットワーク呼び出し前に検出）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select at least one symptom.")]
    EmptySelection,

    #[error("Please select a valid file type (PDF, PNG, JPG, JPEG, GIF, BMP, TIFF)")]
    UnsupportedFileType(String),

    #[error("File size must be less than 16MB")]
    FileTooLarge(u64),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Request already in progress")]
    Busy,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("{0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// サーバーが返したメッセージ（あれば）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api(message) if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// 通信層の失敗か（fetch自体の失敗・壊れたレスポンス）
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Json(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
