//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use symptom_common::{Error, ValidationError};
use symptom_predictor::client::upload_meta;
use symptom_predictor::error::PredictorError;

/// 存在しないファイルをアップロードしようとした場合
#[test]
fn test_upload_nonexistent_file() {
    let result = upload_meta(Path::new("/nonexistent/path/12345.pdf"));
    assert!(matches!(result, Err(PredictorError::FileNotFound(_))));
}

/// 画面の失敗はサーバーのメッセージをそのまま表示
#[test]
fn test_session_error_display_passthrough() {
    let err: PredictorError = Error::Api("Unknown symptom: foo".to_string()).into();
    assert_eq!(err.to_string(), "Unknown symptom: foo");

    let err: PredictorError = Error::Validation(ValidationError::EmptySelection).into();
    assert_eq!(err.to_string(), "Please select at least one symptom.");
}

/// PredictorErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PredictorError::Config("テスト設定エラー".to_string()),
        PredictorError::FileNotFound("report.pdf".to_string()),
        PredictorError::Prompt("入力中断".to_string()),
        PredictorError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test")),
    ];

    for err in errors {
        let display = err.to_string();
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}
