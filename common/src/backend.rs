//! バックエンド通信の抽象
//!
//! Web(fetch)とCLI(reqwest)でそれぞれ実装する。

use crate::api::{ApiReply, PredictRequest, PredictResponse, UploadResponse};
use crate::catalog::CatalogResponse;
use crate::error::Result;
use crate::upload::UploadMeta;

/// 症状予測バックエンド
///
/// 戻り値の `Err` は通信自体の失敗のみ。
/// HTTPエラーやアプリケーションエラーは [`ApiReply`] で返す。
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// アップロードするファイル本体（Webは `web_sys::File`、CLIはバイト列）
    type Upload;

    async fn fetch_catalog(&self) -> Result<ApiReply<CatalogResponse>>;

    async fn predict(&self, request: &PredictRequest) -> Result<ApiReply<PredictResponse>>;

    async fn upload(&self, meta: &UploadMeta, file: Self::Upload) -> Result<ApiReply<UploadResponse>>;
}

/// ベースURLとパスを結合（末尾/先頭のスラッシュ重複を除去）
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:5001", "/predict"), "http://localhost:5001/predict");
        assert_eq!(join_url("http://localhost:5001/", "/predict"), "http://localhost:5001/predict");
        assert_eq!(join_url("http://host/app", "api/symptoms"), "http://host/app/api/symptoms");
        assert_eq!(join_url("", "/upload"), "/upload");
    }
}
