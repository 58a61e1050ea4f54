//! 予測バックエンド連携（reqwest）
//!
//! - GET  /api/symptoms : 症状カタログ
//! - POST /predict      : 症状 → 疾患予測（JSON）
//! - POST /upload       : ドキュメント → OCR症状抽出（multipart）

use crate::error::{PredictorError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use symptom_common::api::{PREDICT_PATH, SYMPTOMS_PATH, UPLOAD_FIELD, UPLOAD_PATH};
use symptom_common::{
    join_url, mime_for_extension, ApiReply, Backend, CatalogResponse, Error, PredictRequest,
    PredictResponse, UploadMeta, UploadResponse,
};
use tracing::debug;

/// 拡張子から判別できないファイルの MIME
const UNKNOWN_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn network_error(error: reqwest::Error) -> Error {
    Error::Network(error.to_string())
}

/// リクエスト送信（共通処理）
///
/// ステータスに関わらずボディをJSONとして読む。JSONでなければ `body: None`。
/// 型が合わなくても `error` フィールドは残す。
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> symptom_common::Result<ApiReply<T>> {
    let response = request.send().await.map_err(network_error)?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(network_error)?;
    debug!(status, bytes = bytes.len(), "response received");

    Ok(ApiReply::from_json(status, serde_json::from_slice(&bytes).ok()))
}

impl Backend for HttpBackend {
    type Upload = Vec<u8>;

    async fn fetch_catalog(&self) -> symptom_common::Result<ApiReply<CatalogResponse>> {
        send(self.client.get(self.url(SYMPTOMS_PATH))).await
    }

    async fn predict(&self, payload: &PredictRequest) -> symptom_common::Result<ApiReply<PredictResponse>> {
        send(self.client.post(self.url(PREDICT_PATH)).json(payload)).await
    }

    async fn upload(&self, meta: &UploadMeta, file: Vec<u8>) -> symptom_common::Result<ApiReply<UploadResponse>> {
        let part = Part::bytes(file)
            .file_name(meta.name.clone())
            .mime_str(&meta.mime)
            .map_err(network_error)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        send(self.client.post(self.url(UPLOAD_PATH)).multipart(form)).await
    }
}

/// ファイルのメタ情報（名前・拡張子からのMIME・サイズ）
pub fn upload_meta(path: &Path) -> Result<UploadMeta> {
    if !path.is_file() {
        return Err(PredictorError::FileNotFound(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .unwrap_or(UNKNOWN_MIME);

    Ok(UploadMeta::new(name, mime, size))
}
