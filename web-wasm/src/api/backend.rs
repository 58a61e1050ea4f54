//! 予測バックエンド連携（fetch API）
//!
//! - GET  /api/symptoms : 症状カタログ
//! - POST /predict      : 症状 → 疾患予測（JSON）
//! - POST /upload       : ドキュメント → OCR症状抽出（multipart）

use serde::de::DeserializeOwned;
use symptom_common::api::{PREDICT_PATH, SYMPTOMS_PATH, UPLOAD_FIELD, UPLOAD_PATH};
use symptom_common::{
    join_url, ApiReply, Backend, CatalogResponse, Error, PredictRequest, PredictResponse, Result,
    UploadMeta, UploadResponse,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ベースURLを上書きする `<meta>` の名前
const API_BASE_META: &str = "symptom-api-base";

/// fetchベースのバックエンド
#[derive(Debug, Clone, Default)]
pub struct FetchBackend {
    base_url: String,
}

impl FetchBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `<meta name="symptom-api-base" content="...">` があればそれを、なければ同一オリジン
    pub fn from_document() -> Self {
        let base_url = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"))
            .unwrap_or_default();
        Self::new(base_url)
    }

    pub fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            return path.to_string();
        }
        join_url(&self.base_url, path)
    }
}

/// JS例外を通信エラーへ
fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn request_init(method: &str) -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts
}

/// リクエスト送信（共通処理）
///
/// ステータスに関わらずボディをJSONとして読む。JSONでなければ `body: None`。
/// 型が合わなくても `error` フィールドは残す。
async fn send<T: DeserializeOwned>(request: Request) -> Result<ApiReply<T>> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;
    let status = resp.status();

    let body = match resp.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(json) => serde_wasm_bindgen::from_value::<serde_json::Value>(json).ok(),
            Err(_) => None,
        },
        Err(_) => None,
    };

    Ok(ApiReply::from_json(status, body))
}

impl Backend for FetchBackend {
    type Upload = File;

    async fn fetch_catalog(&self) -> Result<ApiReply<CatalogResponse>> {
        let opts = request_init("GET");
        let request = Request::new_with_str_and_init(&self.url(SYMPTOMS_PATH), &opts).map_err(js_error)?;
        send(request).await
    }

    async fn predict(&self, payload: &PredictRequest) -> Result<ApiReply<PredictResponse>> {
        let body = serde_json::to_string(payload)?;

        let opts = request_init("POST");
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.url(PREDICT_PATH), &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        send(request).await
    }

    async fn upload(&self, meta: &UploadMeta, file: File) -> Result<ApiReply<UploadResponse>> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &meta.name)
            .map_err(js_error)?;

        // Content-Typeはブラウザがboundary付きで設定する
        let opts = request_init("POST");
        opts.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(&self.url(UPLOAD_PATH), &opts).map_err(js_error)?;
        send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_same_origin() {
        let backend = FetchBackend::default();
        assert_eq!(backend.url(PREDICT_PATH), "/predict");
        assert_eq!(backend.url(SYMPTOMS_PATH), "/api/symptoms");
    }

    #[test]
    fn test_url_with_base() {
        let backend = FetchBackend::new("http://localhost:5001/");
        assert_eq!(backend.url(UPLOAD_PATH), "http://localhost:5001/upload");
    }
}
