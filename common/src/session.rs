//! 症状選択UIの状態
//!
//! 画面（Web/CLI）ごとに1インスタンス持つ。
//! 通信を伴う操作は `begin_*` / `finish_*` に分かれており、
//! その間でバックエンドを呼ぶ。`predict` / `upload` は両方をまとめた非同期版。

use crate::api::{ApiReply, PredictRequest, PredictResponse, UploadResponse};
use crate::backend::Backend;
use crate::catalog::{Catalog, CatalogResponse, CatalogSource};
use crate::error::{Error, Result, ValidationError};
use crate::notification::{Notice, NoticeKind, Notifications};
use crate::ocr::OcrResult;
use crate::prediction::Prediction;
use crate::progress::SimulatedProgress;
use crate::selection::SelectionState;
use crate::symptom::Symptom;
use crate::upload::{validate_upload, UploadMeta};
use tracing::{debug, warn};

pub const PREDICT_FAILED: &str = "Prediction failed.";
pub const PREDICT_TRANSPORT_FAILED: &str = "An error occurred while predicting. Please try again.";
pub const UPLOAD_FAILED: &str = "Failed to process file";
pub const UPLOAD_TRANSPORT_FAILED: &str = "An error occurred while processing the file";

/// 失敗時に表示するメッセージ
///
/// サーバーのメッセージ > 通信失敗の定型文 > 汎用の定型文
fn failure_message(error: &Error, fallback: &str, transport: &str) -> String {
    if let Some(message) = error.server_message() {
        return message.to_string();
    }
    if error.is_transport() {
        transport.to_string()
    } else {
        fallback.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    catalog_source: Option<CatalogSource>,
    selection: SelectionState,
    query: String,
    prediction: Option<Prediction>,
    ocr: Option<OcrResult>,
    notices: Notifications,
    predicting: bool,
    uploading: bool,
    progress: SimulatedProgress,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================
    // カタログ
    // =============================================

    /// カタログ取得結果を反映。失敗・空ならフォールバック一覧
    pub fn load_catalog(&mut self, result: Result<ApiReply<CatalogResponse>>) -> CatalogSource {
        let remote = match result {
            Ok(reply) if reply.is_success() => reply.body.map(|b| b.symptoms).unwrap_or_default(),
            Ok(reply) => {
                warn!(status = reply.status, "symptom catalog request failed");
                Vec::new()
            }
            Err(error) => {
                warn!(%error, "symptom catalog request failed");
                Vec::new()
            }
        };

        let catalog = Catalog::from_ids(remote);
        let source = if catalog.is_empty() {
            warn!("using fallback symptom catalog");
            self.catalog = Catalog::fallback();
            CatalogSource::Fallback
        } else {
            debug!(count = catalog.len(), "symptom catalog loaded");
            self.catalog = catalog;
            CatalogSource::Remote
        };
        self.catalog_source = Some(source);
        source
    }

    pub async fn load_catalog_from<B: Backend>(&mut self, backend: &B) -> CatalogSource {
        let result = backend.fetch_catalog().await;
        self.load_catalog(result)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_source(&self) -> Option<CatalogSource> {
        self.catalog_source
    }

    pub fn is_catalog_loaded(&self) -> bool {
        self.catalog_source.is_some()
    }

    // =============================================
    // 検索
    // =============================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// 検索語にマッチする症状（カタログ順）
    pub fn visible_symptoms(&self) -> Vec<Symptom> {
        self.catalog.filter(&self.query).cloned().collect()
    }

    // =============================================
    // 選択
    // =============================================

    pub fn toggle(&mut self, id: &str, selected: bool) -> bool {
        let changed = self.selection.toggle(id, selected);
        if changed {
            debug!(id, selected, count = self.selection.len(), "selection changed");
        }
        changed
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.toggle(id, false)
    }

    /// 選択解除と予測結果の非表示
    pub fn clear(&mut self) {
        self.selection.clear();
        self.prediction = None;
    }

    pub fn replace_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        self.selection.replace_all(ids);
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// タグ表示用（選択順）
    pub fn selected(&self) -> Vec<Symptom> {
        self.selection
            .iter()
            .map(|id| self.catalog.get(id).cloned().unwrap_or_else(|| Symptom::new(id)))
            .collect()
    }

    pub fn can_predict(&self) -> bool {
        self.selection.can_predict() && !self.predicting
    }

    // =============================================
    // 予測
    // =============================================

    pub fn begin_predict(&mut self) -> Result<PredictRequest> {
        if self.predicting {
            return Err(Error::Busy);
        }
        if self.selection.is_empty() {
            let error = ValidationError::EmptySelection;
            self.notices.push(NoticeKind::Warning, error.to_string());
            return Err(error.into());
        }

        self.predicting = true;
        Ok(PredictRequest {
            symptoms: self.selection.to_vec(),
        })
    }

    /// 成功・失敗どちらでも送信中フラグを戻す
    pub fn finish_predict(&mut self, result: Result<ApiReply<PredictResponse>>) -> Result<()> {
        self.predicting = false;

        let outcome = result
            .and_then(|reply| reply.into_body(PREDICT_FAILED))
            .and_then(Prediction::from_response);

        match outcome {
            Ok(prediction) => {
                debug!(disease = %prediction.disease, confidence = prediction.confidence, "prediction received");
                self.prediction = Some(prediction);
                Ok(())
            }
            Err(error) => {
                warn!(%error, "prediction failed");
                let message = failure_message(&error, PREDICT_FAILED, PREDICT_TRANSPORT_FAILED);
                self.notices.push(NoticeKind::Danger, message);
                Err(error)
            }
        }
    }

    pub async fn predict<B: Backend>(&mut self, backend: &B) -> Result<()> {
        let request = self.begin_predict()?;
        let result = backend.predict(&request).await;
        self.finish_predict(result)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn is_predicting(&self) -> bool {
        self.predicting
    }

    // =============================================
    // アップロード / OCR
    // =============================================

    pub fn begin_upload(&mut self, meta: &UploadMeta) -> Result<()> {
        if self.uploading {
            return Err(Error::Busy);
        }
        if let Err(error) = validate_upload(meta) {
            self.notices.push(NoticeKind::Danger, error.to_string());
            return Err(error.into());
        }

        debug!(name = %meta.name, mime = %meta.mime, size = meta.size, "upload started");
        self.uploading = true;
        self.progress.start();
        Ok(())
    }

    pub fn tick_progress(&mut self, step: f64) {
        self.progress.tick(step);
    }

    /// 成功・失敗どちらでもプログレスを100%にして送信中フラグを戻す
    pub fn finish_upload(&mut self, result: Result<ApiReply<UploadResponse>>) -> Result<()> {
        self.uploading = false;
        self.progress.complete();

        match result.and_then(|reply| reply.into_body(UPLOAD_FAILED)) {
            Ok(response) => {
                let ocr = OcrResult::from_response(response);
                debug!(found = ocr.found_symptoms.len(), "ocr result received");
                self.ocr = Some(ocr);
                Ok(())
            }
            Err(error) => {
                warn!(%error, "upload failed");
                let message = failure_message(&error, UPLOAD_FAILED, UPLOAD_TRANSPORT_FAILED);
                self.notices.push(NoticeKind::Danger, message);
                Err(error)
            }
        }
    }

    /// 完了後の遅延非表示。次のアップロードが始まっていれば何もしない
    pub fn hide_progress(&mut self) {
        if self.uploading {
            return;
        }
        self.progress.hide();
    }

    pub async fn upload<B: Backend>(&mut self, backend: &B, meta: &UploadMeta, file: B::Upload) -> Result<()> {
        self.begin_upload(meta)?;
        let result = backend.upload(meta, file).await;
        self.finish_upload(result)
    }

    /// OCRで検出した症状で選択を置き換える。取り込んだ件数を返す
    pub fn use_detected_symptoms(&mut self) -> usize {
        let Some(found) = self.ocr.as_ref().map(|ocr| ocr.found_symptoms.clone()) else {
            return 0;
        };

        self.replace_all(&found);
        self.notices.push(
            NoticeKind::Success,
            format!("Successfully loaded {} symptoms from your document!", found.len()),
        );
        found.len()
    }

    pub fn ocr(&self) -> Option<&OcrResult> {
        self.ocr.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn progress(&self) -> &SimulatedProgress {
        &self.progress
    }

    // =============================================
    // 通知
    // =============================================

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.notices.push(kind, message)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        self.notices.dismiss(id)
    }

    pub fn notices(&self) -> &Notifications {
        &self.notices
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}
