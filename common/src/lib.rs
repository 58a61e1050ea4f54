//! Symptom Predictor Common Library
//!
//! CLIとWeb(WASM)で共有される症状選択UIの状態と通信型

pub mod api;
pub mod backend;
pub mod catalog;
pub mod error;
pub mod notification;
pub mod ocr;
pub mod prediction;
pub mod progress;
pub mod selection;
pub mod session;
pub mod symptom;
pub mod upload;

pub use api::{ApiReply, PredictRequest, PredictResponse, RankedPrediction, UploadResponse};
pub use backend::{join_url, Backend};
pub use catalog::{Catalog, CatalogResponse, CatalogSource, FALLBACK_SYMPTOMS};
pub use error::{Error, Result, ValidationError};
pub use notification::{Notice, NoticeKind, Notifications, AUTO_DISMISS_MS};
pub use ocr::{OcrResult, NO_SYMPTOMS_DETECTED};
pub use prediction::{format_percent, ConfidenceLevel, Prediction, DISCLAIMER};
pub use progress::SimulatedProgress;
pub use selection::SelectionState;
pub use session::Session;
pub use symptom::{format_symptom_name, Symptom};
pub use upload::{mime_for_extension, validate_upload, UploadMeta, MAX_UPLOAD_BYTES};
