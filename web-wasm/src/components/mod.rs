//! UIコンポーネント

pub mod alerts;
pub mod header;
pub mod ocr_results;
pub mod prediction_result;
pub mod progress_bar;
pub mod selected_symptoms;
pub mod symptom_checklist;
pub mod upload_area;
