//! OCR結果（アップロードしたドキュメントから抽出した症状）

use crate::api::UploadResponse;
use crate::symptom::Symptom;

pub const NO_SYMPTOMS_DETECTED: &str = "No symptoms detected in the document";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcrResult {
    pub extracted_text: String,
    pub found_symptoms: Vec<String>,
}

impl OcrResult {
    pub fn from_response(response: UploadResponse) -> Self {
        Self {
            extracted_text: response.extracted_text.unwrap_or_default(),
            found_symptoms: response.found_symptoms,
        }
    }

    pub fn has_symptoms(&self) -> bool {
        !self.found_symptoms.is_empty()
    }

    /// バッジ表示用
    pub fn detected(&self) -> Vec<Symptom> {
        self.found_symptoms.iter().map(|id| Symptom::new(id.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response() {
        let response = UploadResponse {
            success: Some(true),
            extracted_text: Some("High fever and chills since Monday".into()),
            found_symptoms: vec!["high_fever".into(), "chills".into()],
            ..Default::default()
        };
        let result = OcrResult::from_response(response);
        assert_eq!(result.extracted_text, "High fever and chills since Monday");
        assert!(result.has_symptoms());

        let labels: Vec<String> = result.detected().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["High Fever", "Chills"]);
    }

    #[test]
    fn test_no_symptoms() {
        let result = OcrResult::from_response(UploadResponse {
            extracted_text: Some("illegible".into()),
            ..Default::default()
        });
        assert!(!result.has_symptoms());
        assert!(result.detected().is_empty());
    }
}
