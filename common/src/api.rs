//! バックエンドAPIのリクエスト/レスポンス型
//!
//! - `GET /api/symptoms` → [`CatalogResponse`](crate::CatalogResponse)
//! - `POST /predict` → [`PredictResponse`]
//! - `POST /upload` (multipart, `file`) → [`UploadResponse`]

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SYMPTOMS_PATH: &str = "/api/symptoms";
pub const PREDICT_PATH: &str = "/predict";
pub const UPLOAD_PATH: &str = "/upload";

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// `POST /predict` のリクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
}

/// 候補疾患（確率は `probability` / `confidence` どちらのキーでも受け付ける）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRankedPrediction")]
pub struct RankedPrediction {
    pub disease: String,
    pub probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 受信時の形（両方のキーがあれば `probability` を優先）
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawRankedPrediction {
    disease: String,
    probability: Option<f64>,
    confidence: Option<f64>,
    description: Option<String>,
}

impl From<RawRankedPrediction> for RankedPrediction {
    fn from(raw: RawRankedPrediction) -> Self {
        Self {
            disease: raw.disease,
            probability: raw.probability.or(raw.confidence).unwrap_or(0.0),
            description: raw.description,
        }
    }
}

/// `POST /predict` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub top_predictions: Vec<RankedPrediction>,
    pub selected_symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `POST /upload` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    pub found_symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 成功フラグとエラーメッセージを持つレスポンス
pub trait Envelope {
    fn success_flag(&self) -> Option<bool>;
    fn error_message(&self) -> Option<&str>;
}

impl Envelope for PredictResponse {
    fn success_flag(&self) -> Option<bool> {
        self.success
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Envelope for UploadResponse {
    fn success_flag(&self) -> Option<bool> {
        self.success
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// HTTPステータスとJSONボディ（JSONでなければNone）
#[derive(Debug, Clone)]
pub struct ApiReply<T> {
    pub status: u16,
    pub body: Option<T>,
    /// 型変換に失敗したボディからも拾った `error` フィールド
    pub error: Option<String>,
}

impl<T> ApiReply<T> {
    pub fn new(status: u16, body: Option<T>) -> Self {
        Self { status, body, error: None }
    }

    pub fn ok(body: T) -> Self {
        Self::new(200, Some(body))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<T: DeserializeOwned> ApiReply<T> {
    /// 受信したJSON（JSONでなければ `None`）から組み立てる
    ///
    /// 想定外の形でも `error` が文字列ならメッセージは残す。
    pub fn from_json(status: u16, json: Option<serde_json::Value>) -> Self {
        let Some(value) = json else {
            return Self::new(status, None);
        };

        let error = value
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string);
        let body = serde_json::from_value::<T>(value).ok();
        Self { status, body, error }
    }
}

impl<T: Envelope> ApiReply<T> {
    /// 成功レスポンスのボディを取り出す
    ///
    /// 失敗とみなす条件:
    /// 1. `error` フィールドあり（型変換できないボディでも） → `Error::Api(error)`
    /// 2. 2xx以外 → `Error::Http(status)`
    /// 3. `success: false` → `Error::Api(fallback)`
    /// 4. 2xxだがJSONでない → `Error::Network`
    ///
    /// `success` が無い2xxレスポンスは成功扱い。
    pub fn into_body(self, fallback: &str) -> Result<T> {
        let success = self.is_success();
        let Some(body) = self.body else {
            if let Some(message) = self.error.filter(|m| !m.trim().is_empty()) {
                return Err(Error::Api(message));
            }
            return Err(if success {
                Error::Network("response body is not JSON".to_string())
            } else {
                Error::Http(self.status)
            });
        };

        if let Some(message) = body.error_message().filter(|m| !m.trim().is_empty()) {
            return Err(Error::Api(message.to_string()));
        }
        if !success {
            return Err(Error::Http(self.status));
        }
        if body.success_flag() == Some(false) {
            return Err(Error::Api(fallback.to_string()));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_serialize() {
        let request = PredictRequest {
            symptoms: vec!["cough".to_string(), "high_fever".to_string()],
        };
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"symptoms":["cough","high_fever"]}"#);
    }

    #[test]
    fn test_ranked_prediction_accepts_both_keys() {
        let by_probability: RankedPrediction =
            serde_json::from_str(r#"{"disease":"Flu","probability":72}"#).expect("デシリアライズ失敗");
        let by_confidence: RankedPrediction =
            serde_json::from_str(r#"{"disease":"Flu","confidence":72}"#).expect("デシリアライズ失敗");
        assert_eq!(by_probability, by_confidence);
        assert_eq!(by_probability.probability, 72.0);
    }

    #[test]
    fn test_ranked_prediction_with_both_keys() {
        let ranked: RankedPrediction =
            serde_json::from_str(r#"{"disease":"Flu","probability":72,"confidence":70}"#)
                .expect("デシリアライズ失敗");
        assert_eq!(ranked.probability, 72.0);

        let response: PredictResponse = serde_json::from_str(
            r#"{"prediction":"Flu","confidence":72,
                "top_predictions":[{"disease":"Cold","probability":20,"confidence":20}]}"#,
        )
        .expect("デシリアライズ失敗");
        assert_eq!(response.top_predictions[0].probability, 20.0);

        let reply: ApiReply<PredictResponse> = ApiReply::from_json(200, serde_json::to_value(&response).ok());
        assert!(reply.into_body("Prediction failed.").is_ok());
    }

    #[test]
    fn test_predict_response_deserialize_server_shape() {
        let json = r#"{
            "prediction": "Common Cold",
            "confidence": 64.5,
            "top_predictions": [
                {"disease": "Common Cold", "confidence": 64.5},
                {"disease": "Allergy", "confidence": 20.0}
            ],
            "selected_symptoms": ["chills", "cough"]
        }"#;
        let response: PredictResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.success, None);
        assert_eq!(response.prediction.as_deref(), Some("Common Cold"));
        assert_eq!(response.top_predictions.len(), 2);
        assert_eq!(response.selected_symptoms.len(), 2);
    }

    #[test]
    fn test_upload_response_deserialize() {
        let json = r#"{
            "success": true,
            "extracted_text": "Patient reports cough",
            "found_symptoms": ["cough"],
            "symptom_count": 1
        }"#;
        let response: UploadResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.success, Some(true));
        assert_eq!(response.found_symptoms, vec!["cough"]);
        assert_eq!(response.symptom_count, Some(1));
    }

    #[test]
    fn test_into_body_success_without_flag() {
        let reply = ApiReply::ok(PredictResponse {
            prediction: Some("Flu".into()),
            ..Default::default()
        });
        assert!(reply.into_body("Prediction failed.").is_ok());
    }

    #[test]
    fn test_into_body_error_field_wins() {
        let reply = ApiReply::new(
            400,
            Some(PredictResponse {
                error: Some("No symptoms selected".into()),
                ..Default::default()
            }),
        );
        match reply.into_body("Prediction failed.") {
            Err(Error::Api(message)) => assert_eq!(message, "No symptoms selected"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_into_body_success_false_uses_fallback() {
        let reply = ApiReply::ok(UploadResponse {
            success: Some(false),
            ..Default::default()
        });
        match reply.into_body("Failed to process file") {
            Err(Error::Api(message)) => assert_eq!(message, "Failed to process file"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_into_body_non_2xx_without_message() {
        let reply = ApiReply::new(500, Some(PredictResponse::default()));
        assert!(matches!(reply.into_body("x"), Err(Error::Http(500))));

        let reply: ApiReply<PredictResponse> = ApiReply::new(413, None);
        assert!(matches!(reply.into_body("x"), Err(Error::Http(413))));
    }

    #[test]
    fn test_into_body_non_json_2xx() {
        let reply: ApiReply<UploadResponse> = ApiReply::new(200, None);
        let error = reply.into_body("x").unwrap_err();
        assert!(error.is_transport());
    }

    #[test]
    fn test_from_json_keeps_error_of_unexpected_shape() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"error":"Model not loaded","top_predictions":"n/a"}"#)
                .expect("パース失敗");
        let reply: ApiReply<PredictResponse> = ApiReply::from_json(503, Some(json));
        assert!(reply.body.is_none());
        match reply.into_body("Prediction failed.") {
            Err(Error::Api(message)) => assert_eq!(message, "Model not loaded"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_without_body() {
        let reply: ApiReply<UploadResponse> = ApiReply::from_json(200, None);
        assert!(reply.body.is_none());
        assert!(reply.into_body("x").unwrap_err().is_transport());
    }
}
