//! 予測結果の表示モデル

use crate::api::{PredictResponse, RankedPrediction};
use crate::error::{Error, Result};

pub const DISCLAIMER: &str = "This prediction is for educational purposes only. \
Please consult a healthcare professional for proper diagnosis and treatment.";

/// 信頼度の段階（カード色に使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceLevel::High
        } else if confidence >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Bootstrapの色クラス
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "success",
            ConfidenceLevel::Medium => "warning",
            ConfidenceLevel::Low => "danger",
        }
    }
}

/// 0〜100に丸める（NaNは0）
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// パーセント表記（小数2桁まで、末尾の0は付けない）
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}%", rounded)
}

/// 予測結果
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
    pub description: Option<String>,
    pub alternatives: Vec<RankedPrediction>,
}

impl Prediction {
    pub fn from_response(response: PredictResponse) -> Result<Self> {
        let disease = response
            .prediction
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| Error::Api("Prediction failed.".to_string()))?;

        // 上位候補のうち主予測と同じものは除外
        let alternatives = response
            .top_predictions
            .into_iter()
            .filter(|p| p.disease != disease)
            .collect();

        Ok(Self {
            confidence: clamp_percent(response.confidence.unwrap_or(0.0)),
            description: response.description.filter(|d| !d.trim().is_empty()),
            disease,
            alternatives,
        })
    }

    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }

    /// 例: "72%"
    pub fn confidence_label(&self) -> String {
        format_percent(self.confidence)
    }

    /// 信頼度バーのCSS幅
    pub fn bar_width(&self) -> String {
        format!("{}%", clamp_percent(self.confidence))
    }
}
