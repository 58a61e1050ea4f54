//! 症状IDと表示ラベル

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// 症状ID（snake_case）を表示用ラベルに変換
///
/// - `_` を空白に置換
/// - 単語の先頭文字を大文字化
/// - 連続する空白を1つにまとめ、前後を除去
///
/// # Examples
/// ```
/// use symptom_common::format_symptom_name;
///
/// assert_eq!(format_symptom_name("high_fever"), "High Fever");
/// ```
pub fn format_symptom_name(id: &str) -> String {
    lazy_static::lazy_static! {
        static ref WORD_START_RE: Regex = Regex::new(r"\b\w").unwrap();
        static ref SPACES_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let spaced = id.replace('_', " ");
    let capitalized = WORD_START_RE.replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase());
    SPACES_RE.replace_all(&capitalized, " ").trim().to_string()
}

/// 症状（カタログの1項目）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub label: String,
}

impl Symptom {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = format_symptom_name(&id);
        Self { id, label }
    }

    /// 検索語にマッチするか（大文字小文字を区別しない部分一致）
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.label.to_lowercase().contains(&query.to_lowercase())
    }

    /// チェックボックスのDOM id
    pub fn element_id(&self) -> String {
        format!("symptom-{}", self.id.split_whitespace().collect::<Vec<_>>().join("-"))
    }
}
