//! 症状カタログ
//!
//! バックエンドから取得した症状一覧、または取得失敗時のフォールバック一覧。
//! 一度読み込んだら変更しない。

use crate::symptom::Symptom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// カタログ取得失敗時に使う症状ID
pub const FALLBACK_SYMPTOMS: [&str; 10] = [
    "continuous_sneezing",
    "chills",
    "high_fever",
    "fatigue",
    "cough",
    "runny_nose",
    "congestion",
    "headache",
    "body_pain",
    "sore_throat",
];

/// カタログの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Fallback,
}

/// `GET /api/symptoms` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// 症状カタログ（表示順を保持、ID重複なし）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    symptoms: Vec<Symptom>,
}

impl Catalog {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let symptoms = ids
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| !id.trim().is_empty())
            .filter(|id| seen.insert(id.clone()))
            .map(Symptom::new)
            .collect();
        Self { symptoms }
    }

    pub fn fallback() -> Self {
        Self::from_ids(FALLBACK_SYMPTOMS)
    }

    pub fn get(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// 検索語で絞り込み（表示のみ、選択状態には影響しない）
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Symptom> + 'a {
        self.symptoms.iter().filter(move |s| s.matches(query))
    }
}
