//! 選択中の症状（挿入順を保持する集合）

use serde::{Deserialize, Serialize};

/// 選択状態
///
/// 重複なし。タグ表示は挿入順。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    ids: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択/解除。集合が変化したらtrue
    pub fn toggle(&mut self, id: &str, selected: bool) -> bool {
        if selected {
            self.add(id)
        } else {
            self.remove(id)
        }
    }

    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// 全置換（OCR結果の取り込み用）
    pub fn replace_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        for id in ids {
            self.add(id.as_ref());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 予測ボタンを有効にできるか
    pub fn can_predict(&self) -> bool {
        !self.is_empty()
    }
}
