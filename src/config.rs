use crate::error::{PredictorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "SYMPTOM_PREDICTOR_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければデフォルト設定
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PredictorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("symptom-predictor").join("config.json"))
    }

    /// 接続先URL（優先順: 引数 > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env = std::env::var(BASE_URL_ENV).ok();
        normalize_base_url(&pick_base_url(cli_override, env.as_deref(), &self.base_url))
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = normalize_base_url(&url)?;
        self.save()
    }
}

fn pick_base_url(cli_override: Option<&str>, env: Option<&str>, configured: &str) -> String {
    [cli_override, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(configured)
        .trim_end_matches('/')
        .to_string()
}

/// http(s) のURLのみ受け付け、末尾のスラッシュを除く
pub fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(PredictorError::Config(format!(
            "URLは http:// または https:// で始めてください: {}",
            url
        )));
    }
    Ok(trimmed.to_string())
}
