//! Symptom Predictor CLI
//!
//! 症状カタログの閲覧、疾患予測、医療文書のOCR取り込みを端末から行う。
//! 状態遷移は `symptom_common::Session` を Web版と共有する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod progress;
pub mod render;
