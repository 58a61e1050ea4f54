use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "symptom-predict")]
#[command(about = "症状から疾患を予測するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先URL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 症状カタログを表示
    Symptoms {
        /// 絞り込み（部分一致、大文字小文字を区別しない）
        #[arg(short, long)]
        search: Option<String>,
    },

    /// 症状IDを指定して疾患を予測
    Predict {
        /// 症状ID（例: headache high_fever）
        #[arg(required = true)]
        symptoms: Vec<String>,
    },

    /// 医療文書をアップロードして症状を抽出
    Upload {
        /// ファイルパス（PDF/PNG/JPG/JPEG/GIF/BMP/TIFF）
        #[arg(required = true)]
        file: PathBuf,

        /// 抽出した症状でそのまま予測
        #[arg(short, long)]
        predict: bool,
    },

    /// 対話的に症状を選んで予測
    Interactive,

    /// 設定を表示/編集
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from(["symptom-predict", "predict", "headache", "high_fever"])
            .expect("パース失敗");
        match cli.command {
            Commands::Predict { symptoms } => assert_eq!(symptoms, vec!["headache", "high_fever"]),
            _ => panic!("predictとして解釈されるべき"),
        }
    }

    #[test]
    fn test_predict_requires_symptoms() {
        assert!(Cli::try_parse_from(["symptom-predict", "predict"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "symptom-predict",
            "symptoms",
            "--search",
            "fev",
            "--verbose",
            "--base-url",
            "http://host:5001",
        ])
        .expect("パース失敗");
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://host:5001"));
        match cli.command {
            Commands::Symptoms { search } => assert_eq!(search.as_deref(), Some("fev")),
            _ => panic!("symptomsとして解釈されるべき"),
        }
    }
}
