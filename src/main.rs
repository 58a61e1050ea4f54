use anyhow::Context;
use clap::Parser;
use symptom_common::{CatalogSource, Session};
use symptom_predictor::{cli, client, config, error, interactive, logging, progress, render};
use cli::{Cli, Commands};
use client::HttpBackend;
use config::Config;
use error::{PredictorError, Result};
use render::print_notices;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        // 失敗内容は通知として表示済み
        Err(PredictorError::Session(_)) => std::process::exit(1),
        other => other.context("symptom-predict の実行に失敗しました"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
    let backend = HttpBackend::new(&base_url, config.timeout_seconds)?;
    info!(base_url = %backend.base_url(), "using backend");

    let mut session = Session::new();

    match cli.command {
        Commands::Symptoms { search } => {
            load_catalog(&mut session, &backend).await;
            if let Some(query) = search {
                session.set_query(query);
            }
            println!("{}", render::render_catalog(&session));
        }

        Commands::Predict { symptoms } => {
            println!("🩺 symptom-predict - 疾患予測\n");

            load_catalog(&mut session, &backend).await;
            for id in &symptoms {
                session.toggle(id.trim(), true);
            }
            println!("{}\n", render::render_selection(&session));

            predict(&mut session, &backend).await?;
        }

        Commands::Upload { file, predict: and_predict } => {
            println!("📄 symptom-predict - 文書アップロード\n");

            let meta = client::upload_meta(&file)?;
            // 検証で弾かれるファイルは読まない
            let bytes = if symptom_common::validate_upload(&meta).is_ok() {
                tokio::fs::read(&file).await?
            } else {
                Vec::new()
            };

            let outcome = progress::upload_with_progress(&mut session, &backend, &meta, bytes, false).await;
            print_notices(&mut session);
            outcome?;

            if let Some(ocr) = session.ocr() {
                println!("\n{}\n", render::render_ocr(ocr));
            }

            if and_predict {
                load_catalog(&mut session, &backend).await;
                session.use_detected_symptoms();
                print_notices(&mut session);
                println!("{}\n", render::render_selection(&session));
                predict(&mut session, &backend).await?;
            }
        }

        Commands::Interactive => {
            println!("🩺 symptom-predict - 対話モード\n");
            load_catalog(&mut session, &backend).await;
            interactive::run(&mut session, &backend).await?;
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ 接続先を設定しました: {}", config.base_url);
            }

            if show {
                println!("設定:");
                println!("  接続先: {}", config.base_url);
                println!("  実際の接続先: {}", base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// カタログ読み込み（失敗時はフォールバック一覧で続行）
async fn load_catalog(session: &mut Session, backend: &HttpBackend) {
    if session.load_catalog_from(backend).await == CatalogSource::Fallback {
        println!("⚠ Showing a limited symptom list (server catalog unavailable).\n");
    }
}

async fn predict(session: &mut Session, backend: &HttpBackend) -> Result<()> {
    println!("Analyzing your symptoms...");
    let outcome = session.predict(backend).await;
    print_notices(session);
    outcome?;

    if let Some(prediction) = session.prediction() {
        println!("\n{}", render::render_prediction(prediction));
    }
    Ok(())
}
