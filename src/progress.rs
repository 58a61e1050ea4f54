//! アップロード中の疑似プログレス表示
//!
//! リクエストの完了を待つ間、一定間隔で `Session::tick_progress` を進め、
//! その値を indicatif のバーに反映する。

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::Duration;
use symptom_common::progress::{MAX_STEP, TICK_INTERVAL_MS};
use symptom_common::{Backend, Session, UploadMeta};

/// [0, MAX_STEP) の乱数ステップ
pub fn jitter_step() -> f64 {
    rand::thread_rng().gen_range(0.0..MAX_STEP)
}

fn progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(100);
    let style = ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
        .map(|style| style.progress_chars("=> "))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// アップロードを実行し、完了まで疑似プログレスを進める
///
/// 結果の反映（OCR結果・通知）は `Session::finish_upload` と同じ。
pub async fn upload_with_progress<B: Backend>(
    session: &mut Session,
    backend: &B,
    meta: &UploadMeta,
    file: B::Upload,
    hidden: bool,
) -> symptom_common::Result<()> {
    session.begin_upload(meta)?;

    let pb = progress_bar(hidden);
    pb.set_message("Processing document...");

    let request = backend.upload(meta, file);
    tokio::pin!(request);

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS as u64));
    // 最初のtickは即時に完了するので読み捨てる
    ticker.tick().await;

    let result = loop {
        tokio::select! {
            result = &mut request => break result,
            _ = ticker.tick() => {
                session.tick_progress(jitter_step());
                pb.set_position(session.progress().value() as u64);
            }
        }
    };

    let outcome = session.finish_upload(result);
    pb.set_position(session.progress().value() as u64);
    match &outcome {
        Ok(()) => pb.finish_with_message("Done"),
        Err(_) => pb.abandon_with_message("Failed"),
    }
    session.hide_progress();

    outcome
}
