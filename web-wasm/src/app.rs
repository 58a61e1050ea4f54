//! メインアプリケーションコンポーネント

use crate::api::backend::FetchBackend;
use crate::components::{
    alerts::Alerts,
    header::Header,
    ocr_results::OcrResults,
    prediction_result::PredictionResult,
    progress_bar::ProgressBar,
    selected_symptoms::SelectedSymptoms,
    symptom_checklist::SymptomChecklist,
    upload_area::UploadArea,
};
use gloo::timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use symptom_common::progress::{HIDE_DELAY_MS, MAX_STEP, TICK_INTERVAL_MS};
use symptom_common::{Backend, Session, UploadMeta};
use web_sys::{File, ScrollBehavior, ScrollIntoViewOptions};

pub const SYMPTOMS_SECTION_ID: &str = "symptoms";
pub const SELECTION_SECTION_ID: &str = "prediction";
pub const RESULTS_SECTION_ID: &str = "results";
pub const UPLOAD_SECTION_ID: &str = "upload";
pub const OCR_SECTION_ID: &str = "ocrResults";

/// アプリケーションの状態
///
/// 画面全体で1つ。`Session` をシグナルで包み、通信はここから起動する。
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<Session>,
    backend: StoredValue<FetchBackend>,
}

impl AppState {
    pub fn new(backend: FetchBackend) -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            backend: StoredValue::new(backend),
        }
    }

    /// カタログ読み込み（1回のみ、失敗時はフォールバック）
    pub fn load_catalog(self) {
        spawn_local(async move {
            let backend = self.backend.get_value();
            let result = backend.fetch_catalog().await;
            if let Err(e) = &result {
                gloo::console::error!(format!("Error loading symptoms: {}", e));
            }
            self.session.update(|s| {
                s.load_catalog(result);
            });
        });
    }

    pub fn set_query(self, query: String) {
        self.session.update(|s| s.set_query(query));
    }

    pub fn toggle(self, id: &str, selected: bool) {
        self.session.update(|s| {
            s.toggle(id, selected);
        });
    }

    pub fn remove(self, id: &str) {
        self.session.update(|s| {
            s.remove(id);
        });
    }

    pub fn clear(self) {
        self.session.update(|s| s.clear());
    }

    pub fn dismiss(self, id: u64) {
        self.session.update(|s| {
            s.dismiss(id);
        });
    }

    /// 予測実行。選択が空なら警告のみで通信しない
    pub fn predict(self) {
        let Some(Ok(request)) = self.session.try_update(|s| s.begin_predict()) else {
            return;
        };

        spawn_local(async move {
            let backend = self.backend.get_value();
            let result = backend.predict(&request).await;
            match self.session.try_update(|s| s.finish_predict(result)) {
                Some(Ok(())) => scroll_to_later(RESULTS_SECTION_ID),
                Some(Err(e)) => gloo::console::error!(format!("Prediction error: {}", e)),
                None => {}
            }
        });
    }

    /// ファイルアップロード。検証エラーなら通信しない
    pub fn upload(self, file: File) {
        let meta = UploadMeta::new(file.name(), file.type_(), file.size() as u64);
        if !matches!(self.session.try_update(|s| s.begin_upload(&meta)), Some(Ok(()))) {
            return;
        }

        // 疑似プログレス（dropで停止）
        let ticker = Interval::new(TICK_INTERVAL_MS, move || {
            self.session
                .update(|s| s.tick_progress(js_sys::Math::random() * MAX_STEP));
        });

        spawn_local(async move {
            let backend = self.backend.get_value();
            let result = backend.upload(&meta, file).await;
            drop(ticker);

            let outcome = self.session.try_update(|s| s.finish_upload(result));
            Timeout::new(HIDE_DELAY_MS, move || {
                self.session.update(|s| s.hide_progress());
            })
            .forget();

            match outcome {
                Some(Ok(())) => scroll_to_later(OCR_SECTION_ID),
                Some(Err(e)) => gloo::console::error!(format!("Upload error: {}", e)),
                None => {}
            }
        });
    }

    /// OCRで検出した症状で選択を置き換え、選択欄へスクロール
    pub fn use_detected_symptoms(self) {
        self.session.update(|s| {
            s.use_detected_symptoms();
        });
        scroll_to_later(SELECTION_SECTION_ID);
    }
}

fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// 描画反映後にスクロール
fn scroll_to_later(id: &'static str) {
    Timeout::new(0, move || scroll_to(id)).forget();
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(FetchBackend::from_document());
    state.load_catalog();

    let session = state.session;
    let progress = Signal::derive(move || session.with(|s| s.progress().value()));
    let progress_visible = move || session.with(|s| s.progress().is_visible());

    view! {
        <div class="container">
            <Header />
            <Alerts state=state />

            <section id=SYMPTOMS_SECTION_ID class="section">
                <SymptomChecklist state=state />
            </section>

            <section id=SELECTION_SECTION_ID class="section">
                <SelectedSymptoms state=state />
            </section>

            <section id=RESULTS_SECTION_ID class="section">
                <PredictionResult state=state />
            </section>

            <section id=UPLOAD_SECTION_ID class="section">
                <UploadArea
                    is_uploading=Signal::derive(move || session.with(|s| s.is_uploading()))
                    on_file=move |file| state.upload(file)
                />
                <Show when=progress_visible>
                    <ProgressBar progress=progress />
                </Show>
            </section>

            <section id=OCR_SECTION_ID class="section">
                <OcrResults state=state />
            </section>

            <section id="about" class="section about">
                <h2>"About"</h2>
                <p>
                    "Select the symptoms you are experiencing, or upload a medical document "
                    "and let the system extract them for you. The prediction model and the "
                    "document reader run on the server."
                </p>
            </section>
        </div>
    }
}
