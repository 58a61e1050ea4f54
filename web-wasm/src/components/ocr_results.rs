//! OCR結果（抽出テキストと検出症状）

use crate::app::AppState;
use leptos::prelude::*;
use symptom_common::{OcrResult, NO_SYMPTOMS_DETECTED};

#[component]
pub fn OcrResults(state: AppState) -> impl IntoView {
    let session = state.session;
    let ocr = move || session.with(|s| s.ocr().cloned());

    move || ocr().map(|result| view! { <OcrCard state=state result=result /> })
}

#[component]
fn OcrCard(state: AppState, result: OcrResult) -> impl IntoView {
    let has_symptoms = result.has_symptoms();
    let detected = if has_symptoms {
        result
            .detected()
            .into_iter()
            .map(|symptom| view! { <span class="badge bg-success me-2 mb-2">{symptom.label}</span> })
            .collect_view()
            .into_any()
    } else {
        view! { <span class="text-muted">{NO_SYMPTOMS_DETECTED}</span> }.into_any()
    };

    view! {
        <div class="card ocr-results">
            <div class="card-header">
                <h5 class="mb-0">"Document Analysis"</h5>
            </div>
            <div class="card-body">
                <h6>"Extracted Text"</h6>
                <pre id="extractedText" class="extracted-text">{result.extracted_text.clone()}</pre>

                <h6>"Detected Symptoms"</h6>
                <div id="detectedSymptoms">
                    {detected}
                </div>

                <button
                    id="useDetectedSymptoms"
                    class="btn btn-success"
                    on:click=move |_| state.use_detected_symptoms()
                >
                    "Use These Symptoms"
                </button>
            </div>
        </div>
    }
}
