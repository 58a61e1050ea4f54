//! 予測結果カード

use crate::app::AppState;
use leptos::prelude::*;
use symptom_common::{format_percent, Prediction, DISCLAIMER};

#[component]
pub fn PredictionResult(state: AppState) -> impl IntoView {
    let session = state.session;
    let is_predicting = move || session.with(|s| s.is_predicting());
    let prediction = move || session.with(|s| s.prediction().cloned());

    view! {
        <Show when=is_predicting>
            <div id="loadingSpinner" class="loading">
                <div class="spinner-border text-primary" role="status" />
                <p>"Analyzing your symptoms..."</p>
            </div>
        </Show>
        {move || prediction().map(|p| view! { <PredictionCard prediction=p /> })}
    }
}

#[component]
fn PredictionCard(prediction: Prediction) -> impl IntoView {
    let level = prediction.level().as_str();
    let confidence = prediction.confidence_label();

    view! {
        <div class=format!("card prediction-card border-{}", level)>
            <div class=format!("card-header bg-{} text-white", level)>
                <h5 class="mb-0">"Prediction Results"</h5>
            </div>
            <div class="card-body">
                <div class="row">
                    <div class="col-md-6">
                        <h6 class="text-muted">"Primary Prediction"</h6>
                        <h4 class=format!("text-{}", level)>{prediction.disease.clone()}</h4>
                        {prediction.description.clone().map(|d| view! { <p class="description">{d}</p> })}
                        <div class="progress confidence-bar mb-3">
                            <div
                                class=format!("progress-bar confidence-fill bg-{}", level)
                                style=format!("width: {}", prediction.bar_width())
                            >
                                {format!("{} Confidence", confidence)}
                            </div>
                        </div>
                    </div>
                    <div class="col-md-6">
                        <h6 class="text-muted">"Other Possibilities"</h6>
                        {if prediction.alternatives.is_empty() {
                            view! { <p class="text-muted">"No other likely conditions."</p> }.into_any()
                        } else {
                            prediction
                                .alternatives
                                .iter()
                                .enumerate()
                                .map(|(index, alt)| {
                                    view! {
                                        <div class="prediction-item">
                                            <span class="badge bg-primary">{index + 1}</span>
                                            <div>
                                                <div class="prediction-name">{alt.disease.clone()}</div>
                                                {alt.description.clone().map(|d| view! { <small class="text-muted">{d}</small> })}
                                            </div>
                                            <span class="badge bg-secondary prediction-probability">
                                                {format_percent(alt.probability)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </div>
                <hr />
                <div class="alert alert-info">
                    <strong>"Disclaimer: "</strong>
                    {DISCLAIMER}
                </div>
            </div>
        </div>
    }
}
