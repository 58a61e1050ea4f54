//! 選択中の症状タグと予測/クリアボタン

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn SelectedSymptoms(state: AppState) -> impl IntoView {
    let session = state.session;
    let selected = move || session.with(|s| s.selected());
    let has_selection = move || session.with(|s| !s.selection().is_empty());
    let is_predicting = move || session.with(|s| s.is_predicting());

    view! {
        <div class="selected-symptoms">
            <h2>"Selected Symptoms"</h2>

            <Show
                when=has_selection
                fallback=|| view! { <p class="text-muted">"No symptoms selected yet."</p> }
            >
                <div id="selectedSymptoms" class="selected-symptom-tags">
                    <For
                        each=selected
                        key=|symptom| symptom.id.clone()
                        children=move |symptom| {
                            let id = symptom.id.clone();
                            view! {
                                <span class="selected-symptom-tag">
                                    {symptom.label.clone()}
                                    <button
                                        type="button"
                                        class="remove-btn"
                                        aria-label="Remove"
                                        on:click=move |_| state.remove(&id)
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
            </Show>

            <div class="actions">
                <button
                    id="predictBtn"
                    class="btn btn-primary"
                    disabled=move || !session.with(|s| s.can_predict())
                    on:click=move |_| state.predict()
                >
                    {move || if is_predicting() { "Predicting..." } else { "Predict Disease" }}
                </button>
                <button
                    id="clearBtn"
                    class="btn btn-secondary"
                    on:click=move |_| state.clear()
                >
                    "Clear All"
                </button>
            </div>
        </div>
    }
}
