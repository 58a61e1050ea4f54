//! 症状チェックリスト（検索付き）

use crate::app::AppState;
use leptos::prelude::*;
use symptom_common::{CatalogSource, Symptom};

#[component]
pub fn SymptomChecklist(state: AppState) -> impl IntoView {
    let session = state.session;
    let visible = move || session.with(|s| s.visible_symptoms());
    let is_loaded = move || session.with(|s| s.is_catalog_loaded());
    let is_fallback = move || session.with(|s| s.catalog_source() == Some(CatalogSource::Fallback));

    view! {
        <div class="symptom-checklist">
            <h2>"Select Your Symptoms"</h2>

            <div class="input-group mb-3">
                <span class="input-group-text">"🔍"</span>
                <input
                    type="text"
                    id="symptomSearch"
                    class="form-control"
                    placeholder="Search symptoms..."
                    prop:value=move || session.with(|s| s.query().to_string())
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                />
            </div>

            <Show when=is_fallback>
                <p class="text-muted small">"Showing a limited symptom list (server catalog unavailable)."</p>
            </Show>

            <Show
                when=is_loaded
                fallback=|| view! { <p class="text-muted">"Loading symptoms..."</p> }
            >
                <div class="symptoms-grid" id="symptomsGrid">
                    <For
                        each=visible
                        key=|symptom| symptom.id.clone()
                        children=move |symptom| view! { <SymptomItem state=state symptom=symptom /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SymptomItem(state: AppState, symptom: Symptom) -> impl IntoView {
    let session = state.session;
    let is_selected = {
        let id = symptom.id.clone();
        move || session.with(|s| s.is_selected(&id))
    };
    let is_checked = is_selected.clone();
    let element_id = symptom.element_id();

    view! {
        <div class="symptom-item" class:selected=is_selected data-symptom=symptom.id.clone()>
            <input
                type="checkbox"
                class="symptom-checkbox"
                id=element_id.clone()
                prop:checked=is_checked
                on:change={
                    let id = symptom.id.clone();
                    move |ev| state.toggle(&id, event_target_checked(&ev))
                }
            />
            <label for=element_id class="symptom-label">
                {symptom.label.clone()}
            </label>
        </div>
    }
}
