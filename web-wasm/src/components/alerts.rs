//! 通知（アラート）コンポーネント

use crate::app::AppState;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use symptom_common::{Notice, AUTO_DISMISS_MS};

#[component]
pub fn Alerts(state: AppState) -> impl IntoView {
    let session = state.session;

    view! {
        <div class="alerts">
            <For
                each=move || session.with(|s| s.notices().iter().cloned().collect::<Vec<_>>())
                key=|notice| notice.id
                children=move |notice| view! { <AlertItem state=state notice=notice /> }
            />
        </div>
    }
}

#[component]
fn AlertItem(state: AppState, notice: Notice) -> impl IntoView {
    let id = notice.id;

    // 一定時間後に自動で閉じる
    Timeout::new(AUTO_DISMISS_MS, move || state.dismiss(id)).forget();

    view! {
        <div class=notice.css_class() role="alert">
            {notice.message.clone()}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| state.dismiss(id)
            />
        </div>
    }
}
