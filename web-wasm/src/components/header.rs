//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Disease Prediction System"</h1>
            <nav class="header-nav">
                <a href="#symptoms">"Symptoms"</a>
                <a href="#upload">"Upload Document"</a>
                <a href="#about">"About"</a>
            </nav>
        </header>
    }
}
