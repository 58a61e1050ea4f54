//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップ。1ファイルのみ扱う。

use leptos::html;
use leptos::prelude::*;
use symptom_common::upload::ACCEPT_ATTRIBUTE;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(is_uploading: Signal<bool>, on_file: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if is_uploading.get_untracked() {
                return;
            }

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if is_uploading.get_untracked() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // 同じファイルを続けて選んでもchangeが発火するように
        input.set_value("");
    };

    view! {
        <div
            id="uploadArea"
            class="upload-area"
            class:drag-over=move || is_dragover.get()
            class:disabled=move || is_uploading.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📄"</div>
            <p>"Drag & drop a medical document here, or click to select"</p>
            <p class="text-muted">"Supported formats: PDF, PNG, JPG, JPEG, GIF, BMP, TIFF (max 16MB)"</p>
            <input
                type="file"
                id="fileInput"
                accept=ACCEPT_ATTRIBUTE
                style="display: none"
                node_ref=file_input
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
