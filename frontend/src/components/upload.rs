//! PDF upload form.
//!
//! File picker, selected file name, submit trigger and status label.
//! Submitting drives the shared [`PageState`].

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::{API_URL, NO_FILE_SELECTED, SUBMIT_LABEL};
use crate::services::upload_pdf;
use crate::PageState;

/// Text of the file name display.
fn file_label(name: Option<String>) -> String {
    name.unwrap_or_else(|| NO_FILE_SELECTED.to_string())
}

#[component]
pub fn UploadForm(
    state: ReadSignal<PageState>,
    set_state: WriteSignal<PageState>,
) -> impl IntoView {
    let (file_name, set_file_name) = create_signal(file_label(None));
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_file_name.set(file_label(name));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(file) = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            log::warn!("Submit without a selected file");
            return;
        };

        let mut started = false;
        set_state.update(|s| started = s.begin_submission());
        if !started {
            log::warn!("Submission already in flight, ignoring");
            return;
        }

        spawn_local(async move {
            let result = upload_pdf(file, API_URL).await;
            set_state.update(|s| s.finish(result));
        });
    };

    view! {
        <form id="upload-form" class="upload-form" on:submit=on_submit>
            <label for="pdf-file" class="upload-button">"Seleccionar PDF"</label>
            <input
                type="file"
                id="pdf-file"
                class="file-input"
                accept=".pdf"
                required=true
                node_ref=file_input
                on:change=on_file_change
            />
            <span id="file-name" class="file-name">{move || file_name.get()}</span>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || state.with(|s| s.is_submitting())
            >
                {SUBMIT_LABEL}
            </button>
            <span id="status-message" class="status">{move || state.with(|s| s.status.clone())}</span>
        </form>
    }
}
