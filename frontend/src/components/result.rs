//! Result region: generated review, copy action and download action.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{COPY_LABEL, COPY_NOTICE, COPY_NOTICE_MS, DOWNLOAD_LABEL};
use crate::services::{copy_text, navigate_to};
use crate::{CopyNotice, PageState, ResultContent};

#[component]
pub fn ResultPanel(state: ReadSignal<PageState>) -> impl IntoView {
    let (notice, set_notice) = create_signal(CopyNotice::default());

    let on_copy = move |_| {
        let Some(text) = state.with_untracked(|s| s.copy_payload()) else {
            log::debug!("Nothing to copy");
            return;
        };

        spawn_local(async move {
            let result = copy_text(&text).await;
            let mut generation = None;
            set_notice.update(|n| generation = n.on_copy_result(result));

            if let Some(generation) = generation {
                TimeoutFuture::new(COPY_NOTICE_MS).await;
                set_notice.update(|n| n.expire(generation));
            }
        });
    };

    let on_download = move |_| {
        let Some(url) = state.with_untracked(|s| s.download_url.clone()) else {
            return;
        };
        log::info!("Downloading {}", url);
        if let Err(e) = navigate_to(&url) {
            log::error!("Download failed: {}", e);
        }
    };

    view! {
        <div class="result-section">
            <div id="estado-del-arte" class="result-content">
                {move || state.with(|s| match &s.content {
                    ResultContent::Markdown { html, .. } => {
                        view! { <div class="markdown" inner_html=html.clone()></div> }.into_view()
                    }
                    other => other.text().to_string().into_view(),
                })}
            </div>

            <div class="result-actions">
                <button id="copy-button" class="btn btn-secondary" on:click=on_copy>
                    {COPY_LABEL}
                </button>
                <Show
                    when=move || notice.with(|n| n.is_visible())
                    fallback=|| view! { }
                >
                    <span id="copy-message" class="copy-message">{COPY_NOTICE}</span>
                </Show>

                <Show
                    when=move || state.with(|s| s.download_visible())
                    fallback=|| view! { }
                >
                    <button id="download-word" class="btn btn-primary" on:click=on_download>
                        {DOWNLOAD_LABEL}
                    </button>
                </Show>
            </div>
        </div>
    }
}
