//! Bibliometric details of the analysed article, and its entropy score.

use leptos::*;

use crate::config::DETAILS_HEADING;
use crate::{DetailField, PageState};

#[component]
pub fn DetailsSection(state: ReadSignal<PageState>) -> impl IntoView {
    view! {
        <Show
            when=move || state.with(|s| s.details.is_some())
            fallback=|| view! { }
        >
            <section id="details" class="details">
                <h2>{DETAILS_HEADING}</h2>
                <ul class="detail-list">
                    {DetailField::ALL
                        .into_iter()
                        .map(|field| view! {
                            <li class="detail-row">
                                <span class="detail-label">{field.label()} ": "</span>
                                <span id=field.element_id() class="detail-value">
                                    {move || state.with(|s| {
                                        s.details
                                            .as_ref()
                                            .map(|d| d.display(field).to_string())
                                            .unwrap_or_default()
                                    })}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </Show>

        <p id="entropia" class="entropy">{move || state.with(|s| s.entropy_text())}</p>
    }
}
