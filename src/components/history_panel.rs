//! Saved pictures, newest first.
//!
//! The whole list is rebuilt from `rows` on every change; rows never
//! accumulate.

use leptos::prelude::*;

use crate::render::HistoryRow;
use crate::session::SessionAction;

/// History list with per-row Delete and a Clear All control.
#[component]
pub fn HistoryPanel(
    /// Rows to show, already in display order.
    rows: Memo<Vec<HistoryRow>>,
    /// Invoked with the row's delete action, or `ClearAll`.
    on_action: Callback<SessionAction>,
) -> impl IntoView {
    let count = move || rows.with(|r| r.len());

    view! {
        <section class="history-panel">
            <style>{include_str!("history_panel.css")}</style>
            <div class="history-header">
                <h3 class="history-title">
                    "History"
                    <span class="history-count">{count}</span>
                </h3>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |_| on_action.run(SessionAction::ClearAll)
                    disabled=move || count() == 0
                >
                    "Clear All"
                </button>
            </div>

            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    view! { <p class="history-empty">"No saved pictures yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="history-list">
                            {rows.into_iter().map(|row| {
                                let delete = row.delete.clone();
                                view! {
                                    <li class="history-item" data-id=row.id.to_string()>
                                        <strong class="history-item-title">{row.title}</strong>
                                        <span class="history-date">{row.date}</span>
                                        <a class="history-thumb" href=row.link_href target="_blank" rel="noopener">
                                            {if row.is_video {
                                                view! { <span class="history-video">"Video"</span> }.into_any()
                                            } else {
                                                view! { <img src=row.thumbnail_src alt=row.thumbnail_alt /> }.into_any()
                                            }}
                                        </a>
                                        <button
                                            class="btn btn-small btn-delete"
                                            on:click=move |_| on_action.run(delete.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }
            }}
        </section>
    }
}
