use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::apod::client;
use crate::apod::dates::{self, format_iso, parse_query_date};
use crate::app::AppContext;
use crate::components::date_form::DateForm;
use crate::components::history_panel::HistoryPanel;
use crate::components::image_preview::ImagePreview;
use crate::render::{history_rows, preview_card};
use crate::session::{Phase, SessionAction};

#[component]
pub fn ApodPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;

    let rows = Memo::new(move |_| session.with(|s| history_rows(s.history())));
    let preview = Memo::new(move |_| session.with(|s| s.pending().map(preview_card)));
    let busy = Signal::derive(move || session.with(|s| s.is_fetching()));
    let error = move || session.with(|s| s.error().map(str::to_string));
    let fetching_date = move || {
        session.with(|s| match s.phase() {
            Phase::Fetching { date } => Some(date.clone()),
            _ => None,
        })
    };

    let on_action = Callback::new(move |action: SessionAction| {
        session.update(|s| s.dispatch(action));
    });

    let on_submit = Callback::new(move |raw: String| {
        let date = match parse_query_date(&raw, ctx.today) {
            Ok(date) => date,
            Err(e) => {
                session.update(|s| s.report(e));
                return;
            }
        };

        let Some(ticket) = session.try_update(|s| s.begin_fetch(&format_iso(date))) else {
            return;
        };
        let config = ctx.config.get_untracked();
        spawn_local(async move {
            let result = client::fetch_entry(&config, date).await;
            session.update(|s| s.finish_fetch(ticket, result));
        });
    });

    view! {
        <div class="page apod-page">
            <h2>"Astronomy Picture of the Day"</h2>
            <p class="page-description">
                "Pick a day, preview NASA's picture for it, and keep the ones you like."
            </p>

            <DateForm
                max=format_iso(ctx.today)
                min=format_iso(dates::FIRST_APOD)
                busy=busy
                on_submit=on_submit
            />

            {move || error().map(|err| view! {
                <div class="error-banner">
                    <span>{err}</span>
                    <button
                        class="btn btn-small btn-secondary"
                        on:click=move |_| session.update(|s| s.dismiss_error())
                    >
                        "Dismiss"
                    </button>
                </div>
            })}

            {move || fetching_date().map(|date| view! {
                <p class="status-text">{format!("Fetching picture for {}...", date)}</p>
            })}

            {move || preview.get().map(|card| view! {
                <ImagePreview
                    card=card
                    on_save=move |_| on_action.run(SessionAction::SavePending)
                    on_discard=move |_| on_action.run(SessionAction::Discard)
                />
            })}

            <HistoryPanel rows=rows on_action=on_action />
        </div>
    }
}
