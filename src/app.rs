use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::apod::dates;
use crate::components::sidebar::Sidebar;
use crate::config::ApodConfig;
use crate::history::BrowserStorage;
use crate::pages::apod::ApodPage;
use crate::pages::settings::SettingsPage;
use crate::session::Session;

/// Shared state handed to every page through context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session<BrowserStorage>>,
    pub config: RwSignal<ApodConfig>,
    /// Computed once at startup; the date picker's upper bound.
    pub today: NaiveDate,
}

#[component]
pub fn App(config: ApodConfig) -> impl IntoView {
    let ctx = AppContext {
        session: RwSignal::new(Session::open(BrowserStorage)),
        config: RwSignal::new(config),
        today: dates::today(),
    };
    provide_context(ctx);

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=ApodPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
