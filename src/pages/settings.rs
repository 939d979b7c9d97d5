use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::api_key_form::ApiKeyForm;
use crate::config::DEFAULT_API_BASE;
use crate::history::BrowserStorage;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = expect_context::<AppContext>().config;

    let (api_base, set_api_base) = signal(config.get_untracked().api_base);
    let (log_level, set_log_level) = signal(config.get_untracked().log_level);
    let (status, set_status) = signal::<Option<String>>(None);

    let save_settings = move |_| {
        let mut next = config.get_untracked();
        let base = api_base.get_untracked();
        next.api_base = if base.trim().is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            base.trim().to_string()
        };
        next.log_level = log_level.get_untracked();

        match next.save(&BrowserStorage) {
            Ok(()) => {
                set_api_base.set(next.api_base.clone());
                config.set(next);
                set_status.set(Some("Settings saved".to_string()));
            }
            Err(e) => {
                set_status.set(Some(format!("Failed to save: {}", e)));
            }
        }
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"API Key"</h3>
                <p class="section-description">
                    "Keys are kept in this browser's local storage. Get one at api.nasa.gov."
                </p>
                <ApiKeyForm placeholder="DEMO_KEY" />
            </section>

            <section class="settings-section">
                <h3>"Application"</h3>
                <p class="section-description">"Log level changes apply after a reload."</p>

                <div class="form-group">
                    <label for="api-base">"APOD Endpoint"</label>
                    <input
                        id="api-base"
                        type="text"
                        placeholder=DEFAULT_API_BASE
                        class="input"
                        prop:value=move || api_base.get()
                        on:input=move |ev| {
                            set_api_base.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="log-level">"Log Level"</label>
                    <select
                        id="log-level"
                        class="input"
                        prop:value=move || log_level.get()
                        on:change=move |ev| {
                            set_log_level.set(event_target_value(&ev));
                        }
                    >
                        {["error", "warn", "info", "debug", "trace"].into_iter().map(|level| {
                            view! { <option value=level>{level}</option> }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <button class="btn btn-save" on:click=save_settings>"Save"</button>
                <Show when=move || status.get().is_some()>
                    <span class="status-text">{move || status.get().unwrap_or_default()}</span>
                </Show>
            </section>
        </div>
    }
}
