use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::default_api_key;
use crate::history::BrowserStorage;

/// Edit or reset the api.nasa.gov key.
#[component]
pub fn ApiKeyForm(
    /// Placeholder text for the input field
    #[prop(into)]
    placeholder: String,
) -> impl IntoView {
    let config = expect_context::<AppContext>().config;

    let (key_value, set_key_value) = signal(String::new());
    let (error_message, set_error_message) = signal::<Option<String>>(None);
    let is_custom = move || config.with(|c| !c.uses_default_key());

    let save_key = move |_| {
        let next = match config.get_untracked().with_api_key(&key_value.get_untracked()) {
            Ok(next) => next,
            Err(e) => {
                set_error_message.set(Some(e));
                return;
            }
        };
        match next.save(&BrowserStorage) {
            Ok(()) => {
                config.set(next);
                set_key_value.set(String::new());
                set_error_message.set(None);
            }
            Err(e) => set_error_message.set(Some(format!("Failed to save: {}", e))),
        }
    };

    let reset_key = move |_| {
        let mut next = config.get_untracked();
        next.api_key = default_api_key();
        match next.save(&BrowserStorage) {
            Ok(()) => {
                config.set(next);
                set_error_message.set(None);
            }
            Err(e) => set_error_message.set(Some(format!("Failed to reset: {}", e))),
        }
    };

    view! {
        <div class="form-group api-key-form">
            <label for="api-key">"NASA API Key"</label>
            <div class="input-row">
                <input
                    id="api-key"
                    type="password"
                    placeholder=placeholder
                    class="input input-password"
                    prop:value=move || key_value.get()
                    on:input=move |ev| {
                        set_key_value.set(event_target_value(&ev));
                    }
                />
                <button class="btn btn-save" on:click=save_key>"Save"</button>
                <button
                    class="btn btn-delete"
                    on:click=reset_key
                    style:display=move || if is_custom() { "inline-block" } else { "none" }
                >
                    "Reset"
                </button>
            </div>
            <div class="key-status-row">
                {move || {
                    if let Some(err) = error_message.get() {
                        view! {
                            <span class="status-text status-error">{err}</span>
                        }.into_any()
                    } else if is_custom() {
                        view! {
                            <span class="status-text status-saved">"Using your key"</span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="status-text status-not-set">"Using the default key (rate limited)"</span>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
