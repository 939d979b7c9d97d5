use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Date picker plus submit button.
#[component]
pub fn DateForm(
    /// Latest selectable date, `YYYY-MM-DD`.
    #[prop(into)]
    max: String,
    /// Earliest selectable date, `YYYY-MM-DD`.
    #[prop(into)]
    min: String,
    /// Disables the submit button while a fetch is running.
    #[prop(into)]
    busy: Signal<bool>,
    /// Receives the raw input value on submit.
    on_submit: Callback<String>,
) -> impl IntoView {
    let (date, set_date) = signal(max.clone());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(date.get_untracked());
    };

    view! {
        <form class="date-form" on:submit=submit>
            <label for="apod-date">"Pick a date"</label>
            <div class="input-row">
                <input
                    id="apod-date"
                    type="date"
                    class="input"
                    min=min
                    max=max
                    prop:value=move || date.get()
                    on:input=move |ev| {
                        set_date.set(event_target_value(&ev));
                    }
                />
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Fetching..." } else { "Get Image" }}
                </button>
            </div>
        </form>
    }
}
