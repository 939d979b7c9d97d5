use leptos::prelude::*;

use crate::render::PreviewCard;

/// Detail card for the fetched, not yet saved picture.
#[component]
pub fn ImagePreview(
    card: PreviewCard,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_discard: Callback<()>,
) -> impl IntoView {
    let media = if card.is_video {
        view! {
            <iframe class="preview-media" src=card.image_src title=card.title.clone() allowfullscreen=true></iframe>
        }
        .into_any()
    } else {
        view! {
            <a href=card.link_href target="_blank" rel="noopener">
                <img class="preview-media" src=card.image_src alt=card.title.clone() />
            </a>
        }
        .into_any()
    };

    view! {
        <div class="image-preview" data-id=card.id.to_string()>
            <style>{include_str!("image_preview.css")}</style>
            {media}
            <div class="preview-body">
                <h3 class="preview-title">{card.title}</h3>
                <span class="preview-date">{card.date}</span>
                {card.credit.map(|c| view! { <span class="preview-credit">{c}</span> })}
                <p class="preview-text">{card.explanation}</p>
                <div class="preview-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_discard.run(())>
                        "Discard"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| on_save.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
