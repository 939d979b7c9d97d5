pub mod apod;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod pages;
pub mod render;
pub mod session;

pub use apod::{ApodPayload, ImageRecord};
pub use error::{ApodError, AppError, StorageError};
pub use history::{HistoryCommand, HistoryStore, KeyValueStore, MemoryStorage};
pub use session::{Phase, Session, SessionAction};

use leptos::prelude::*;

use app::App;
use history::BrowserStorage;

pub fn run() {
    let config = config::ApodConfig::load(&BrowserStorage);
    logging::init(config.max_level());
    tracing::info!("Starting APOD viewer (endpoint {})", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
