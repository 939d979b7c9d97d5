pub mod client;
pub mod dates;
pub mod types;

pub use types::{ApodPayload, ImageRecord};
