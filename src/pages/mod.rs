pub mod apod;
pub mod settings;
