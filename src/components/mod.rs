pub mod api_key_form;
pub mod date_form;
pub mod history_panel;
pub mod image_preview;
pub mod sidebar;
