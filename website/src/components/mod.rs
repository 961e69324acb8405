pub mod card;
pub mod footer;
pub mod settings_panel;
