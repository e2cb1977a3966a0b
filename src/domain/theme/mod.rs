//! Theme module - light/dark preference and its resolution.

mod controller;
mod preference;

pub use controller::ThemeController;
pub use preference::{resolve_theme, ThemeName, ThemePreference, THEME_STORAGE_KEY};
