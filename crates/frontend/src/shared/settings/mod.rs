pub mod apply;
pub mod context;
pub mod selectors;
pub mod store;

pub use context::{use_settings, SettingsContext, SettingsProvider};
pub use selectors::{CurrencySelect, LanguageSelect};
pub use store::{Settings, SettingsStore};
