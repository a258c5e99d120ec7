pub mod export;
pub mod format;
pub mod locale;
pub mod settings;
pub mod validation;
