//! User preferences, one storage key per group.
//!
//! Structured groups are stored as JSON; language, formats, currency and
//! avatar are stored as raw strings so earlier browser data still loads.

use contracts::shared::locale::Locale;
use contracts::shared::settings::{
    validate_avatar_upload, AppearanceSettings, Currency, DateFormat, NotificationSettings, Profile,
    ThemeSettings, TimeFormat, DEFAULT_AVATAR_URL,
};
use contracts::shared::validation::ValidationError;
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::storage::KeyValueStorage;

pub const PROFILE_KEY: &str = "profile";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const THEME_KEY: &str = "theme";
pub const APPEARANCE_KEY: &str = "appearance";
pub const LANGUAGE_KEY: &str = "language";
pub const DATE_FORMAT_KEY: &str = "dateFormat";
pub const TIME_FORMAT_KEY: &str = "timeFormat";
pub const CURRENCY_KEY: &str = "currency";
pub const AVATAR_URL_KEY: &str = "avatarUrl";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub profile: Profile,
    pub notifications: NotificationSettings,
    pub theme: ThemeSettings,
    pub appearance: AppearanceSettings,
    pub locale: Locale,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
    pub currency: Currency,
    pub avatar_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            notifications: NotificationSettings::default(),
            theme: ThemeSettings::default(),
            appearance: AppearanceSettings::default(),
            locale: Locale::default(),
            date_format: DateFormat::default(),
            time_format: TimeFormat::default(),
            currency: Currency::default(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore<S: KeyValueStorage> {
    storage: S,
    settings: Settings,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    /// Read every group, defaulting the ones that are missing or unreadable
    pub fn load(storage: S) -> Self {
        let settings = Settings {
            profile: read_json(&storage, PROFILE_KEY),
            notifications: read_json(&storage, NOTIFICATIONS_KEY),
            theme: read_json(&storage, THEME_KEY),
            appearance: read_json(&storage, APPEARANCE_KEY),
            locale: read_raw(&storage, LANGUAGE_KEY)
                .map(|tag| Locale::resolve(&tag))
                .unwrap_or_default(),
            date_format: read_raw(&storage, DATE_FORMAT_KEY)
                .map(|code| DateFormat::from_code(&code))
                .unwrap_or_default(),
            time_format: read_raw(&storage, TIME_FORMAT_KEY)
                .map(|code| TimeFormat::from_code(&code))
                .unwrap_or_default(),
            currency: read_raw(&storage, CURRENCY_KEY)
                .map(|code| Currency::from_code(&code))
                .unwrap_or_default(),
            avatar_url: read_raw(&storage, AVATAR_URL_KEY)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        };
        Self { storage, settings }
    }

    /// Wrap settings that are already in memory, without touching storage
    pub fn from_parts(storage: S, settings: Settings) -> Self {
        Self { storage, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rejected profiles are neither kept nor written
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), ValidationError> {
        profile.validate()?;
        self.write_json(PROFILE_KEY, &profile);
        self.settings.profile = profile;
        Ok(())
    }

    pub fn set_notifications(&mut self, notifications: NotificationSettings) {
        self.write_json(NOTIFICATIONS_KEY, &notifications);
        self.settings.notifications = notifications;
    }

    pub fn set_theme(&mut self, theme: ThemeSettings) {
        self.write_json(THEME_KEY, &theme);
        self.settings.theme = theme;
    }

    pub fn set_appearance(&mut self, appearance: AppearanceSettings) {
        self.write_json(APPEARANCE_KEY, &appearance);
        self.settings.appearance = appearance;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.write_raw(LANGUAGE_KEY, locale.code());
        self.settings.locale = locale;
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        self.write_raw(DATE_FORMAT_KEY, format.as_str());
        self.settings.date_format = format;
    }

    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.write_raw(TIME_FORMAT_KEY, format.as_str());
        self.settings.time_format = format;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.write_raw(CURRENCY_KEY, currency.code());
        self.settings.currency = currency;
    }

    pub fn set_avatar_url(&mut self, url: String) {
        self.write_raw(AVATAR_URL_KEY, &url);
        self.settings.avatar_url = url;
    }

    /// Accept an uploaded picture already read into a data URL
    pub fn upload_avatar(&mut self, size: u64, mime: &str, data_url: String) -> Result<(), ValidationError> {
        validate_avatar_upload(size, mime)?;
        self.set_avatar_url(data_url);
        Ok(())
    }

    pub fn remove_avatar(&mut self) {
        self.set_avatar_url(DEFAULT_AVATAR_URL.to_string());
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.storage.set_json(key, value) {
            log::error!("Failed to persist setting '{}': {}", key, e);
        }
    }

    fn write_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::error!("Failed to persist setting '{}': {}", key, e);
        }
    }
}

fn read_json<S: KeyValueStorage, T: DeserializeOwned + Default>(storage: &S, key: &str) -> T {
    match storage.get_json(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("Ignoring stored setting '{}': {}", key, e);
            T::default()
        }
    }
}

fn read_raw<S: KeyValueStorage>(storage: &S, key: &str) -> Option<String> {
    storage.get_item(key).unwrap_or_else(|e| {
        log::warn!("Ignoring stored setting '{}': {}", key, e);
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use contracts::shared::settings::{ColorScheme, FontSize};

    #[test]
    fn test_empty_storage_gives_defaults() {
        let store = SettingsStore::load(MemoryStorage::new());
        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(store.settings().locale, Locale::EnUs);
        assert_eq!(store.settings().avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_raw_keys_are_plain_strings() {
        let storage = MemoryStorage::new();
        let mut store = SettingsStore::load(storage.clone());
        store.set_locale(Locale::DeDe);
        store.set_date_format(DateFormat::YearMonthDay);
        store.set_time_format(TimeFormat::TwentyFourHour);
        store.set_currency(Currency::Eur);

        assert_eq!(storage.get_item(LANGUAGE_KEY).unwrap().as_deref(), Some("de-DE"));
        assert_eq!(storage.get_item(DATE_FORMAT_KEY).unwrap().as_deref(), Some("YYYY-MM-DD"));
        assert_eq!(storage.get_item(TIME_FORMAT_KEY).unwrap().as_deref(), Some("24h"));
        assert_eq!(storage.get_item(CURRENCY_KEY).unwrap().as_deref(), Some("EUR"));
    }

    #[test]
    fn test_settings_survive_reload() {
        let storage = MemoryStorage::new();
        let mut store = SettingsStore::load(storage.clone());
        store.set_theme(ThemeSettings {
            dark_mode: true,
            ..ThemeSettings::default()
        });
        store.set_appearance(AppearanceSettings {
            font_size: FontSize::Large,
            color_scheme: ColorScheme::Green,
            ..AppearanceSettings::default()
        });
        store.set_locale(Locale::JaJp);

        let reloaded = SettingsStore::load(storage);
        assert_eq!(reloaded.settings(), store.settings());
    }

    #[test]
    fn test_stored_language_tag_is_resolved() {
        let storage = MemoryStorage::new();
        storage.set_item(LANGUAGE_KEY, "pt-PT").unwrap();
        let store = SettingsStore::load(storage);
        assert_eq!(store.settings().locale, Locale::PtBr);
    }

    #[test]
    fn test_invalid_profile_is_not_persisted() {
        let storage = MemoryStorage::new();
        let mut store = SettingsStore::load(storage.clone());
        let profile = Profile {
            email: "nobody".into(),
            ..Profile::default()
        };
        assert_eq!(store.set_profile(profile), Err(ValidationError::InvalidEmail));
        assert_eq!(storage.get_item(PROFILE_KEY).unwrap(), None);
        assert_eq!(store.settings().profile, Profile::default());
    }

    #[test]
    fn test_corrupt_group_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.set_item(NOTIFICATIONS_KEY, "{\"emailNotifications\":").unwrap();
        let store = SettingsStore::load(storage);
        assert_eq!(store.settings().notifications, NotificationSettings::default());
    }

    #[test]
    fn test_avatar_upload_and_removal() {
        let storage = MemoryStorage::new();
        let mut store = SettingsStore::load(storage.clone());

        let too_big = 6 * 1024 * 1024;
        assert!(store
            .upload_avatar(too_big, "image/png", "data:image/png;base64,AAAA".into())
            .is_err());
        assert!(store.upload_avatar(512, "text/plain", "data:text/plain,hi".into()).is_err());
        assert_eq!(store.settings().avatar_url, DEFAULT_AVATAR_URL);

        store
            .upload_avatar(512, "image/png", "data:image/png;base64,AAAA".into())
            .unwrap();
        assert_eq!(
            storage.get_item(AVATAR_URL_KEY).unwrap().as_deref(),
            Some("data:image/png;base64,AAAA")
        );

        store.remove_avatar();
        assert_eq!(store.settings().avatar_url, DEFAULT_AVATAR_URL);
    }
}
