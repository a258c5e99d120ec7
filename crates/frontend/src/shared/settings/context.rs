//! Reactive access to the [`SettingsStore`] for components.

use chrono::NaiveTime;
use contracts::shared::format::{format_date, format_money, format_time};
use contracts::shared::locale::{translate_category, Locale, TextKey};
use contracts::shared::settings::{
    AppearanceSettings, Currency, DateFormat, NotificationSettings, Profile, ThemeSettings, TimeFormat,
};
use leptos::prelude::*;

use super::apply::{apply_appearance, apply_theme};
use super::store::{Settings, SettingsStore};
use crate::shared::error::UpdateError;
use crate::shared::storage::BrowserStorage;

const STORE_NAME: &str = "settings store";

#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub store: RwSignal<SettingsStore<BrowserStorage>>,
}

impl SettingsContext {
    pub fn settings(&self) -> Settings {
        self.store.with(|s| s.settings().clone())
    }

    pub fn locale(&self) -> Locale {
        self.store.with(|s| s.settings().locale)
    }

    /// Text for the current language
    pub fn t(&self, key: TextKey) -> &'static str {
        self.locale().text(key)
    }

    pub fn category_label(&self, category: &str) -> String {
        translate_category(self.locale(), category).into_owned()
    }

    pub fn money(&self, value: f64) -> String {
        format_money(value, self.store.with(|s| s.settings().currency))
    }

    pub fn date(&self, date: &str) -> String {
        format_date(date, self.store.with(|s| s.settings().date_format))
    }

    pub fn time(&self, time: NaiveTime) -> String {
        format_time(time, self.store.with(|s| s.settings().time_format))
    }

    pub fn set_profile(&self, profile: Profile) -> Result<(), UpdateError> {
        self.store
            .try_update(|s| s.set_profile(profile))
            .ok_or(UpdateError::Disposed(STORE_NAME))??;
        Ok(())
    }

    pub fn set_notifications(&self, notifications: NotificationSettings) {
        self.store.update(|s| s.set_notifications(notifications));
    }

    pub fn set_theme(&self, theme: ThemeSettings) {
        self.store.update(|s| s.set_theme(theme));
        apply_theme(&theme);
    }

    pub fn set_appearance(&self, appearance: AppearanceSettings) {
        self.store.update(|s| s.set_appearance(appearance));
        apply_appearance(&appearance);
    }

    pub fn set_locale(&self, locale: Locale) {
        self.store.update(|s| s.set_locale(locale));
    }

    pub fn set_date_format(&self, format: DateFormat) {
        self.store.update(|s| s.set_date_format(format));
    }

    pub fn set_time_format(&self, format: TimeFormat) {
        self.store.update(|s| s.set_time_format(format));
    }

    pub fn set_currency(&self, currency: Currency) {
        self.store.update(|s| s.set_currency(currency));
    }

    pub fn upload_avatar(&self, size: u64, mime: &str, data_url: String) -> Result<(), UpdateError> {
        self.store
            .try_update(|s| s.upload_avatar(size, mime, data_url))
            .ok_or(UpdateError::Disposed(STORE_NAME))??;
        Ok(())
    }

    pub fn remove_avatar(&self) {
        self.store.update(|s| s.remove_avatar());
    }
}

/// Loads saved preferences, applies them to the page and shares them.
#[component]
pub fn SettingsProvider(children: Children) -> impl IntoView {
    let store = SettingsStore::load(BrowserStorage);
    apply_theme(&store.settings().theme);
    apply_appearance(&store.settings().appearance);
    log::debug!("Settings loaded, language {}", store.settings().locale.code());

    provide_context(SettingsContext {
        store: RwSignal::new(store),
    });

    children()
}

/// Hook to use the settings context.
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
        .expect("SettingsContext not found. Wrap your app with SettingsProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_after_unmount_are_reported() {
        let store = RwSignal::new(SettingsStore::from_parts(BrowserStorage, Settings::default()));
        store.dispose();
        let ctx = SettingsContext { store };

        assert_eq!(
            ctx.set_profile(Profile::default()),
            Err(UpdateError::Disposed(STORE_NAME))
        );
        assert_eq!(
            ctx.upload_avatar(512, "image/png", "data:image/png;base64,AAAA".into()),
            Err(UpdateError::Disposed(STORE_NAME))
        );
    }
}
