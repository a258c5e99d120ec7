//! Locale resolution and UI string lookup.
//!
//! A language tag resolves to one of the supported [`Locale`]s by its
//! primary subtag; unknown tags fall back to US English. Lookup is
//! `table(locale)[key]`, so every key always has a string.

pub mod keys;
mod tables;

pub use keys::{CategoryKey, TextKey};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tables::{CategoryTable, TextTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-UK")]
    EnUk,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Resolve a language tag such as `es-MX` or `ja-JP`
    pub fn resolve(tag: &str) -> Self {
        let tag = tag.trim();
        if tag == "en-UK" || tag.starts_with("en-GB") {
            return Locale::EnUk;
        }
        let primary = tag.get(..2).unwrap_or("").to_ascii_lowercase();
        match primary.as_str() {
            "en" => Locale::EnUs,
            "es" => Locale::EsEs,
            "fr" => Locale::FrFr,
            "de" => Locale::DeDe,
            "pt" => Locale::PtBr,
            "ja" => Locale::JaJp,
            "zh" => Locale::ZhCn,
            _ => Locale::EnUs,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnUk => "en-UK",
            Locale::EsEs => "es-ES",
            Locale::FrFr => "fr-FR",
            Locale::DeDe => "de-DE",
            Locale::PtBr => "pt-BR",
            Locale::JaJp => "ja-JP",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Name shown in the language picker
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUs => "English (US)",
            Locale::EnUk => "English (UK)",
            Locale::EsEs => "Español",
            Locale::FrFr => "Français",
            Locale::DeDe => "Deutsch",
            Locale::PtBr => "Português (BR)",
            Locale::JaJp => "日本語",
            Locale::ZhCn => "简体中文",
        }
    }

    pub fn all() -> [Locale; 8] {
        [
            Locale::EnUs,
            Locale::EnUk,
            Locale::EsEs,
            Locale::FrFr,
            Locale::DeDe,
            Locale::PtBr,
            Locale::JaJp,
            Locale::ZhCn,
        ]
    }

    fn text_table(&self) -> &'static TextTable {
        match self {
            Locale::EnUs | Locale::EnUk => &tables::EN_US,
            Locale::EsEs => &tables::ES_ES,
            Locale::FrFr => &tables::FR_FR,
            Locale::DeDe => &tables::DE_DE,
            Locale::PtBr => &tables::PT_BR,
            Locale::JaJp => &tables::JA_JP,
            Locale::ZhCn => &tables::ZH_CN,
        }
    }

    fn category_table(&self) -> &'static CategoryTable {
        match self {
            Locale::EnUs | Locale::EnUk => &tables::CATEGORIES_EN,
            Locale::EsEs => &tables::CATEGORIES_ES,
            Locale::FrFr => &tables::CATEGORIES_FR,
            Locale::DeDe => &tables::CATEGORIES_DE,
            Locale::PtBr => &tables::CATEGORIES_PT,
            Locale::JaJp => &tables::CATEGORIES_JA,
            Locale::ZhCn => &tables::CATEGORIES_ZH,
        }
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        self.text_table()[key.index()]
    }

    pub fn category(&self, key: CategoryKey) -> &'static str {
        self.category_table()[key.index()]
    }
}

/// `table[resolve(tag)][key]`
pub fn translate(tag: &str, key: TextKey) -> &'static str {
    Locale::resolve(tag).text(key)
}

/// Localized label for a stored category name. Categories outside the
/// known set are returned unchanged.
pub fn translate_category<'a>(locale: Locale, category: &'a str) -> Cow<'a, str> {
    match CategoryKey::from_category(category) {
        Some(key) => Cow::Borrowed(locale.category(key)),
        None => Cow::Borrowed(category),
    }
}
