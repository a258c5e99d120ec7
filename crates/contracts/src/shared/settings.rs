//! Settings panel data: profile, notification toggles, theme flags,
//! appearance choices and regional formats.

use super::validation::{require, require_email, ValidationError, MAX_AVATAR_BYTES};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AVATAR_URL: &str = "https://images.unsplash.com/photo-1541746972996-4e0b0f43e02a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

// ============================================================================
// Profile
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub company: String,
    pub website: String,
    pub phone: String,
    pub location: String,
    pub timezone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            bio: "Dashboard administrator".into(),
            company: "Tech Corp".into(),
            website: "https://example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            timezone: "America/Los_Angeles".into(),
        }
    }
}

impl Profile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        Ok(())
    }
}

// ============================================================================
// Notifications
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_report: bool,
    pub product_updates: bool,
    pub security_alerts: bool,
    pub order_updates: bool,
    pub promotions: bool,
    pub newsletter: bool,
    pub sound_enabled: bool,
    pub desktop_notifications: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            weekly_report: false,
            product_updates: true,
            security_alerts: true,
            order_updates: true,
            promotions: false,
            newsletter: true,
            sound_enabled: true,
            desktop_notifications: true,
        }
    }
}

// ============================================================================
// Theme
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub dark_mode: bool,
    pub compact_mode: bool,
    pub animations: bool,
    pub high_contrast: bool,
    pub reduce_motion: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            compact_mode: false,
            animations: true,
            high_contrast: false,
            reduce_motion: false,
        }
    }
}

impl ThemeSettings {
    /// Root element classes toggled by each flag, with their current state
    pub fn root_classes(&self) -> [(&'static str, bool); 4] {
        [
            ("dark", self.dark_mode),
            ("compact", self.compact_mode),
            ("reduce-motion", self.reduce_motion),
            ("high-contrast", self.high_contrast),
        ]
    }
}

// ============================================================================
// Appearance
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn css_size(&self) -> &'static str {
        match self {
            FontSize::Small => "14px",
            FontSize::Medium => "16px",
            FontSize::Large => "18px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

impl ColorScheme {
    /// (primary, secondary) colours
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            ColorScheme::Blue => ("#3b82f6", "#60a5fa"),
            ColorScheme::Purple => ("#8b5cf6", "#a78bfa"),
            ColorScheme::Green => ("#10b981", "#34d399"),
            ColorScheme::Orange => ("#f97316", "#fb923c"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    pub font_size: FontSize,
    pub color_scheme: ColorScheme,
    pub sidebar_position: SidebarPosition,
}

// ============================================================================
// Regional formats (stored as raw strings, not JSON)
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

impl DateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::YearMonthDay => "YYYY-MM-DD",
        }
    }

    /// Unknown values fall back to the default
    pub fn from_code(code: &str) -> Self {
        match code {
            "DD/MM/YYYY" => DateFormat::DayMonthYear,
            "YYYY-MM-DD" => DateFormat::YearMonthDay,
            _ => DateFormat::MonthDayYear,
        }
    }

    /// Pattern for `chrono::NaiveDate::format`
    pub fn chrono_pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::YearMonthDay => "%Y-%m-%d",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "12h",
            TimeFormat::TwentyFourHour => "24h",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "24h" => TimeFormat::TwentyFourHour,
            _ => TimeFormat::TwelveHour,
        }
    }

    pub fn chrono_pattern(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%I:%M %p",
            TimeFormat::TwentyFourHour => "%H:%M",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "EUR" => Currency::Eur,
            "GBP" => Currency::Gbp,
            "JPY" => Currency::Jpy,
            _ => Currency::Usd,
        }
    }

    pub fn all() -> [Currency; 4] {
        [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Jpy]
    }
}

/// Check an avatar upload before it is read into a data URL
pub fn validate_avatar_upload(size: u64, mime: &str) -> Result<(), ValidationError> {
    if size > MAX_AVATAR_BYTES {
        return Err(ValidationError::FileTooLarge { size });
    }
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        assert!(Profile::default().validate().is_ok());

        let mut profile = Profile::default();
        profile.name = " ".into();
        assert_eq!(
            profile.validate(),
            Err(ValidationError::Required { field: "name" })
        );

        let mut profile = Profile::default();
        profile.email = "nobody".into();
        assert_eq!(profile.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_settings_json_keys() {
        let json = serde_json::to_value(NotificationSettings::default()).unwrap();
        assert_eq!(json["emailNotifications"], true);
        assert_eq!(json["weeklyReport"], false);

        let json = serde_json::to_value(AppearanceSettings::default()).unwrap();
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["colorScheme"], "blue");
        assert_eq!(json["sidebarPosition"], "left");
    }

    #[test]
    fn test_theme_root_classes() {
        let theme = ThemeSettings {
            dark_mode: true,
            high_contrast: true,
            ..ThemeSettings::default()
        };
        let on: Vec<_> = theme
            .root_classes()
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(class, _)| *class)
            .collect();
        assert_eq!(on, vec!["dark", "high-contrast"]);
    }

    #[test]
    fn test_raw_format_codes() {
        assert_eq!(DateFormat::from_code("DD/MM/YYYY"), DateFormat::DayMonthYear);
        assert_eq!(DateFormat::from_code("garbage"), DateFormat::MonthDayYear);
        assert_eq!(TimeFormat::from_code("24h").as_str(), "24h");
        assert_eq!(Currency::from_code("JPY").symbol(), "¥");
        assert_eq!(Currency::from_code("XYZ"), Currency::Usd);
    }

    #[test]
    fn test_avatar_upload_rules() {
        assert!(validate_avatar_upload(1024, "image/png").is_ok());
        assert_eq!(
            validate_avatar_upload(MAX_AVATAR_BYTES + 1, "image/png"),
            Err(ValidationError::FileTooLarge {
                size: MAX_AVATAR_BYTES + 1
            })
        );
        assert!(matches!(
            validate_avatar_upload(10, "application/pdf"),
            Err(ValidationError::NotAnImage { .. })
        ));
    }

    #[test]
    fn test_appearance_values() {
        assert_eq!(FontSize::Large.css_size(), "18px");
        assert_eq!(ColorScheme::Orange.colors(), ("#f97316", "#fb923c"));
    }
}
