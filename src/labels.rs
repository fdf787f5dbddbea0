//! Localized month names and weekday abbreviations.
//!
//! The engine never formats locale text itself. It asks a [`LabelProvider`]
//! keyed by zero-based month index and weekday, and places the returned
//! strings into the grid snapshot untouched.

use chrono::Weekday;

/// Source of header text for the calendar grid.
pub trait LabelProvider {
    /// Full month name for a zero-based month index (0 = January).
    /// `month0` must be in 0-11.
    fn month_name(&self, month0: usize) -> String;

    /// Short weekday column label.
    fn weekday_abbrev(&self, weekday: Weekday) -> String;
}

/// Fixed English labels, used when no locale lookup is wanted.
pub struct EnglishLabels;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_ABBREVS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

impl LabelProvider for EnglishLabels {
    fn month_name(&self, month0: usize) -> String {
        MONTH_NAMES[month0].to_string()
    }

    fn weekday_abbrev(&self, weekday: Weekday) -> String {
        WEEKDAY_ABBREVS[weekday.num_days_from_monday() as usize].to_string()
    }
}

/// Labels resolved through chrono's locale data.
#[cfg(feature = "locales")]
pub struct LocaleLabels {
    locale: chrono::Locale,
}

#[cfg(feature = "locales")]
impl LocaleLabels {
    pub fn new(locale: chrono::Locale) -> Self {
        LocaleLabels { locale }
    }

    /// Labels for the locale taken from the environment.
    pub fn system() -> Self {
        LocaleLabels {
            locale: system_locale(),
        }
    }
}

#[cfg(feature = "locales")]
impl LabelProvider for LocaleLabels {
    fn month_name(&self, month0: usize) -> String {
        let date = chrono::NaiveDate::from_ymd_opt(2000, month0 as u32 + 1, 1).unwrap();
        date.format_localized("%B", self.locale).to_string()
    }

    fn weekday_abbrev(&self, weekday: Weekday) -> String {
        // 2000-01-03 is a Monday; step forward to the requested weekday.
        let base = chrono::NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
        let date = base + chrono::Duration::days(weekday.num_days_from_monday() as i64);
        let name = date.format_localized("%a", self.locale).to_string();
        name.chars().take(2).collect()
    }
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
#[cfg(feature = "locales")]
pub fn system_locale() -> chrono::Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(chrono::Locale::en_US)
}

/// The provider picker settings start with.
pub fn default_labels() -> Box<dyn LabelProvider> {
    #[cfg(feature = "locales")]
    {
        Box::new(LocaleLabels::system())
    }
    #[cfg(not(feature = "locales"))]
    {
        Box::new(EnglishLabels)
    }
}
