// Locale - user-facing strings and the short date layout
use chrono::{DateTime, Datelike, FixedOffset};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub fn empty_state(self) -> &'static str {
        match self {
            Locale::Ja => "データがありません",
            Locale::En => "No data available",
        }
    }

    pub fn no_description(self) -> &'static str {
        match self {
            Locale::Ja => "説明がありません",
            Locale::En => "No description",
        }
    }

    pub fn last_updated_label(self) -> &'static str {
        match self {
            Locale::Ja => "最終更新",
            Locale::En => "Last updated",
        }
    }

    pub fn load_failed(self) -> &'static str {
        match self {
            Locale::Ja => "データの読み込みに失敗しました。後でもう一度お試しください。",
            Locale::En => "Failed to load data, please try again later.",
        }
    }

    pub fn thousands_separator(self) -> char {
        ',' // both supported locales group with commas
    }

    /// Short date without zero padding: `2024/5/1` or `5/1/2024`.
    pub fn short_date(self, date: &DateTime<FixedOffset>) -> String {
        match self {
            Locale::Ja => format!("{}/{}/{}", date.year(), date.month(), date.day()),
            Locale::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        }
    }
}
