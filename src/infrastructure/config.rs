use crate::domain::locale::Locale;
use chrono::{FixedOffset, Local, Offset};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
    /// Static files served next to the page, including `data/trends.json`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// Origin that serves `data/trends.json`, normally this server itself.
    pub data_origin: String,
    #[serde(default)]
    pub locale: Locale,
    /// Viewer time zone; the host's local offset when unset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl DashboardSettings {
    pub fn viewer_offset(&self) -> anyhow::Result<FixedOffset> {
        match self.utc_offset_minutes {
            Some(minutes) => FixedOffset::east_opt(minutes * 60)
                .ok_or_else(|| anyhow::anyhow!("utc_offset_minutes out of range: {}", minutes)),
            None => Ok(Local::now().offset().fix()),
        }
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Load `config/dashboard.*`, overridable with environment variables such as
/// `DASHBOARD_SERVER__BIND` or `DASHBOARD_DASHBOARD__LOCALE`.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
