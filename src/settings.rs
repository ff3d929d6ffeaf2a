use crate::error::Result;
use crate::utils::constants::{
    CAPITAL_REGION, DOWNLOAD_DIR, OUTPUT_DIR, SITE_BASE_URL, SOURCE_URL, USER_AGENT,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use validator::Validate;

/// Settings file looked up in the working directory when `--config` is not given
pub const DEFAULT_SETTINGS_FILE: &str = "retc";

/// Environment variable prefix, e.g. `RETC_DEFAULT_REGION`
pub const ENV_PREFIX: &str = "RETC";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// Listing page scanned for spreadsheet links
    #[validate(url)]
    pub source_url: String,

    /// Base used to resolve relative links
    #[validate(url)]
    pub site_base_url: String,

    /// Download directory, relative to the root directory
    #[validate(length(min = 1))]
    pub download_dir: String,

    /// Filter output directory, relative to the root directory
    #[validate(length(min = 1))]
    pub output_dir: String,

    #[validate(length(min = 1))]
    pub default_region: String,

    pub user_agent: String,

    /// Per-request timeout; requests never time out when unset
    #[validate(range(min = 1))]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Layer built-in defaults, an optional settings file and `RETC_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Same layering as [`Settings::load`] with an explicit environment source
    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let builder = Config::builder()
            .set_default("source_url", SOURCE_URL)?
            .set_default("site_base_url", SITE_BASE_URL)?
            .set_default("download_dir", DOWNLOAD_DIR)?
            .set_default("output_dir", OUTPUT_DIR)?
            .set_default("default_region", CAPITAL_REGION)?
            .set_default("user_agent", USER_AGENT)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(DEFAULT_SETTINGS_FILE).required(false)),
        };

        let settings: Settings = builder.add_source(env).build()?.try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            site_base_url: SITE_BASE_URL.to_string(),
            download_dir: DOWNLOAD_DIR.to_string(),
            output_dir: OUTPUT_DIR.to_string(),
            default_region: CAPITAL_REGION.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}
