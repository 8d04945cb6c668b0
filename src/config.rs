use crate::application::dispatcher::{SubmissionStrategy, FALLBACK_WINDOW};
use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_WEBHOOK_URL: &str = "https://script.google.com/a/macros/kiit.ac.in/s/AKfycbzlzFxUp-Km620UMX93Yk-fRwdxmpr8ait7fi2eFzbMZ5w0DQfNS_jzVb5q51iAxOU1/exec";

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Runtime settings for the registration client.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RegistrationConfig {
    pub webhook_url: String,
    pub strategy: SubmissionStrategy,
    pub fallback_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            strategy: SubmissionStrategy::default(),
            fallback_timeout_secs: FALLBACK_WINDOW.as_secs(),
            log_format: LogFormat::default(),
        }
    }
}

impl RegistrationConfig {
    /// Loads configuration in order of increasing precedence:
    /// 1. Built-in defaults
    /// 2. `trapped.toml` in the working directory, if present
    /// 3. Environment variables prefixed with `TRAPPED_` (a `.env` file is read first)
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder();
        if Path::new("trapped.toml").exists() {
            builder = builder.add_source(File::with_name("trapped"));
        }
        builder = builder.add_source(Environment::with_prefix("TRAPPED").try_parsing(true));

        Self::from_config(builder.build()?)
    }

    /// Loads configuration from an explicit TOML file, still honouring `TRAPPED_` variables.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("TRAPPED").try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        Ok(config.try_deserialize()?)
    }

    pub fn fallback_window(&self) -> Duration {
        Duration::from_secs(self.fallback_timeout_secs)
    }
}
