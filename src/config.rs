use serde::Deserialize;
use std::path::Path;
use crate::{
    error::{CheckDigitError, Result},
    evaluator::{BodyParsing, OutputFormat},
};

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_NAME: &str = "checkdigit";
pub const ENV_PREFIX: &str = "CHECKDIGIT";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ValidationConfig {
    /// Reject non-digit body characters instead of reading them as 0
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the config file, then `CHECKDIGIT_*` environment variables.
    ///
    /// A file named explicitly must exist; the default one is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        dotenv::dotenv().ok();

        let file = match path {
            Some(p) => {
                if !Path::new(p).exists() {
                    return Err(CheckDigitError::Other(anyhow::anyhow!("Config file not found: {}", p)));
                }
                config::File::with_name(p).required(true)
            }
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .set_default("output.format", "text")?
            .set_default("validation.strict", false)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn body_parsing(&self) -> BodyParsing {
        if self.validation.strict {
            BodyParsing::Strict
        } else {
            BodyParsing::Lenient
        }
    }
}
