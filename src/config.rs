use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::db::data::BlogData;
use crate::error::AppError;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "blogfront.toml";

/// Server settings.
///
/// Sources, lowest precedence first:
/// - built-in defaults
/// - TOML file (`blogfront.toml`, or the path given with `--config`)
/// - `BLOGFRONT_*` environment variables (e.g. `BLOGFRONT_RESPONSE_DELAY_MS`)
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON data file. The embedded data set is used when unset.
    pub data_path: Option<PathBuf>,
    /// Artificial latency added to `GET /api/posts`, in milliseconds.
    pub response_delay_ms: u64,
}

impl AppConfig {
    /// Load the layered configuration from the working directory.
    ///
    /// An explicit `file` must exist; the default file is optional.
    pub fn load(file: Option<&Path>) -> Result<Self, AppError> {
        Self::load_in(Path::new("."), file)
    }

    /// Like [`AppConfig::load`], looking for the default file in `dir`.
    pub fn load_in(dir: &Path, file: Option<&Path>) -> Result<Self, AppError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(dir.join(DEFAULT_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .set_default("response_delay_ms", 0_i64)
            .map_err(config_error)?
            .add_source(file_source)
            .add_source(config::Environment::with_prefix("BLOGFRONT"))
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Load the configured data file, or the embedded data set.
    pub fn load_data(&self) -> Result<BlogData, AppError> {
        match &self.data_path {
            Some(path) => BlogData::load(path),
            None => BlogData::embedded(),
        }
    }
}

fn config_error(err: config::ConfigError) -> AppError {
    AppError::Config(err.to_string())
}
