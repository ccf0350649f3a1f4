//! Configuration loading from files and the environment.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError, DEFAULT_CONFIG_FILE};

impl Config {
    /// Load the config from the command line argument.
    ///
    /// Without an argument, `colmark.yaml` in the working directory is used if
    /// it exists. A file named on the command line must exist.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let path = if path.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(path)
        } else {
            path
        };

        if required && !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        Self::load_from_file(&path)
    }

    /// Load the config from a file path, layering `COLMARK_*` environment
    /// variables on top (e.g. `COLMARK_PARSER__WORDS_PER_MINUTE=250`).
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(false))
            .add_source(
                config::Environment::with_prefix("COLMARK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Config>()?;

        config.validate()?;
        Ok(config)
    }
}
