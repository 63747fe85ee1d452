mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AutotextError;

pub use types::{AutocompleteConfig, Config, SourceConfig, StalePolicy};

const CONFIG_DIR: &str = "autotext";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from an explicit path, or from the default location
///
/// An explicit path must exist. A missing default file means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AutotextError> {
    if let Some(path) = explicit {
        let contents = fs::read_to_string(path)?;
        return parse_config(&contents);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AutotextError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, AutotextError> {
    let config: Config =
        toml::from_str(content).map_err(|e| AutotextError::Config(e.to_string()))?;

    if config.autocomplete.max_panel_height == Some(0) {
        return Err(AutotextError::Config("max_panel_height must be at least 1".to_string()));
    }

    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
