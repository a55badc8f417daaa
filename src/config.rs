use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::Error;

/// Name of the settings file expected in the user's home directory
///
/// ```ini
/// [api]
/// API-KEY = <key obtained from https://www.bungie.net/en-US/User/API>
///
/// [default]
/// debug = 1
/// ```
pub const CONFIG_FILE_NAME: &str = ".bungie_net_api.rc";

#[derive(Debug, Clone, Deserialize)]
struct ApiSection {
    // the config crate lowercases ini keys, but don't rely on it
    #[serde(rename = "api-key", alias = "API-KEY")]
    api_key: String
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DefaultSection {
    #[serde(default)]
    debug: bool
}

#[derive(Debug, Clone, Deserialize)]
struct SettingsFile {
    api: ApiSection,

    #[serde(default)]
    default: DefaultSection
}

/// Values loaded from the user's settings file
///
/// Constructed once and owned by a [`Client`](crate::client::Client)
/// instead of living in process-wide state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub debug: bool
}

impl Settings {
    /// Load settings from `$HOME/.bungie_net_api.rc`
    pub fn load() -> Result<Self, Error> {
        let dirs = directories::BaseDirs::new()
            .ok_or_else(|| config::ConfigError::Message(String::from("failed to locate home directory")))?;

        Self::from_file(dirs.home_dir().join(CONFIG_FILE_NAME))
    }

    /// Load settings from an explicit ini file path
    ///
    /// Missing file or missing `API-KEY` fail here, before
    /// any request is attempted
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file: SettingsFile = Config::builder()
            .add_source(File::from(PathBuf::from(path.as_ref())).format(FileFormat::Ini))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            api_key: file.api.api_key,
            debug: file.default.debug
        })
    }
}
