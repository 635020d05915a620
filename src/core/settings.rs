use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_SETTINGS_PATH: &str = "core/settings.json";
pub const SETTINGS_PATH_ENV: &str = "FOLIO_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Read(#[from] io::Error),

    #[error("Settings file structure is incorrect: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SettingsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::Read(error) if error.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub ipv4_addr: Ipv4Setting,
    pub port: U16Setting,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct U16Setting {
    pub name: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ipv4Setting {
    pub name: String,
    pub value: Ipv4Addr,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let file = File::open(path.as_ref())?;
        let mut buffer = Vec::new();
        BufReader::new(file).read_to_end(&mut buffer)?;
        let settings = serde_json::from_slice::<Settings>(&buffer)?;
        Ok(settings)
    }

    /// Path from `FOLIO_SETTINGS`, or `core/settings.json`.
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                Ok(settings)
            }
            Err(error) if error.is_not_found() => {
                tracing::warn!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::new())
            }
            Err(error) => Err(error),
        }
    }

    pub fn new() -> Self {
        Settings {
            ipv4_addr: Ipv4Setting {
                name: "Ipv4 Address".to_string(),
                value: Ipv4Addr::new(127, 0, 0, 1),
            },
            port: U16Setting {
                name: "Port".to_string(),
                value: 4010,
            },
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.ipv4_addr.value, self.port.value))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
