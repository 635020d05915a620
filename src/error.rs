use thiserror::Error;

use crate::core::settings::SettingsError;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
