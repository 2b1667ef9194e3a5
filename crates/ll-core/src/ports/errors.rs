use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    #[error("preference storage error: {0}")]
    Storage(String),

    #[error("preference data is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum MenuRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid dish row: {0}")]
    InvalidRow(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppDirsError {
    #[error("platform data-local directory unavailable")]
    DataLocalDirUnavailable,
}
