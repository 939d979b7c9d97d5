use thiserror::Error;

/// Failures of the APOD fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApodError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("APOD request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Could not read APOD response: {0}")]
    Decode(String),

    #[error("No picture published for {0}")]
    Empty(String),

    #[error("APOD entry is missing its {0}")]
    Incomplete(&'static str),
}

/// Failures talking to persistent storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Failed to read from storage: {0}")]
    Read(String),

    #[error("Failed to serialize history: {0}")]
    Serialize(String),

    #[error("Failed to write to storage: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Apod(#[from] ApodError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("There is no fetched picture to save")]
    NothingPending,

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
