use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn message<T: Into<String>>(msg: T) -> Self {
        AppError::Message(msg.into())
    }

    /// True when the failure came from the network or the OS rather than from
    /// the content of a vendor response.
    pub fn is_transport(&self) -> bool {
        match self {
            AppError::Io(_) | AppError::Reqwest(_) => true,
            AppError::Other(err) => err
                .chain()
                .any(|cause| cause.is::<std::io::Error>() || cause.is::<reqwest::Error>()),
            _ => false,
        }
    }
}
