use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned no {0}")]
    EmptyResult(String),
    #[error("no symbols with market capitalization >= {threshold}")]
    EmptyFilterResult { threshold: f64 },
    #[error("unexpected payload: {0}")]
    Decode(String),
    #[error("invalid configuration: {0}")]
    Config(String),
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

    pub fn network<T: Into<String>>(msg: T) -> Self {
        AppError::Network(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn empty<T: Into<String>>(what: T) -> Self {
        AppError::EmptyResult(what.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        AppError::Config(msg.into())
    }
}
