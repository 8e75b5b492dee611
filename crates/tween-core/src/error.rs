use thiserror::Error;

#[derive(Debug, Error)]
pub enum TweenError {
    #[error("Unknown curve kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, TweenError>;
