use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckDigitError {
    #[error("Invalid character {character:?} at body position {position}")]
    InvalidBodyCharacter { position: usize, character: char },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CheckDigitError>;
