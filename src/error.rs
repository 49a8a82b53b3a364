//! Error types for weathermock

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Operation ID '{0}' not found in controllers")]
    UnknownOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
