use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Carrier error: {message}")]
    Carrier { message: String },
}

pub type Result<T> = std::result::Result<T, TrackingError>;
