use thiserror::Error;

#[derive(Error, Debug)]
pub enum EgolutionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cannot apply {operation} to a genome of length {length} (needs at least {required})")]
    LengthUnderflow {
        operation: &'static str,
        length: usize,
        required: usize,
    },

    #[error("Unknown codon: {0}")]
    UnknownCodon(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, EgolutionError>;
