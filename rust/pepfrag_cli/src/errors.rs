use pepfrag::PepFragError;
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    PepFrag(#[from] PepFragError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Unable to read Unimod file {path}: {source}")]
    UnimodRead {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeutralLossFormatError {
    #[error("Invalid neutral loss format: {value}")]
    Malformed { value: String },

    #[error("Invalid neutral loss mass in {value}: {source}")]
    InvalidMass {
        value: String,
        source: ParseFloatError,
    },
}
