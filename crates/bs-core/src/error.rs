use std::path::PathBuf;

use thiserror::Error;

use crate::types::SampleKind;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("No {0} available to sample")]
    EmptySelection(SampleKind),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Cannot open nonexistent file {}", .0.display())]
    NotFound(PathBuf),
    #[error("No files to sample in directory {}", .0.display())]
    EmptyDirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SamplerError>;
