//! Shared types for the book sampler: errors, configuration, sample kinds
//! and the on-disk sample library.

pub mod config;
pub mod error;
pub mod library;
pub mod types;

pub use config::{BookSamplerConfig, LibraryConfig, SamplerConfig, ScanAdvance};
pub use error::{Result, SamplerError};
pub use types::SampleKind;

#[cfg(test)]
mod tests;
