use thiserror::Error;

/// Unified error type. Generation itself is total; only the two boundary
/// operations (URL parsing, output write) can fail, and both abort the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not look like `scheme://host` with a dotted host.
    #[error("invalid URL: {input}")]
    InvalidUrl { input: String },

    /// Output file could not be written (permission, missing directory, ...).
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
