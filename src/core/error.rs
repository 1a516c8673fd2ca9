//! Error types for terrain generation

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Allocation failed for {what} ({count} elements)")]
    Allocation { what: &'static str, count: usize },

    #[error("Invalid permutation table: {0}")]
    InvalidPermutation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reserve exactly `count` elements, reporting failure as [`Error::Allocation`].
pub(crate) fn try_alloc<T>(what: &'static str, count: usize) -> Result<Vec<T>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)
        .map_err(|_| Error::Allocation { what, count })?;
    Ok(buf)
}
