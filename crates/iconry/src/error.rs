//! Error types for Iconry operations.
//!
//! Components, assets and the render host cannot fail. [`IconryError`]
//! covers the layers around them: icon lookup, configuration and I/O.

use std::io;

use thiserror::Error;

/// The main error type for Iconry operations.
#[derive(Debug, Error)]
pub enum IconryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
