//! Unified error type for the dockspec workspace.
//!
//! Builder operations are total except for the service port lookup, which
//! reports one of the two lookup variants below. The remaining variants
//! cover configuration loading and JSON encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DockspecError {
    /// The docker record has no port mappings to search (unset or empty).
    #[error("the docker definition does not contain any port mappings to search")]
    NoPortMappings,

    /// Port mappings exist but none exposes the requested container port.
    #[error("container port {port} was not found in the port mappings")]
    PortNotFound {
        /// Container port that was looked up.
        port: u16,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DockspecError>;
