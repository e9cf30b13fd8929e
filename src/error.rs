//! Error types for toolcache
//!
//! All modules use `ToolCacheResult<T>` as their return type. A lookup miss
//! is not an error: resolvers return `Ok(None)`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for toolcache operations
pub type ToolCacheResult<T> = Result<T, ToolCacheError>;

/// All errors that can occur in toolcache
#[derive(Error, Debug)]
pub enum ToolCacheError {
    // Configuration errors
    #[error("Cache root is not defined. Set RUNNER_TOOL_CACHE or pass --root")]
    CacheRootUndefined,

    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Caller input errors
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    // Source errors
    #[error("Source directory not found: {0}")]
    SourceDirNotFound(PathBuf),

    #[error("Source file not found: {0}")]
    SourceFileNotFound(PathBuf),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ToolCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Whether the error is a missing-source condition
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SourceDirNotFound(_) | Self::SourceFileNotFound(_)
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CacheRootUndefined => {
                Some("Export RUNNER_TOOL_CACHE=<dir> or set cache.root in the config file")
            }
            Self::SourceDirNotFound(_) => Some("Download and extract the tool before caching it"),
            Self::SourceFileNotFound(_) => Some("Download the tool before caching it"),
            _ => None,
        }
    }
}
