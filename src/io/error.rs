//! Error types for generation, rendering and analysis operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum KolamError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// In-memory image bytes could not be decoded
    ImageDecode {
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A new generation was requested while a transition is still animating
    ///
    /// Regeneration is not re-entrant; callers must let the running transition
    /// complete (or finish it explicitly) before starting another.
    GenerationInProgress {
        /// Interpolation factor the in-flight transition has reached
        progress: f64,
    },

    /// A redraw or export was requested before any pattern was generated
    NothingToRedraw,

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The remote symmetry service failed to answer
    RemoteService {
        /// Description of the failure
        reason: String,
    },

    /// The remote symmetry service answered with something other than a verdict
    MalformedReply {
        /// Description of what was wrong with the reply
        reason: String,
    },

    /// A configuration file could not be parsed
    Configuration {
        /// Path of the configuration file, if it came from disk
        path: Option<PathBuf>,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// A classification report could not be written as JSON
    ReportEncoding {
        /// File the report describes
        path: PathBuf,
        /// Underlying serialisation error
        source: serde_json::Error,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageDecode { source } => {
                write!(f, "Failed to decode image data: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GenerationInProgress { progress } => {
                write!(
                    f,
                    "Generation already in progress ({:.0}% animated)",
                    progress * 100.0
                )
            }
            Self::NothingToRedraw => {
                write!(f, "No pattern has been generated yet")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::RemoteService { reason } => {
                write!(f, "Remote symmetry service failed: {reason}")
            }
            Self::MalformedReply { reason } => {
                write!(f, "Malformed symmetry service reply: {reason}")
            }
            Self::Configuration { path, source } => match path {
                Some(path) => write!(
                    f,
                    "Invalid configuration in '{}': {source}",
                    path.display()
                ),
                None => write!(f, "Invalid configuration: {source}"),
            },
            Self::ReportEncoding { path, source } => {
                write!(
                    f,
                    "Failed to encode report for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageDecode { source }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Configuration { source, .. } | Self::ReportEncoding { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, KolamError>;

impl From<image::ImageError> for KolamError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode { source: err }
    }
}

impl From<std::io::Error> for KolamError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed reply error
pub fn malformed_reply(reason: &impl ToString) -> KolamError {
    KolamError::MalformedReply {
        reason: reason.to_string(),
    }
}
