//! Error types and path context for stereogram operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder path used when an error is converted without file context
const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all stereogram operations
#[derive(Debug)]
pub enum StereogramError {
    /// Depth map and canvas to shift have different sizes
    ///
    /// Checked before any pixel is computed, so no partial output exists.
    DimensionMismatch {
        /// Depth map dimensions (width, height)
        depth: (u32, u32),
        /// Canvas dimensions (width, height)
        canvas: (u32, u32),
    },

    /// Tile has a zero width or height
    InvalidTileSize {
        /// Tile width in pixels
        width: u32,
        /// Tile height in pixels
        height: u32,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
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
}

impl fmt::Display for StereogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { depth, canvas } => {
                write!(
                    f,
                    "Depth map is {}x{} but canvas is {}x{}",
                    depth.0, depth.1, canvas.0, canvas.1
                )
            }
            Self::InvalidTileSize { width, height } => {
                write!(
                    f,
                    "Tile size {width}x{height} is invalid: both dimensions must be positive"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for StereogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stereogram results
pub type Result<T> = std::result::Result<T, StereogramError>;

impl From<image::ImageError> for StereogramError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for StereogramError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file involved to errors raised without path information
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<StereogramError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-backed variants carry a path
            match &mut error {
                StereogramError::ImageLoad { path: slot, .. }
                | StereogramError::ImageExport { path: slot, .. }
                | StereogramError::FileSystem { path: slot, .. }
                    if slot.as_path() == Path::new(UNKNOWN_PATH) =>
                {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StereogramError {
    StereogramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate that a tile has positive dimensions
///
/// # Errors
///
/// Returns [`StereogramError::InvalidTileSize`] if either dimension is zero
pub const fn ensure_tile_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(StereogramError::InvalidTileSize { width, height });
    }
    Ok(())
}
