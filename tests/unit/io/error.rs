//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use autostereogram::StereogramError;
    use autostereogram::io::error::{WithPath, ensure_tile_size, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = StereogramError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = StereogramError::DimensionMismatch {
            depth: (100, 100),
            canvas: (50, 50),
        };

        let message = error.to_string();
        assert!(message.contains("100x100"));
        assert!(message.contains("50x50"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_tile_size_message() {
        let error = StereogramError::InvalidTileSize {
            width: 0,
            height: 12,
        };

        assert!(error.to_string().contains("0x12"));
    }

    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &"-1", &"must be positive");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = StereogramError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_with_path_fills_unknown_path() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("gone"));

        match result.with_path(Path::new("maps/depth.png")) {
            Err(StereogramError::FileSystem { path, .. }) => {
                assert_eq!(path, PathBuf::from("maps/depth.png"));
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }

    #[test]
    fn test_with_path_leaves_other_errors_alone() {
        let result: Result<(), StereogramError> = Err(StereogramError::InvalidTileSize {
            width: 0,
            height: 0,
        });

        assert!(matches!(
            result.with_path(Path::new("tile.png")),
            Err(StereogramError::InvalidTileSize { .. })
        ));
    }

    #[test]
    fn test_ensure_tile_size() {
        assert!(ensure_tile_size(1, 1).is_ok());
        assert!(ensure_tile_size(0, 1).is_err());
        assert!(ensure_tile_size(1, 0).is_err());
    }
}
