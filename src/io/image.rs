//! Depth map and tile loading, and stereogram export

use crate::io::error::{Result, StereogramError, WithPath};
use crate::stereogram::depth::DepthMap;
use image::RgbImage;
use std::path::Path;

/// Load a depth map from any supported image format
///
/// Multi-channel images are reduced to luma once, here.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_depth_map(path: &Path) -> Result<DepthMap> {
    let img = image::open(path).with_path(path)?;
    Ok(DepthMap::from_image(&img))
}

/// Load a tile image and convert it to RGB
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_tile(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_path(path)?;
    Ok(img.to_rgb8())
}

/// Save a canvas, encoding by the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_canvas(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    // A bare file name has an empty parent
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| StereogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| StereogramError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
