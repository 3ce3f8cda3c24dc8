//! Depth-driven horizontal pixel displacement over a tiled background
//!
//! Every output pixel repeats the background from one tile width to its left,
//! nudged right by an amount proportional to depth. Viewed with the eyes
//! converged one tile width apart, the nudges read as relief.
//!
//! All reads come from the untouched tiled canvas and all writes go to a
//! separate output buffer, so pixels can be computed in any order.

use crate::io::configuration::DEPTH_SHIFT_DIVISOR;
use crate::io::error::{Result, StereogramError};
use crate::stereogram::depth::DepthMap;
use image::RgbImage;

/// Horizontal shift in pixels for a depth sample (0-25 over the full range)
pub const fn depth_to_shift(depth: u8) -> u32 {
    depth as u32 / DEPTH_SHIFT_DIVISOR
}

/// Column of the tiled canvas that feeds output column `x`
///
/// Returns `None` when `x - tile_width + shift` falls outside the open
/// interval `(0, width)`; the pixel then keeps its unshifted value. Column 0
/// is excluded along with everything past the right edge.
pub const fn source_column(x: u32, depth: u8, tile_width: u32, width: u32) -> Option<u32> {
    let xpos = x as i64 - tile_width as i64 + depth_to_shift(depth) as i64;
    if xpos > 0 && xpos < width as i64 {
        Some(xpos as u32)
    } else {
        None
    }
}

/// Shift the tiled background according to the depth map
///
/// `tile_width` is the repeat distance of the background. A zero width is
/// accepted here; tile validation happens when the background is built.
///
/// # Errors
///
/// Returns [`StereogramError::DimensionMismatch`] if the depth map and the
/// tiled canvas differ in size. The check precedes any pixel work.
pub fn composite(depth: &DepthMap, tiled: &RgbImage, tile_width: u32) -> Result<RgbImage> {
    let depth_dimensions = depth.dimensions();
    let canvas_dimensions = tiled.dimensions();
    if depth_dimensions != canvas_dimensions {
        return Err(StereogramError::DimensionMismatch {
            depth: depth_dimensions,
            canvas: canvas_dimensions,
        });
    }

    let width = tiled.width();
    let mut output = tiled.clone();

    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let Some(source_x) = source_column(x, depth.sample(x, y), tile_width, width) else {
            continue;
        };
        if let Some(source) = tiled.get_pixel_checked(source_x, y) {
            *pixel = *source;
        }
    }

    Ok(output)
}
