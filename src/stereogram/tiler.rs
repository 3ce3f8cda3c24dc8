//! Background construction by repeating a tile across the target canvas

use crate::io::error::{Result, ensure_tile_size};
use image::{RgbImage, imageops};

/// Number of (columns, rows) of tiles pasted to cover `target`
///
/// One extra column and row is always included so that a target that is not
/// a multiple of the tile size is still fully covered.
///
/// # Errors
///
/// Returns an error if the tile has a zero width or height
pub fn grid_extent(tile: (u32, u32), target: (u32, u32)) -> Result<(u32, u32)> {
    ensure_tile_size(tile.0, tile.1)?;
    Ok((target.0 / tile.0 + 1, target.1 / tile.1 + 1))
}

/// Repeat `src` over a canvas of `target` (width, height)
///
/// Tiles are pasted at `(col * w, row * h)`; whatever falls past the canvas
/// edge is clipped, the tile itself is never shrunk.
///
/// # Errors
///
/// Returns an error if the tile has a zero width or height
pub fn tile(src: &RgbImage, target: (u32, u32)) -> Result<RgbImage> {
    let (tile_width, tile_height) = src.dimensions();
    let (cols, rows) = grid_extent((tile_width, tile_height), target)?;

    let mut canvas = RgbImage::new(target.0, target.1);

    for row in 0..rows {
        for col in 0..cols {
            let x = i64::from(col) * i64::from(tile_width);
            let y = i64::from(row) * i64::from(tile_height);
            imageops::replace(&mut canvas, src, x, y);
        }
    }

    Ok(canvas)
}
