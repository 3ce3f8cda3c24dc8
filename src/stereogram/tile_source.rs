//! Tile acquisition: a caller-supplied texture or a synthetic random-circle pattern

use crate::io::configuration::{CIRCLE_COUNT, CIRCLE_RADIUS_DIVISOR, TILE_BACKGROUND};
use crate::io::error::{Result, ensure_tile_size};
use image::{Rgb, RgbImage};
use rand::Rng;
use std::borrow::Cow;

/// Return the requested tile unchanged, or synthesize one of `fallback_size`
///
/// # Errors
///
/// Returns an error if no tile is supplied and `fallback_size` has a zero dimension
pub fn get_tile<'a, R: Rng>(
    requested: Option<&'a RgbImage>,
    fallback_size: (u32, u32),
    rng: &mut R,
) -> Result<Cow<'a, RgbImage>> {
    match requested {
        Some(tile) => Ok(Cow::Borrowed(tile)),
        None => generate_random_tile(fallback_size, rng).map(Cow::Owned),
    }
}

/// Radius of the circles stamped on a synthetic tile of `size`
pub fn circle_radius(size: (u32, u32)) -> u32 {
    size.0.min(size.1) / CIRCLE_RADIUS_DIVISOR
}

/// Synthesize a tile filled with randomly placed, randomly colored circles
///
/// Centers are drawn from `[0, dim - radius)` on each axis so circles do not
/// run off the right or bottom edge. Later circles overwrite earlier ones.
///
/// # Errors
///
/// Returns an error if either dimension of `size` is zero
pub fn generate_random_tile<R: Rng>(size: (u32, u32), rng: &mut R) -> Result<RgbImage> {
    let (width, height) = size;
    ensure_tile_size(width, height)?;

    let mut tile = RgbImage::from_pixel(width, height, Rgb(TILE_BACKGROUND));
    let radius = circle_radius(size);

    for _ in 0..CIRCLE_COUNT {
        let cx = rng.random_range(0..width - radius);
        let cy = rng.random_range(0..height - radius);
        let fill = Rgb([rng.random(), rng.random(), rng.random()]);
        draw_filled_circle(&mut tile, (cx, cy), radius, fill);
    }

    Ok(tile)
}

/// Fill every pixel within `radius` of `center`, clipped to the image
pub fn draw_filled_circle(image: &mut RgbImage, center: (u32, u32), radius: u32, fill: Rgb<u8>) {
    let r = i64::from(radius);
    let (cx, cy) = (i64::from(center.0), i64::from(center.1));

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 {
                continue;
            }
            if let Some(pixel) = image.get_pixel_mut_checked(x as u32, y as u32) {
                *pixel = fill;
            }
        }
    }
}
