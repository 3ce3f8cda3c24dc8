//! Single-channel depth map storage and sampling
//!
//! Depth maps may arrive in any raster format. They are reduced to one luma
//! channel once, at construction, and sampled from the precomputed grid.

use image::{DynamicImage, GrayImage};
use ndarray::Array2;

/// Immutable grid of depth samples (0-255), indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    samples: Array2<u8>,
}

impl DepthMap {
    /// Wrap an existing sample grid of shape `(height, width)`
    pub const fn from_array(samples: Array2<u8>) -> Self {
        Self { samples }
    }

    /// Create a depth map filled with a single value
    pub fn filled(width: u32, height: u32, depth: u8) -> Self {
        Self::from_array(Array2::from_elem(
            (height as usize, width as usize),
            depth,
        ))
    }

    /// Build from a single-channel image without conversion
    pub fn from_luma(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let samples = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            image
                .get_pixel_checked(col as u32, row as u32)
                .map_or(0, |pixel| pixel.0[0])
        });
        Self { samples }
    }

    /// Build from any decoded image, converting to luma first if needed
    pub fn from_image(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(gray) => Self::from_luma(gray),
            other => Self::from_luma(&other.to_luma8()),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.samples.ncols() as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.samples.nrows() as u32
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Depth at `(x, y)`, or `None` outside the map
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.samples.get([y as usize, x as usize]).copied()
    }

    /// Depth at `(x, y)`; coordinates outside the map read as zero depth
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.get(x, y).unwrap_or(0)
    }

    /// Underlying sample grid
    pub const fn samples(&self) -> &Array2<u8> {
        &self.samples
    }

    /// Render the depth map back into a grayscale image
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            image::Luma([self.sample(x, y)])
        })
    }
}
