//! End-to-end autostereogram synthesis with an explicit, seedable random source

use crate::io::configuration::DEFAULT_TILE_SIZE;
use crate::io::error::{Result, ensure_tile_size};
use crate::stereogram::compositor::composite;
use crate::stereogram::depth::DepthMap;
use crate::stereogram::tile_source::get_tile;
use crate::stereogram::tiler::tile;
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};

/// Pipeline stage reached while generating one stereogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tile obtained (supplied or synthesized)
    Tile,
    /// Tiled background built
    Background,
    /// Depth shift applied
    Composite,
}

/// Drives tile acquisition, tiling and compositing
///
/// Synthetic tiles draw from the generator's own random stream, so a fixed
/// seed reproduces the same sequence of outputs.
pub struct StereogramGenerator {
    rng: StdRng,
    tile_size: (u32, u32),
}

impl StereogramGenerator {
    /// Create a deterministic generator using the default synthetic tile size
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            tile_size: (DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE),
        }
    }

    /// Use `size` for synthetic tiles
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn with_tile_size(mut self, size: (u32, u32)) -> Result<Self> {
        ensure_tile_size(size.0, size.1)?;
        self.tile_size = size;
        Ok(self)
    }

    /// Size of synthesized tiles as (width, height)
    pub const fn tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    /// Generate an autostereogram for `depth`
    ///
    /// # Errors
    ///
    /// Returns an error if the tile has a zero dimension
    pub fn generate(&mut self, depth: &DepthMap, tile_image: Option<&RgbImage>) -> Result<RgbImage> {
        self.generate_with_progress(depth, tile_image, |_| {})
    }

    /// Generate an autostereogram, reporting each completed stage
    ///
    /// # Errors
    ///
    /// Returns an error if the tile has a zero dimension
    pub fn generate_with_progress<F>(
        &mut self,
        depth: &DepthMap,
        tile_image: Option<&RgbImage>,
        mut on_stage: F,
    ) -> Result<RgbImage>
    where
        F: FnMut(Stage),
    {
        let source = get_tile(tile_image, self.tile_size, &mut self.rng)?;
        let (tile_width, tile_height) = source.dimensions();
        ensure_tile_size(tile_width, tile_height)?;
        on_stage(Stage::Tile);

        let background = tile(&source, depth.dimensions())?;
        on_stage(Stage::Background);

        let stereogram = composite(depth, &background, tile_width)?;
        on_stage(Stage::Composite);

        Ok(stereogram)
    }
}
