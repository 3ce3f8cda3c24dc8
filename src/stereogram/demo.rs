//! Built-in depth map with three raised rectangles, for trying the tool without input files

use crate::io::configuration::DEMO_REGIONS;
use crate::stereogram::depth::DepthMap;
use ndarray::Array2;

/// Depth of the demo region containing `(x, y)`, or zero for the background
pub fn demo_depth_at(x: u32, y: u32) -> u8 {
    DEMO_REGIONS
        .iter()
        .find(|((x0, y0, x1, y1), _)| (*x0..*x1).contains(&x) && (*y0..*y1).contains(&y))
        .map_or(0, |&(_, depth)| depth)
}

/// Build the demo depth map at `(width, height)`
///
/// The background sits at depth zero. Each region of [`DEMO_REGIONS`] is
/// filled with its depth; regions past the map edge are simply cut off.
pub fn demo_depth_map(width: u32, height: u32) -> DepthMap {
    let samples = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        demo_depth_at(col as u32, row as u32)
    });

    DepthMap::from_array(samples)
}
