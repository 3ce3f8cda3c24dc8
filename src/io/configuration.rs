//! Generation constants and runtime configuration defaults

// Depth-to-displacement mapping
/// Divisor turning a depth sample (0-255) into a horizontal shift (0-25 pixels)
pub const DEPTH_SHIFT_DIVISOR: u32 = 10;

// Synthetic tile generation
/// Side length of the synthetic tile used when no tile image is supplied
pub const DEFAULT_TILE_SIZE: u32 = 100;
/// Number of circles stamped onto a synthetic tile
pub const CIRCLE_COUNT: usize = 1000;
/// Circle radius is the smaller tile dimension divided by this value
pub const CIRCLE_RADIUS_DIVISOR: u32 = 100;
/// Fill color of a synthetic tile before circles are drawn
pub const TILE_BACKGROUND: [u8; 3] = [0, 0, 0];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Demo depth map
/// Dimensions (width, height) of the built-in demo depth map
pub const DEMO_SIZE: (u32, u32) = (600, 400);
/// Raised regions of the demo map as half-open `(x0, y0, x1, y1)` boxes with their depth
pub const DEMO_REGIONS: [((u32, u32, u32, u32), u8); 3] = [
    ((200, 25, 300, 125), 10),
    ((200, 150, 300, 250), 30),
    ((200, 275, 300, 375), 20),
];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_stereogram";
/// Extension of generated output files
pub const OUTPUT_EXTENSION: &str = "png";
/// File stem used for the demo output when no path is given
pub const DEMO_OUTPUT_STEM: &str = "demo";
/// Input file extensions picked up when scanning a directory
pub const SUPPORTED_EXTENSIONS: [&str; 8] =
    ["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
