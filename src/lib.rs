//! Single-image autostereogram synthesis
//!
//! A grayscale depth map is turned into a horizontally repeating texture whose
//! local period is perturbed by depth. Viewed with the eyes converged one tile
//! width apart, the perturbations are perceived as relief.
//!
//! ```no_run
//! use autostereogram::stereogram::{DepthMap, StereogramGenerator};
//!
//! let depth = DepthMap::filled(300, 100, 100);
//! let mut generator = StereogramGenerator::new(42);
//! let stereogram = generator.generate(&depth, None)?;
//! assert_eq!(stereogram.dimensions(), (300, 100));
//! # Ok::<(), autostereogram::StereogramError>(())
//! ```

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Depth sampling, tiling and compositing
pub mod stereogram;

pub use io::error::{Result, StereogramError};
