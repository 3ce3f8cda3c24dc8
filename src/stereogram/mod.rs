//! Autostereogram synthesis core
//!
//! Data flows from two independent leaves, the depth map and the tile source,
//! through the tiler into the compositor:
//! - Depth map normalization and sampling
//! - Tile acquisition and synthetic tile generation
//! - Background tiling
//! - Depth-driven pixel displacement

/// Depth-driven horizontal displacement
pub mod compositor;
/// Built-in demo depth map
pub mod demo;
/// Single-channel depth map storage and sampling
pub mod depth;
/// End-to-end generation pipeline
pub mod generator;
/// Supplied or synthetic tile images
pub mod tile_source;
/// Tile repetition across a canvas
pub mod tiler;

pub use depth::DepthMap;
pub use generator::StereogramGenerator;
