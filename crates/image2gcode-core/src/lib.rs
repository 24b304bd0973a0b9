//! # image2gcode core
//!
//! Raster-to-toolpath tracing engine: classifies pixels of a two-color
//! image as cut/no-cut, assembles connected regions out of adjacent
//! horizontal runs, and orders regions and run directions to minimize
//! non-cutting travel. An alternate line-scan mode performs a plain
//! boustrophedon sweep instead.
//!
//! The engine is single-threaded and synchronous; all state is owned by
//! one conversion and discarded afterwards. Output is a sequence of
//! abstract motion primitives — text encoding (G-code) is layered on top
//! by the `image2gcode-gcode` crate.

pub mod bitfield;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod linescan;
pub mod planner;
pub mod progress;
pub mod raster;
pub mod toolpath;
pub mod tracer;

pub use convert::{generate_toolpath, Parameters, ScanMode, DEFAULT_TARGET_WIDTH};
pub use error::{Error, Result};
pub use progress::ProgressReporter;
pub use raster::Raster;
pub use toolpath::{Motion, Toolpath};
