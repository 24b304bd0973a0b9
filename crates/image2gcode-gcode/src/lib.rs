//! # image2gcode G-code encoding
//!
//! Turns the abstract motion primitives produced by `image2gcode-core`
//! into G-code text. Kept separate from the tracing engine so the core
//! stays free of any output format concerns.

pub mod encoder;

pub use encoder::{encode, format_number};
