//! # image2gcode
//!
//! Converts binary (black and white) images into 2D G-code for laser
//! engravers and similar tools. White is treated as background; any other
//! sufficiently opaque color is engraved.
//!
//! The workspace is split into:
//!
//! 1. **image2gcode-core** - raster classification, region tracing, path
//!    planning, line scan, motion primitives
//! 2. **image2gcode-gcode** - G-code text encoding of motion primitives
//! 3. **image2gcode** - this binary: CLI, image decoding, file output

pub mod cli;

pub use image2gcode_core::{
    generate_toolpath, Motion, Parameters, ProgressReporter, Raster, ScanMode, Toolpath,
    DEFAULT_TARGET_WIDTH,
};
pub use image2gcode_gcode::encode;

/// Binary version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Packs a decoded image into the core's ARGB raster.
pub fn raster_from_image(image: &image::DynamicImage) -> image2gcode_core::Result<Raster> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let data = rgba
        .pixels()
        .map(|pixel| {
            let [r, g, b, a] = pixel.0;
            ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
        })
        .collect();
    Raster::new(width, height, data)
}

/// Initialize logging with the default configuration.
///
/// Console output on stderr with RUST_LOG environment variable support,
/// INFO level by default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
