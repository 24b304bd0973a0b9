//! Error types for the tracing engine.

use thiserror::Error;

/// Errors that can occur while preparing a conversion.
///
/// Tracing itself is total over a valid raster: the visited-bit boundary
/// sentinel keeps every coordinate access in range, so the only failure
/// mode is rejecting the input up front.
#[derive(Error, Debug)]
pub enum Error {
    /// The raster has a zero dimension or an undersized pixel buffer.
    #[error("Invalid raster: {0}")]
    InvalidRaster(String),
}

/// Result type alias for tracing engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_raster_display() {
        let err = Error::InvalidRaster("0x10 pixels".to_string());
        assert_eq!(err.to_string(), "Invalid raster: 0x10 pixels");
    }
}
