//! Source raster and cut/no-cut pixel classification.
//!
//! The raster keeps one 32-bit ARGB value per pixel, row-major with the
//! origin at the top-left. Tracing works in a "scan space" whose row index
//! is vertically flipped so that emitted coordinates have their origin at
//! the bottom-left, matching device coordinate space where Y increases
//! upward. In vertical mode the roles of rows and columns swap as part of
//! the same mapping.

use crate::error::{Error, Result};

/// Minimum alpha for a pixel to count as drawn (~94% opacity).
const ALPHA_THRESHOLD: u32 = 0xF0;

/// A pixel is classified as cut iff it is sufficiently opaque and its RGB
/// value is not pure white. White and transparent pixels are background.
pub fn is_cut(argb: u32) -> bool {
    ((argb >> 24) & 0xFF) >= ALPHA_THRESHOLD && (argb & 0x00FF_FFFF) != 0x00FF_FFFF
}

/// A decoded two-color image, immutable for the duration of a conversion.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Raster {
    /// Creates a raster from a row-major ARGB buffer.
    pub fn new(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidRaster(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if data.len() < (width as usize) * (height as usize) {
            return Err(Error::InvalidRaster(format!(
                "pixel buffer holds {} values, {}x{} requires {}",
                data.len(),
                width,
                height,
                (width as usize) * (height as usize)
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw ARGB value at image coordinates (origin top-left).
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Classifies the pixel at scan-space coordinates.
    ///
    /// Horizontal mode maps scan (x, y) to image (x, height-1-y); vertical
    /// mode transposes to image (y, height-1-x). Coordinates must be inside
    /// the scan area; the visited-bit sentinel upstream guarantees that.
    pub fn cut_at(&self, x: i32, y: i32, vertical: bool) -> bool {
        let argb = if vertical {
            self.pixel(y as u32, self.height - 1 - x as u32)
        } else {
            self.pixel(x as u32, self.height - 1 - y as u32)
        };
        is_cut(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0xFF_FF_FF_FF;
    const BLACK: u32 = 0xFF_00_00_00;

    #[test]
    fn test_classification() {
        assert!(is_cut(BLACK));
        assert!(is_cut(0xFF_FF_00_00)); // opaque red
        assert!(!is_cut(WHITE));
        assert!(!is_cut(0x00_00_00_00)); // fully transparent black
        assert!(!is_cut(0x80_00_00_00)); // half-transparent black
        assert!(is_cut(0xF0_12_34_56)); // right at the alpha threshold
        assert!(!is_cut(0xEF_12_34_56)); // just below it
    }

    #[test]
    fn test_rejects_degenerate_rasters() {
        assert!(Raster::new(0, 4, vec![]).is_err());
        assert!(Raster::new(4, 0, vec![]).is_err());
        assert!(Raster::new(2, 2, vec![WHITE; 3]).is_err());
        assert!(Raster::new(2, 2, vec![WHITE; 4]).is_ok());
    }

    #[test]
    fn test_scan_space_flip() {
        // 2x2: black pixel in the image's top-left corner only.
        let raster = Raster::new(2, 2, vec![BLACK, WHITE, WHITE, WHITE]).unwrap();
        // Horizontal scan space flips rows: the mark sits at scan (0, 1).
        assert!(!raster.cut_at(0, 0, false));
        assert!(raster.cut_at(0, 1, false));
        // Vertical scan space transposes: image (0, 0) is scan (1, 0).
        assert!(raster.cut_at(1, 0, true));
        assert!(!raster.cut_at(0, 0, true));
    }
}
