//! Scan-space to physical coordinate mapping and dot-length compensation.

use crate::convert::Parameters;
use crate::raster::Raster;

/// Lower bound for the kerf compensation length, in millimeters.
pub const MIN_DOT_LENGTH: f64 = 0.012;
/// Upper bound for the kerf compensation length, in millimeters.
pub const MAX_DOT_LENGTH: f64 = 0.05;

/// Clamps a raw step-derived compensation length into the legal range.
pub fn clamp_dot_length(dot_length: f64) -> f64 {
    dot_length.clamp(MIN_DOT_LENGTH, MAX_DOT_LENGTH)
}

/// Maps scan-space pixel indices to physical coordinates in millimeters.
///
/// The "along" axis runs along cut runs, the "cross" axis steps between
/// scan rows; in vertical mode along is the machine Y axis, otherwise X.
/// The beam engraves a finite dot, so each run extends `dot_length` past
/// its last pixel; to keep the engraved extent equal to the target
/// dimension the along step is shrunk by the same amount.
#[derive(Debug, Clone)]
pub struct ScanGeometry {
    vertical: bool,
    scan_width: i32,
    scan_height: i32,
    along_offset: f64,
    cross_offset: f64,
    along_step: f64,
    cross_step: f64,
    dot_length: f64,
}

impl ScanGeometry {
    pub fn new(raster: &Raster, params: &Parameters) -> Self {
        let width = raster.width();
        let height = raster.height();
        let x_step = if width > 1 {
            params.width / (width - 1) as f64
        } else {
            0.0
        };
        let y_step = if height > 1 {
            params.height / (height - 1) as f64
        } else {
            0.0
        };

        if params.vertical {
            let dot_length = clamp_dot_length(y_step / 10.0);
            let along_step = if height > 1 {
                (params.height - dot_length) / (height - 1) as f64
            } else {
                0.0
            };
            Self {
                vertical: true,
                scan_width: height as i32,
                scan_height: width as i32,
                along_offset: params.offset_y,
                cross_offset: params.offset_x,
                along_step,
                cross_step: x_step,
                dot_length,
            }
        } else {
            let dot_length = clamp_dot_length(x_step / 10.0);
            let along_step = if width > 1 {
                (params.width - dot_length) / (width - 1) as f64
            } else {
                0.0
            };
            Self {
                vertical: false,
                scan_width: width as i32,
                scan_height: height as i32,
                along_offset: params.offset_x,
                cross_offset: params.offset_y,
                along_step,
                cross_step: y_step,
                dot_length,
            }
        }
    }

    /// Scan-space width (number of pixels along a run).
    pub fn scan_width(&self) -> i32 {
        self.scan_width
    }

    /// Scan-space height (number of scan rows).
    pub fn scan_height(&self) -> i32 {
        self.scan_height
    }

    pub fn vertical(&self) -> bool {
        self.vertical
    }

    pub fn dot_length(&self) -> f64 {
        self.dot_length
    }

    fn along(&self, index: i32) -> f64 {
        self.along_offset + index as f64 * self.along_step
    }

    fn cross(&self, row: i32) -> f64 {
        self.cross_offset + row as f64 * self.cross_step
    }

    /// Physical (x, y) of a pixel's leading edge.
    pub fn point(&self, along: i32, row: i32) -> (f64, f64) {
        if self.vertical {
            (self.cross(row), self.along(along))
        } else {
            (self.along(along), self.cross(row))
        }
    }

    /// Physical (x, y) of a run end at the given pixel, dot length included.
    pub fn run_end(&self, along: i32, row: i32) -> (f64, f64) {
        let along_pos = self.along(along) + self.dot_length;
        if self.vertical {
            (self.cross(row), along_pos)
        } else {
            (along_pos, self.cross(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: u32, height: u32) -> Raster {
        Raster::new(width, height, vec![0xFF00_0000; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_dot_length_clamping() {
        assert_eq!(clamp_dot_length(0.0), MIN_DOT_LENGTH);
        assert_eq!(clamp_dot_length(0.03), 0.03);
        assert_eq!(clamp_dot_length(10.0), MAX_DOT_LENGTH);
    }

    #[test]
    fn test_horizontal_mapping_with_compensation() {
        let params = Parameters {
            width: 0.3,
            height: 0.0,
            ..Parameters::default()
        };
        let geom = ScanGeometry::new(&raster(4, 1), &params);
        // Raw step 0.1 gives dot length 0.01, clamped to the minimum.
        assert_eq!(geom.dot_length(), MIN_DOT_LENGTH);
        let step = (0.3 - MIN_DOT_LENGTH) / 3.0;
        let (x, y) = geom.point(2, 0);
        assert!((x - 2.0 * step).abs() < 1e-12);
        assert_eq!(y, 0.0);
        let (end_x, _) = geom.run_end(2, 0);
        assert!((end_x - (2.0 * step + MIN_DOT_LENGTH)).abs() < 1e-12);
    }

    #[test]
    fn test_single_pixel_axis_degenerates_to_zero_step() {
        let params = Parameters {
            width: 100.0,
            height: 50.0,
            ..Parameters::default()
        };
        let geom = ScanGeometry::new(&raster(1, 1), &params);
        let (x, y) = geom.point(0, 0);
        assert_eq!((x, y), (0.0, 0.0));
        assert!(geom.run_end(0, 0).0.is_finite());
    }

    #[test]
    fn test_vertical_mode_swaps_axes() {
        let params = Parameters {
            vertical: true,
            offset_x: 5.0,
            offset_y: 7.0,
            width: 100.0,
            height: 200.0,
            ..Parameters::default()
        };
        // 3 wide, 5 tall image: scan rows are image columns.
        let geom = ScanGeometry::new(&raster(3, 5), &params);
        assert_eq!(geom.scan_width(), 5);
        assert_eq!(geom.scan_height(), 3);
        let dot = clamp_dot_length((200.0 / 4.0) / 10.0);
        assert_eq!(dot, MAX_DOT_LENGTH);
        let (x, y) = geom.point(1, 2);
        assert!((x - (5.0 + 2.0 * 50.0)).abs() < 1e-12);
        assert!((y - (7.0 + (200.0 - dot) / 4.0)).abs() < 1e-12);
    }
}
