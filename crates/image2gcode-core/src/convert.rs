//! Conversion driver and parameters.

use serde::{Deserialize, Serialize};

use crate::geometry::ScanGeometry;
use crate::linescan;
use crate::planner;
use crate::progress::ProgressReporter;
use crate::raster::Raster;
use crate::toolpath::{Toolpath, ToolpathBuilder};
use crate::tracer::RegionTracer;

/// Target width used when neither dimension is given, in millimeters.
pub const DEFAULT_TARGET_WIDTH: f64 = 100.0;

/// Conversion parameters. Physical values are millimeters; feed rates are
/// optional and fall back to the controller's defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Trace vertical scan lines instead of horizontal.
    pub vertical: bool,
    /// Engraving/cutting feed rate.
    pub cut_feed_rate: Option<f64>,
    /// Repositioning feed rate; travels are rapid moves when unset.
    pub move_feed_rate: Option<f64>,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Target width; 0 means derive it (see `resolve_target_size`).
    pub width: f64,
    /// Target height; 0 means derive it from the aspect ratio.
    pub height: f64,
}

impl Parameters {
    /// Fills in missing target dimensions from the image aspect ratio.
    /// With neither dimension given, the width defaults to
    /// [`DEFAULT_TARGET_WIDTH`].
    pub fn resolve_target_size(&mut self, image_width: u32, image_height: u32) {
        if self.width <= 0.0 {
            self.width = if self.height > 0.0 {
                image_width as f64 * self.height / image_height as f64
            } else {
                DEFAULT_TARGET_WIDTH
            };
        }
        if self.height <= 0.0 {
            self.height = image_height as f64 * self.width / image_width as f64;
        }
    }
}

/// How the raster is turned into motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Trace connected regions, ordered to minimize non-cutting travel.
    Regions,
    /// Plain boustrophedon sweep, row by row.
    Lines,
}

/// Runs one conversion to completion and returns the ordered toolpath.
pub fn generate_toolpath(
    raster: &Raster,
    params: &Parameters,
    mode: ScanMode,
    progress: &mut ProgressReporter,
) -> Toolpath {
    match mode {
        ScanMode::Regions => trace_regions(raster, params, progress),
        ScanMode::Lines => linescan::line_scan(raster, params, progress),
    }
}

fn trace_regions(
    raster: &Raster,
    params: &Parameters,
    progress: &mut ProgressReporter,
) -> Toolpath {
    let geometry = ScanGeometry::new(raster, params);
    let mut tracer = RegionTracer::new(raster, params.vertical);
    let mut builder = ToolpathBuilder::new(params.cut_feed_rate, params.move_feed_rate);

    let mut regions = 0usize;
    while let Some(region) = tracer.next_region(progress) {
        let plan = planner::plan_region(&region, tracer.position());
        tracer.set_position(plan.exit);
        planner::emit_region(&region, &plan, &geometry, &mut builder);
        regions += 1;
        progress.report(tracer.visited_count(), tracer.total_pixels());
    }
    tracing::debug!(regions, "region trace complete");

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_width_from_height() {
        let mut params = Parameters {
            height: 50.0,
            ..Parameters::default()
        };
        params.resolve_target_size(200, 100);
        assert_eq!(params.width, 100.0);
        assert_eq!(params.height, 50.0);
    }

    #[test]
    fn test_resolve_defaults_to_standard_width() {
        let mut params = Parameters::default();
        params.resolve_target_size(200, 100);
        assert_eq!(params.width, DEFAULT_TARGET_WIDTH);
        assert_eq!(params.height, 50.0);
    }

    #[test]
    fn test_parameters_round_trip() {
        let params = Parameters {
            vertical: true,
            cut_feed_rate: Some(300.0),
            move_feed_rate: None,
            offset_x: 5.0,
            offset_y: 0.0,
            width: 80.0,
            height: 40.0,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vertical, params.vertical);
        assert_eq!(back.cut_feed_rate, params.cut_feed_rate);
        assert_eq!(back.move_feed_rate, params.move_feed_rate);
        assert_eq!((back.width, back.height), (params.width, params.height));
    }

    #[test]
    fn test_explicit_size_is_kept() {
        let mut params = Parameters {
            width: 30.0,
            height: 40.0,
            ..Parameters::default()
        };
        params.resolve_target_size(200, 100);
        assert_eq!((params.width, params.height), (30.0, 40.0));
    }
}
