//! Boustrophedon line-scan mode.
//!
//! Sweeps scan rows in order, emitting each contiguous cut run as it is
//! crossed, with no cross-row region assembly. The sweep direction flips
//! between rows only when the finished row actually engraved something;
//! empty rows keep the direction so the head does not wander.

use crate::convert::Parameters;
use crate::geometry::ScanGeometry;
use crate::progress::ProgressReporter;
use crate::raster::Raster;
use crate::toolpath::{Toolpath, ToolpathBuilder};

pub fn line_scan(
    raster: &Raster,
    params: &Parameters,
    progress: &mut ProgressReporter,
) -> Toolpath {
    let geometry = ScanGeometry::new(raster, params);
    let mut builder = ToolpathBuilder::new(params.cut_feed_rate, params.move_feed_rate);

    let scan_width = geometry.scan_width();
    let scan_height = geometry.scan_height();
    let total = scan_width as u64 * scan_height as u64;

    let mut direction: i32 = 1;
    let mut cutting = false;

    for row in 0..scan_height {
        let mut x = if direction < 0 { scan_width - 1 } else { 0 };
        let mut engraved = false;

        while x >= 0 && x < scan_width {
            let cut = raster.cut_at(x, row, geometry.vertical());
            if cutting {
                if !cut {
                    let (end_x, end_y) = geometry.run_end(x - direction, row);
                    builder.cut_to(end_x, end_y);
                    builder.engrave_off();
                    cutting = false;
                }
            } else if cut {
                let (begin_x, begin_y) = geometry.point(x, row);
                builder.travel_to(begin_x, begin_y);
                builder.engrave_on();
                cutting = true;
                engraved = true;
            }
            x += direction;
        }

        // Close a run that reached the row boundary.
        if cutting {
            let (end_x, end_y) = geometry.run_end(x - direction, row);
            builder.cut_to(end_x, end_y);
            builder.engrave_off();
            cutting = false;
        }

        progress.report((row as u64 + 1) * scan_width as u64, total);

        if engraved {
            direction = -direction;
        }
    }

    builder.finish()
}
