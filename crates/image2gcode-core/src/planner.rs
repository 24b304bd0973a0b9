//! Region traversal planning and emission.
//!
//! Picks the region entry corner nearest the current tool position, which
//! fixes both the row order and the within-run cut direction for the whole
//! region. The within-run direction is applied uniformly to every run
//! rather than alternated; inter-row repositioning happens with the beam
//! off, so only the entry corner is distance-optimized.

use crate::geometry::ScanGeometry;
use crate::toolpath::ToolpathBuilder;
use crate::tracer::Region;

/// Traversal decision for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPlan {
    /// Traverse runs from the highest row down instead of bottom up.
    pub top_to_bottom: bool,
    /// Cut every run end-to-begin instead of begin-to-end.
    pub reversed_within_run: bool,
    /// Corner seeding the next ring search: the exit of a conceptual
    /// serpentine over the region, so the opposite run's begin/end sides
    /// swap when the run count is odd. Kept as-is for output compatibility
    /// even where it differs from the final emitted endpoint.
    pub exit: (i32, i32),
}

fn squared_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> i64 {
    let dx = (x2 - x1) as i64;
    let dy = (y2 - y1) as i64;
    dx * dx + dy * dy
}

/// Evaluates the four entry candidates in fixed order (top begin, top end,
/// bottom begin, bottom end); ties keep the earliest candidate.
pub fn plan_region(region: &Region, position: (i32, i32)) -> RegionPlan {
    let (sx, sy) = position;
    let top = region.top();
    let bottom = region.bottom();
    let odd_runs = region.len() % 2 != 0;

    let mut top_to_bottom = true;
    let mut reversed_within_run = false;
    let mut best = squared_distance(top.begin_x, top.row, sx, sy);
    let mut exit = (
        if odd_runs { bottom.end_x } else { bottom.begin_x },
        bottom.row,
    );

    let dist = squared_distance(top.end_x, top.row, sx, sy);
    if dist < best {
        best = dist;
        reversed_within_run = true;
        exit = (
            if odd_runs { bottom.begin_x } else { bottom.end_x },
            bottom.row,
        );
    }

    if region.len() > 1 {
        let dist = squared_distance(bottom.begin_x, bottom.row, sx, sy);
        if dist < best {
            best = dist;
            top_to_bottom = false;
            reversed_within_run = false;
            exit = (if odd_runs { top.end_x } else { top.begin_x }, top.row);
        }

        let dist = squared_distance(bottom.end_x, bottom.row, sx, sy);
        if dist < best {
            top_to_bottom = false;
            reversed_within_run = true;
            exit = (if odd_runs { top.begin_x } else { top.end_x }, top.row);
        }
    }

    RegionPlan {
        top_to_bottom,
        reversed_within_run,
        exit,
    }
}

/// Emits the region's runs in planned order: travel to the first endpoint,
/// engrave on, cut to the second endpoint, engrave off.
pub fn emit_region(
    region: &Region,
    plan: &RegionPlan,
    geometry: &ScanGeometry,
    builder: &mut ToolpathBuilder,
) {
    let indices: Box<dyn Iterator<Item = usize>> = if plan.top_to_bottom {
        Box::new((0..region.len()).rev())
    } else {
        Box::new(0..region.len())
    };

    for index in indices {
        let run = region.run(index);
        let begin = geometry.point(run.begin_x, run.row);
        let end = geometry.run_end(run.end_x, run.row);
        let (first, second) = if plan.reversed_within_run {
            (end, begin)
        } else {
            (begin, end)
        };
        builder.travel_to(first.0, first.1);
        builder.engrave_on();
        builder.cut_to(second.0, second.1);
        builder.engrave_off();
    }
}
