//! Connected-region tracing.
//!
//! A region is assembled in three phases: a ring search finds the unvisited
//! cut pixel nearest the current tool position, row expansion grows it into
//! a maximal horizontal run, and vertical chaining stacks adjacent runs
//! above and below until the component is exhausted. Ring distance, not
//! Euclidean distance, governs "nearest": every probed cell stays marked
//! visited, which permanently retires background pixels from future
//! searches and keeps the search itself linear over the image.

use std::collections::VecDeque;

use crate::bitfield::VisitedBits;
use crate::progress::ProgressReporter;
use crate::raster::Raster;

/// Maximal contiguous span of cut pixels within one scan row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalRun {
    pub begin_x: i32,
    pub end_x: i32,
    pub row: i32,
}

impl HorizontalRun {
    /// Span length used for run arbitration (end minus begin).
    pub fn length(&self) -> i32 {
        self.end_x - self.begin_x
    }
}

/// Ordered sequence of vertically chained runs forming one tracing unit.
///
/// Runs ascend strictly by row and adjacent entries differ by exactly one
/// row; the seed run sits somewhere in the middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    runs: VecDeque<HorizontalRun>,
}

impl Region {
    fn new(seed: HorizontalRun) -> Self {
        let mut runs = VecDeque::new();
        runs.push_back(seed);
        Self { runs }
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Run at the given index, ascending by row.
    pub fn run(&self, index: usize) -> &HorizontalRun {
        &self.runs[index]
    }

    /// The run with the lowest row.
    pub fn bottom(&self) -> &HorizontalRun {
        self.runs.front().expect("region holds at least the seed run")
    }

    /// The run with the highest row.
    pub fn top(&self) -> &HorizontalRun {
        self.runs.back().expect("region holds at least the seed run")
    }

    pub fn runs(&self) -> impl Iterator<Item = &HorizontalRun> {
        self.runs.iter()
    }

    #[cfg(test)]
    pub(crate) fn from_runs(runs: Vec<HorizontalRun>) -> Self {
        assert!(!runs.is_empty());
        Self {
            runs: runs.into(),
        }
    }
}

/// Offsets of the Manhattan ring at the given radius, in fixed search
/// order: from (0, r) toward (r, 0), on to (0, -r), then (-r, 0), and back
/// up to the start, touching every perimeter cell exactly once. Radius 0
/// yields only the center.
pub fn ring_offsets(radius: i32) -> Box<dyn Iterator<Item = (i32, i32)>> {
    if radius == 0 {
        return Box::new(std::iter::once((0, 0)));
    }
    let corners = [
        (0, radius, 1, -1),
        (radius, 0, -1, -1),
        (0, -radius, -1, 1),
        (-radius, 0, 1, 1),
    ];
    Box::new(corners.into_iter().flat_map(move |(cx, cy, dx, dy)| {
        (0..radius).map(move |step| (cx + step * dx, cy + step * dy))
    }))
}

/// Pulls connected regions out of the raster, nearest-first.
///
/// Owns the visited bitset for the duration of one conversion. The tool
/// position seeds each ring search and is updated by the caller with the
/// planner's exit corner after every region.
#[derive(Debug)]
pub struct RegionTracer<'a> {
    raster: &'a Raster,
    visited: VisitedBits,
    vertical: bool,
    position: (i32, i32),
}

impl<'a> RegionTracer<'a> {
    pub fn new(raster: &'a Raster, vertical: bool) -> Self {
        let visited = if vertical {
            VisitedBits::new(raster.height(), raster.width())
        } else {
            VisitedBits::new(raster.width(), raster.height())
        };
        Self {
            raster,
            visited,
            vertical,
            position: (0, 0),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn set_position(&mut self, position: (i32, i32)) {
        self.position = position;
    }

    pub fn visited_count(&self) -> u64 {
        self.visited.count()
    }

    pub fn total_pixels(&self) -> u64 {
        self.visited.total()
    }

    /// Finds and assembles the next region, or `None` once every pixel has
    /// been visited.
    pub fn next_region(&mut self, progress: &mut ProgressReporter) -> Option<Region> {
        let (seed_x, seed_y) = self.find_seed(progress)?;
        let seed = self.grow_run(seed_x, seed_y);
        let mut region = Region::new(seed);

        // Chain upward first, then downward, so the visited marks evolve in
        // the same order arbitration expects. Rows above append, rows below
        // prepend; the list stays ascending with the seed in the middle.
        let mut run = seed;
        while let Some(next) = self.find_adjacent_run(&run, 1) {
            region.runs.push_back(next);
            run = next;
            progress.report(self.visited.count(), self.visited.total());
        }
        let mut run = seed;
        while let Some(next) = self.find_adjacent_run(&run, -1) {
            region.runs.push_front(next);
            run = next;
            progress.report(self.visited.count(), self.visited.total());
        }

        Some(region)
    }

    /// Ring search for the nearest unvisited cut pixel. Every probed cell
    /// is marked visited whether or not it classifies as cut.
    fn find_seed(&mut self, progress: &mut ProgressReporter) -> Option<(i32, i32)> {
        let total = self.visited.total();
        let (sx, sy) = self.position;
        let mut radius = 0;
        while self.visited.count() < total {
            for (dx, dy) in ring_offsets(radius) {
                let (x, y) = (sx + dx, sy + dy);
                if !self.visited.set(x, y, true) && self.raster.cut_at(x, y, self.vertical) {
                    return Some((x, y));
                }
            }
            progress.report(self.visited.count(), total);
            radius += 1;
        }
        None
    }

    /// Expands a seed pixel into its maximal run. The terminating
    /// non-cut neighbor on each side is consumed as visited too.
    fn grow_run(&mut self, x: i32, y: i32) -> HorizontalRun {
        self.visited.set(x, y, true);
        let mut begin_x = x;
        let mut end_x = x;

        let mut probe = x - 1;
        while !self.visited.set(probe, y, true) && self.raster.cut_at(probe, y, self.vertical) {
            begin_x = probe;
            probe -= 1;
        }
        probe = x + 1;
        while !self.visited.set(probe, y, true) && self.raster.cut_at(probe, y, self.vertical) {
            end_x = probe;
            probe += 1;
        }

        HorizontalRun { begin_x, end_x, row: y }
    }

    /// Searches the row adjacent to `run` (one row up or down) across the
    /// widened span `[begin_x - 1, end_x + 1]` for the next run to chain.
    ///
    /// When several runs touch the span, only the strictly longest is kept;
    /// the pixels of every discarded run are unmarked so a later, separate
    /// region can pick them up.
    fn find_adjacent_run(&mut self, run: &HorizontalRun, dy: i32) -> Option<HorizontalRun> {
        let row = run.row + dy;
        let mut kept: Option<HorizontalRun> = None;
        let mut x = run.begin_x - 1;
        while x <= run.end_x + 1 {
            if !self.visited.get(x, row) && self.raster.cut_at(x, row, self.vertical) {
                let candidate = self.grow_run(x, row);
                match kept {
                    None => kept = Some(candidate),
                    Some(current) if candidate.length() > current.length() => {
                        self.unmark_run(&current);
                        kept = Some(candidate);
                    }
                    Some(_) => self.unmark_run(&candidate),
                }
                x = candidate.end_x + 1;
            } else {
                x += 1;
            }
        }
        kept
    }

    fn unmark_run(&mut self, run: &HorizontalRun) {
        for x in run.begin_x..=run.end_x {
            self.visited.set(x, run.row, false);
        }
    }
}
