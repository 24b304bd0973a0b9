//! Abstract motion primitives emitted by the tracing engines.
//!
//! The core never formats text; it produces an ordered sequence of
//! primitives that a writer (e.g. the G-code encoder) turns into
//! controller instructions.

/// One motion-control primitive with physical coordinates in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Reposition the head. Rapid moves do not cut; feed moves obey the
    /// last `SetFeedRate`.
    Move { x: f64, y: f64, rapid: bool },
    /// Start engraving (laser/spindle on).
    EngraveOn,
    /// Stop engraving.
    EngraveOff,
    /// Change the feed rate for subsequent feed moves.
    SetFeedRate { rate: f64 },
}

/// An ordered toolpath: the full output of one conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toolpath {
    pub motions: Vec<Motion>,
}

impl Toolpath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, motion: Motion) {
        self.motions.push(motion);
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Motion> {
        self.motions.iter()
    }
}

/// Cut and move rates closer than this are treated as one rate.
const FEED_RATE_EPSILON: f64 = 0.001;

/// Accumulates motion primitives, arbitrating feed-rate changes.
///
/// When cut and move rates are both configured and effectively equal, a
/// single rate change is emitted up front and travels become feed moves.
/// Otherwise each travel is rapid (or preceded by the move rate when one
/// is configured) and each engrave-on restores the cut rate.
#[derive(Debug)]
pub struct ToolpathBuilder {
    toolpath: Toolpath,
    cut_feed_rate: Option<f64>,
    move_feed_rate: Option<f64>,
    uniform_rate: bool,
}

impl ToolpathBuilder {
    pub fn new(cut_feed_rate: Option<f64>, move_feed_rate: Option<f64>) -> Self {
        let uniform_rate = matches!(
            (cut_feed_rate, move_feed_rate),
            (Some(cut), Some(mv)) if (cut - mv).abs() <= FEED_RATE_EPSILON
        );
        let mut toolpath = Toolpath::new();
        if uniform_rate {
            toolpath.push(Motion::SetFeedRate {
                rate: cut_feed_rate.unwrap_or_default(),
            });
        }
        Self {
            toolpath,
            cut_feed_rate,
            move_feed_rate,
            uniform_rate,
        }
    }

    /// Non-cutting repositioning move to the start of the next run.
    pub fn travel_to(&mut self, x: f64, y: f64) {
        match self.move_feed_rate {
            Some(rate) => {
                if !self.uniform_rate {
                    self.toolpath.push(Motion::SetFeedRate { rate });
                }
                self.toolpath.push(Motion::Move { x, y, rapid: false });
            }
            None => self.toolpath.push(Motion::Move { x, y, rapid: true }),
        }
    }

    pub fn engrave_on(&mut self) {
        self.toolpath.push(Motion::EngraveOn);
        if !self.uniform_rate {
            if let Some(rate) = self.cut_feed_rate {
                self.toolpath.push(Motion::SetFeedRate { rate });
            }
        }
    }

    /// Cutting move to the end of the current run.
    pub fn cut_to(&mut self, x: f64, y: f64) {
        self.toolpath.push(Motion::Move { x, y, rapid: false });
    }

    pub fn engrave_off(&mut self) {
        self.toolpath.push(Motion::EngraveOff);
    }

    pub fn finish(self) -> Toolpath {
        self.toolpath
    }
}
