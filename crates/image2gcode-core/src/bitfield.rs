//! Visited-pixel tracking for the region tracer.

/// One bit per scan-space pixel, plus a running count of set bits.
///
/// Out-of-range coordinates always read as visited, which makes the bitset
/// double as a boundary sentinel: the tracer never has to range-check
/// before probing a neighbor. The count only moves on real transitions, so
/// `count() == total()` is the terminal state of a trace.
#[derive(Debug)]
pub struct VisitedBits {
    width: i32,
    height: i32,
    words: Vec<u64>,
    words_per_row: usize,
    count: u64,
}

impl VisitedBits {
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize).div_ceil(64);
        Self {
            width: width as i32,
            height: height as i32,
            words: vec![0; words_per_row * height as usize],
            words_per_row,
            count: 0,
        }
    }

    fn slot(&self, x: i32, y: i32) -> (usize, u64) {
        let index = y as usize * self.words_per_row + x as usize / 64;
        (index, 1u64 << (x as usize % 64))
    }

    /// Returns whether the pixel is visited; out-of-bounds reads as visited.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return true;
        }
        let (index, mask) = self.slot(x, y);
        self.words[index] & mask != 0
    }

    /// Sets or clears the bit, returning its prior value. Out-of-bounds is
    /// a no-op that reports visited.
    pub fn set(&mut self, x: i32, y: i32, visited: bool) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return true;
        }
        let (index, mask) = self.slot(x, y);
        let prior = self.words[index] & mask != 0;
        if visited && !prior {
            self.words[index] |= mask;
            self.count += 1;
        } else if !visited && prior {
            self.words[index] &= !mask;
            self.count -= 1;
        }
        prior
    }

    /// Number of visited pixels.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total number of pixels tracked.
    pub fn total(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
