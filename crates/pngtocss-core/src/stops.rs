//! Adaptive color-stop search along one gradient axis.
//!
//! The axis is decomposed left to right into linear runs. For each run the
//! search grows a probe window exponentially until the window stops being
//! linear, then bisects between the largest known-linear and smallest
//! known-non-linear offsets. The converged edge becomes an interior stop and
//! the search restarts on the remaining suffix.
//!
//! A window `[lo, hi]` is linear when its true midpoint color equals the
//! average of its endpoints within tolerance.

use crate::color::{Color, Tolerance};
use crate::gradient::ColorStop;
use crate::source::{AxisLine, PixelSource};

/// What a single search step did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SearchStep {
    /// Non-linear window with no known-linear floor below it: the floor moves
    /// up by one and a fresh three-pixel probe starts there.
    Widen,
    /// Non-linear window: the ceiling drops to the probe, the probe bisects
    /// toward the floor.
    NarrowDown,
    /// Linear and converged on the last pixel. No stop; the probe steps past
    /// the end.
    AbsorbEnd,
    /// Linear and converged: the run ends here and the search restarts on the
    /// suffix. Carries the emitted stop, or `None` when its percentage was
    /// zero or repeated the previous one.
    Commit(Option<ColorStop>),
    /// Linear at the ceiling: the probe doubles (clamped to the axis end).
    Grow,
    /// Linear below the ceiling: the floor rises to the probe, the probe
    /// bisects toward the ceiling.
    NarrowUp,
}

/// Search state over one axis.
///
/// `search_floor`, `search_ceiling` and `probe` are offsets relative to `base`.
/// Invariant while running: `search_floor <= probe <= search_ceiling`.
pub struct StopSearch<'l, 'a, S: PixelSource + ?Sized> {
    line: &'l AxisLine<'a, S>,
    tolerance: Tolerance,
    len: u32,
    base: u32,
    search_floor: u32,
    search_ceiling: u32,
    probe: u32,
    last_position: Option<u8>,
    interior: Vec<ColorStop>,
}

impl<'l, 'a, S: PixelSource + ?Sized> StopSearch<'l, 'a, S> {
    pub fn new(line: &'l AxisLine<'a, S>, tolerance: Tolerance) -> Self {
        Self {
            line,
            tolerance,
            len: line.len(),
            base: 0,
            search_floor: 0,
            search_ceiling: 2,
            probe: 2,
            last_position: None,
            interior: Vec::new(),
        }
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn search_floor(&self) -> u32 {
        self.search_floor
    }

    #[inline]
    pub fn search_ceiling(&self) -> u32 {
        self.search_ceiling
    }

    #[inline]
    pub fn probe(&self) -> u32 {
        self.probe
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.base + self.probe >= self.len
    }

    /// Interior stops committed so far, in axis order.
    #[inline]
    pub fn interior(&self) -> &[ColorStop] {
        &self.interior
    }

    pub fn into_interior(self) -> Vec<ColorStop> {
        self.interior
    }

    fn is_linear(&self, lo: u32, hi: u32) -> bool {
        let avg = self.line.get(lo).average(self.line.get(hi));
        self.tolerance.equal(avg, self.line.midpoint(lo, hi))
    }

    #[inline]
    fn remaining(&self) -> u32 {
        self.len - self.base - 1
    }

    /// Advances the search by one step. Returns `None` once the probe has
    /// moved past the end of the axis.
    pub fn step(&mut self) -> Option<SearchStep> {
        if self.is_done() {
            return None;
        }

        let edge = self.base + self.probe;
        let step = if !self.is_linear(self.base, edge) {
            if self.search_floor == self.search_ceiling {
                self.search_floor += 1;
                self.probe = self.search_floor + 2;
                self.search_ceiling = self.probe;
                SearchStep::Widen
            } else {
                self.search_ceiling = self.probe;
                self.probe = (self.probe + self.search_floor) / 2;
                SearchStep::NarrowDown
            }
        } else if self.search_ceiling.saturating_sub(self.probe) <= 1
            && self.probe.saturating_sub(self.search_floor) <= 1
        {
            if edge >= self.len - 1 {
                self.probe += 1;
                SearchStep::AbsorbEnd
            } else {
                let stop = self.commit(edge);
                self.base += self.probe.max(1);
                self.search_floor = 0;
                self.probe = self.remaining();
                self.search_ceiling = self.probe;
                SearchStep::Commit(stop)
            }
        } else {
            self.search_floor = self.probe;
            if self.probe == self.search_ceiling {
                self.probe = (self.probe * 2).min(self.remaining());
                self.search_ceiling = self.probe;
                SearchStep::Grow
            } else {
                self.probe = (self.probe + self.search_ceiling) / 2;
                SearchStep::NarrowUp
            }
        };

        log::trace!(
            "{:?} base={} floor={} ceiling={} probe={}",
            step,
            self.base,
            self.search_floor,
            self.search_ceiling,
            self.probe
        );
        Some(step)
    }

    fn commit(&mut self, edge: u32) -> Option<ColorStop> {
        let position = (u64::from(edge) * 100 / u64::from(self.len)) as u8;
        if position == 0 || self.last_position == Some(position) {
            return None;
        }
        let stop = ColorStop::at(self.line.get(edge), position);
        self.last_position = Some(position);
        self.interior.push(stop);
        Some(stop)
    }
}

impl<S: PixelSource + ?Sized> Iterator for StopSearch<'_, '_, S> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        self.step()
    }
}

/// Returns `true` when the whole axis can be described by its two endpoints.
///
/// The midpoint test is applied to the full axis and to each half, so a hard
/// step sitting exactly on the center is not mistaken for a ramp.
fn is_single_ramp<S: PixelSource + ?Sized>(line: &AxisLine<'_, S>, tolerance: Tolerance) -> bool {
    let last = line.len() - 1;
    let half = last / 2;
    [(0, last), (0, half), (half, last)].into_iter().all(|(lo, hi)| {
        let avg = line.get(lo).average(line.get(hi));
        tolerance.equal(line.midpoint(lo, hi), avg)
    })
}

/// Finds the full stop list for one axis.
///
/// `start` and `end` become the first and last stops (implicit 0% and 100%).
/// Axes shorter than three pixels, and axes that are already a single linear
/// ramp, get exactly those two stops.
pub fn find_stops<S: PixelSource + ?Sized>(
    line: &AxisLine<'_, S>,
    start: Color,
    end: Color,
    tolerance: Tolerance,
) -> Vec<ColorStop> {
    let len = line.len();
    if len < 3 || is_single_ramp(line, tolerance) {
        log::debug!("axis of {} pixels is a single ramp", len);
        return vec![ColorStop::implicit(start), ColorStop::implicit(end)];
    }

    let mut search = StopSearch::new(line, tolerance);
    let steps = search.by_ref().count();
    let interior = search.into_interior();
    log::debug!("found {} interior stops in {} steps over {} pixels", interior.len(), steps, len);

    let mut stops = Vec::with_capacity(interior.len() + 2);
    stops.push(ColorStop::implicit(start));
    stops.extend(interior);
    stops.push(ColorStop::implicit(end));
    stops
}
