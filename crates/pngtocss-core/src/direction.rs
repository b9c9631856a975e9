use crate::color::{Color, Tolerance};
use crate::source::{Axis, PixelSource};

/// Edge or corner a gradient starts from.
///
/// `Top` varies along `y`, `Left` varies along `x`. Diagonals are always
/// described with exactly two stops.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Left,
    Top,
    TopLeft,
    TopRight,
}

impl Direction {
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Direction::TopLeft | Direction::TopRight)
    }

    /// Line sampled by the stop search, if any.
    #[inline]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Direction::Top => Some(Axis::Column),
            Direction::Left => Some(Axis::Row),
            Direction::TopLeft | Direction::TopRight => None,
        }
    }
}

/// The four extreme pixels of an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Corners {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_left: Color,
    pub bottom_right: Color,
}

impl Corners {
    /// Samples the corners of a non-empty source.
    pub fn sample<S: PixelSource + ?Sized>(source: &S) -> Self {
        let (r, b) = (source.width() - 1, source.height() - 1);
        Self {
            top_left: source.color_at(0, 0),
            top_right: source.color_at(r, 0),
            bottom_left: source.color_at(0, b),
            bottom_right: source.color_at(r, b),
        }
    }
}

/// Outcome of direction detection.
///
/// `start` and `end` are the corner colors used for the first and last stops
/// when no search replaces them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Detection {
    pub direction: Direction,
    pub start: Color,
    pub end: Color,
    /// No corner pattern matched; `direction` is the vertical default.
    pub fallback: bool,
}

/// Picks a gradient direction from the corner colors. First match wins.
///
/// When no pattern matches the result falls back to `Top` instead of failing,
/// so every image still yields at least two stops.
pub fn detect(corners: &Corners, tolerance: Tolerance) -> Detection {
    let Corners { top_left: tl, top_right: tr, bottom_left: bl, bottom_right: br } = *corners;
    let eq = |a, b| tolerance.equal(a, b);

    let (direction, start, end, fallback) = if eq(tl, tr) {
        (Direction::Top, tl, br, false)
    } else if eq(tl, bl) {
        (Direction::Left, tl, br, false)
    } else if eq(tr, bl) && !eq(tl, br) {
        (Direction::TopLeft, tl, br, false)
    } else if eq(tl, br) && !eq(tr, bl) {
        (Direction::TopRight, tr, bl, false)
    } else {
        (Direction::Top, tl, br, true)
    };

    if fallback {
        log::warn!("no corner pattern matched; assuming a vertical gradient");
    }
    log::debug!("detected direction {:?}", direction);

    Detection { direction, start, end, fallback }
}
