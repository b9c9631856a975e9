use crate::color::Color;
use crate::direction::Direction;
use crate::error::ExtractError;

/// A single gradient stop.
///
/// `position` is a percentage in `(0, 100)` for interior stops and `None` for
/// the first and last stop, whose positions are implicitly 0% and 100%.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    pub position: Option<u8>,
}

impl ColorStop {
    #[inline]
    pub const fn implicit(color: Color) -> Self {
        Self { color, position: None }
    }

    #[inline]
    pub const fn at(color: Color, position: u8) -> Self {
        Self { color, position: Some(position) }
    }
}

/// Extracted linear gradient: a direction plus stops ordered along the axis.
///
/// Invariants:
/// - at least two stops;
/// - first and last stops have no explicit position;
/// - interior positions are strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    direction: Direction,
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(direction: Direction, stops: Vec<ColorStop>) -> Result<Self, ExtractError> {
        if stops.len() < 2 {
            return Err(ExtractError::UnsupportedGradient { reason: "fewer than two color stops" });
        }
        if stops[0].position.is_some() || stops[stops.len() - 1].position.is_some() {
            return Err(ExtractError::UnsupportedGradient { reason: "end stops carry a position" });
        }
        if !Self::interior_is_valid(&stops[1..stops.len() - 1]) {
            return Err(ExtractError::UnsupportedGradient { reason: "interior stop positions out of order" });
        }
        Ok(Self { direction, stops })
    }

    /// Interior stops need a position in `(0, 100)`, strictly increasing.
    fn interior_is_valid(interior: &[ColorStop]) -> bool {
        let mut previous = 0u8;
        for stop in interior {
            match stop.position {
                Some(p) if p > previous && p < 100 => previous = p,
                _ => return false,
            }
        }
        true
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn first(&self) -> ColorStop {
        self.stops[0]
    }

    #[inline]
    pub fn last(&self) -> ColorStop {
        self.stops[self.stops.len() - 1]
    }

    /// Stops strictly between the first and last.
    #[inline]
    pub fn interior(&self) -> &[ColorStop] {
        &self.stops[1..self.stops.len() - 1]
    }

    pub fn is_opaque(&self) -> bool {
        self.stops.iter().all(|s| s.color.is_opaque())
    }
}
