/// Straight-alpha RGBA color sampled from a bitmap.
///
/// Channels hold `0`–`255` values but are stored as `u16` so that two channels
/// can be summed for averaging without overflow.
///
/// Invariant:
/// - a pixel with `a == 0` carries no color information; its `r`/`g`/`b` are
///   whatever the decoder left there and must not be compared or blended.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r: r as u16, g: g as u16, b: b as u16, a: a as u16 }
    }

    /// Opaque color (`a == 255`).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a >= 255
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Channel-wise mean of two colors, rounding down.
    ///
    /// A fully transparent input borrows the other input's `r`/`g`/`b` before
    /// averaging, so transparent edges never drag the result toward black.
    /// Alpha is averaged as-is.
    pub fn average(self, other: Color) -> Color {
        let (a, b) = match (self.is_transparent(), other.is_transparent()) {
            (true, false) => (self.with_rgb_of(other), other),
            (false, true) => (self, other.with_rgb_of(self)),
            _ => (self, other),
        };
        Color {
            r: (a.r + b.r) / 2,
            g: (a.g + b.g) / 2,
            b: (a.b + b.b) / 2,
            a: (a.a + b.a) / 2,
        }
    }

    #[inline]
    fn with_rgb_of(self, other: Color) -> Color {
        Color { r: other.r, g: other.g, b: other.b, a: self.a }
    }
}

/// Maximum per-channel difference at which two colors still count as equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tolerance(pub u16);

impl Tolerance {
    /// 2 out of 255.
    pub const DEFAULT: Tolerance = Tolerance(2);

    /// Tolerance-based color equality.
    ///
    /// Two fully transparent pixels are always equal, whatever their payload.
    pub fn equal(self, a: Color, b: Color) -> bool {
        if a.is_transparent() && b.is_transparent() {
            return true;
        }
        a.r.abs_diff(b.r) <= self.0
            && a.g.abs_diff(b.g) <= self.0
            && a.b.abs_diff(b.b) <= self.0
            && a.a.abs_diff(b.a) <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    // ── equal ─────────────────────────────────────────────────────────────

    #[test]
    fn equal_identical() {
        let c = Color::rgb(10, 20, 30);
        assert!(TOL.equal(c, c));
    }

    #[test]
    fn equal_within_tolerance() {
        assert!(TOL.equal(Color::rgb(10, 20, 30), Color::rgb(12, 18, 32)));
    }

    #[test]
    fn equal_outside_tolerance_on_one_channel() {
        assert!(!TOL.equal(Color::rgb(10, 20, 30), Color::rgb(10, 20, 33)));
        assert!(!TOL.equal(Color::rgb(0, 0, 0), Color::rgb(3, 0, 0)));
    }

    #[test]
    fn equal_checks_alpha() {
        assert!(!TOL.equal(Color::rgba(0, 0, 0, 255), Color::rgba(0, 0, 0, 128)));
    }

    #[test]
    fn equal_both_transparent_ignores_payload() {
        let a = Color::rgba(255, 0, 12, 0);
        let b = Color::rgba(0, 200, 99, 0);
        assert!(TOL.equal(a, b));
    }

    #[test]
    fn equal_one_transparent_is_not_free() {
        let a = Color::rgba(10, 10, 10, 0);
        let b = Color::rgba(10, 10, 10, 255);
        assert!(!TOL.equal(a, b));
    }

    #[test]
    fn equal_zero_tolerance_is_exact() {
        let t = Tolerance(0);
        assert!(t.equal(Color::rgb(1, 2, 3), Color::rgb(1, 2, 3)));
        assert!(!t.equal(Color::rgb(1, 2, 3), Color::rgb(1, 2, 4)));
    }

    // ── average ───────────────────────────────────────────────────────────

    #[test]
    fn average_rounds_down() {
        let avg = Color::rgb(0, 10, 255).average(Color::rgb(3, 11, 254));
        assert_eq!(avg, Color::rgb(1, 10, 254));
    }

    #[test]
    fn average_does_not_overflow() {
        let avg = Color::rgb(255, 255, 255).average(Color::rgb(255, 255, 255));
        assert_eq!(avg, Color::rgb(255, 255, 255));
    }

    #[test]
    fn average_transparent_left_takes_opaque_rgb() {
        let clear = Color::rgba(0, 0, 0, 0);
        let red = Color::rgba(200, 10, 20, 255);
        let avg = clear.average(red);
        assert_eq!((avg.r, avg.g, avg.b), (200, 10, 20));
        assert_eq!(avg.a, 127);
    }

    #[test]
    fn average_transparent_right_takes_opaque_rgb() {
        let blue = Color::rgba(0, 0, 250, 255);
        let clear = Color::rgba(99, 99, 99, 0);
        let avg = blue.average(clear);
        assert_eq!((avg.r, avg.g, avg.b), (0, 0, 250));
    }

    #[test]
    fn average_both_transparent_stays_transparent() {
        let avg = Color::rgba(10, 20, 30, 0).average(Color::rgba(30, 20, 10, 0));
        assert!(avg.is_transparent());
    }
}
