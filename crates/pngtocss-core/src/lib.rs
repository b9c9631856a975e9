//! Color-stop extraction for bitmaps that contain a linear gradient.
//!
//! Given anything that can answer "what color is pixel (x, y)", this crate
//! decides which way the gradient runs and finds the smallest ordered set of
//! stops whose piecewise-linear interpolation reproduces the sampled pixels
//! within a per-channel tolerance.
//!
//! It never decodes image bytes and never formats output; both are left to the
//! caller.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Color`, `Tolerance` (equality and averaging rules) |
//! | [`source`] | `PixelSource`, `PixelGrid`, `AxisLine` |
//! | [`direction`] | `Direction`, `Corners`, `detect` |
//! | [`stops`] | `StopSearch`, `find_stops` |
//! | [`gradient`] | `Gradient`, `ColorStop` |
//! | [`config`] | `ExtractOptions` |
//! | [`error`] | `ExtractError` |
//!
//! # Quick start
//!
//! ```rust
//! use pngtocss_core::{extract, Color, Direction, ExtractOptions, PixelGrid};
//!
//! let image = PixelGrid::from_fn(256, 1, |x, _| Color::rgb(x as u8, 0, 0));
//! let gradient = extract(&image, &ExtractOptions::default()).unwrap();
//! assert_eq!(gradient.direction(), Direction::Left);
//! assert_eq!(gradient.stops().len(), 2);
//! ```

pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod gradient;
pub mod source;
pub mod stops;

pub use color::{Color, Tolerance};
pub use config::ExtractOptions;
pub use direction::{Corners, Detection, Direction, detect};
pub use error::ExtractError;
pub use gradient::{ColorStop, Gradient};
pub use source::{Axis, AxisLine, PixelGrid, PixelSource};
pub use stops::{SearchStep, StopSearch, find_stops};

/// Runs the full pipeline on one image: corner detection, then the stop
/// search along the detected axis.
///
/// Diagonal gradients always come back with exactly two stops.
pub fn extract<S: PixelSource + ?Sized>(
    source: &S,
    options: &ExtractOptions,
) -> Result<Gradient, ExtractError> {
    if source.width() == 0 || source.height() == 0 {
        return Err(ExtractError::UnsupportedGradient { reason: "image has no pixels" });
    }

    let detection = detect(&Corners::sample(source), options.tolerance);

    let stops = match detection.direction.axis() {
        None => vec![ColorStop::implicit(detection.start), ColorStop::implicit(detection.end)],
        Some(axis) => {
            let line = AxisLine::new(source, axis);
            let (start, end) = if detection.fallback {
                (detection.start, detection.end)
            } else {
                (line.get(0), line.get(line.len() - 1))
            };
            find_stops(&line, start, end, options.tolerance)
        }
    };

    Gradient::new(detection.direction, stops)
}

#[cfg(test)]
mod extract_tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn run(grid: &PixelGrid) -> Gradient {
        extract(grid, &ExtractOptions::default()).unwrap()
    }

    fn shade(v: u32) -> Color {
        Color::rgb((v * 7 % 256) as u8, (v * 3 % 256) as u8, 40)
    }

    #[test]
    fn horizontal_red_ramp() {
        let g = run(&PixelGrid::from_fn(256, 1, |x, _| Color::rgb(x as u8, 0, 0)));
        assert_eq!(g.direction(), Direction::Left);
        assert_eq!(
            g.stops(),
            &[ColorStop::implicit(Color::rgb(0, 0, 0)), ColorStop::implicit(Color::rgb(255, 0, 0))]
        );
    }

    #[test]
    fn vertical_hard_step() {
        let g = run(&PixelGrid::from_fn(1, 100, |_, y| if y < 50 { RED } else { BLUE }));
        assert_eq!(g.direction(), Direction::Top);
        assert!(g.stops().len() >= 3);
        assert_eq!(g.first().color, RED);
        assert_eq!(g.last().color, BLUE);
        assert!(g.interior().iter().any(|s| matches!(s.position, Some(49 | 50))));
    }

    #[test]
    fn vertical_ramp_samples_column_zero() {
        let g = run(&PixelGrid::from_fn(8, 64, |_, y| Color::rgb(0, (y * 4) as u8, 0)));
        assert_eq!(g.direction(), Direction::Top);
        assert_eq!(g.last().color, Color::rgb(0, 252, 0));
        assert!(g.interior().is_empty());
    }

    #[test]
    fn top_left_diagonal_has_two_stops() {
        for n in [2, 3, 10, 64] {
            let g = run(&PixelGrid::from_fn(n, n, |x, y| shade(x + y)));
            assert_eq!(g.direction(), Direction::TopLeft, "size {n}");
            assert_eq!(g.stops(), &[ColorStop::implicit(shade(0)), ColorStop::implicit(shade(2 * n - 2))]);
        }
    }

    #[test]
    fn top_right_diagonal_has_two_stops() {
        for n in [2, 3, 10, 64] {
            let g = run(&PixelGrid::from_fn(n, n, |x, y| shade(x + n - 1 - y)));
            assert_eq!(g.direction(), Direction::TopRight, "size {n}");
            assert_eq!(g.first().color, shade(2 * n - 2));
            assert_eq!(g.last().color, shade(0));
            assert_eq!(g.stops().len(), 2);
        }
    }

    #[test]
    fn unmatched_corners_fall_back_to_vertical() {
        let g = run(&PixelGrid::from_fn(3, 3, |x, y| Color::rgb((x * 40) as u8, (y * 40) as u8, (x * y * 40) as u8)));
        assert_eq!(g.direction(), Direction::Top);
        assert_eq!(g.first().color, Color::rgb(0, 0, 0));
        assert_eq!(g.last().color, Color::rgb(80, 80, 160));
    }

    #[test]
    fn transparent_top_row_counts_as_uniform() {
        let g = run(&PixelGrid::from_fn(4, 10, |x, y| {
            if y == 0 { Color::rgba((x * 60) as u8, 9, 200, 0) } else { BLUE }
        }));
        assert_eq!(g.direction(), Direction::Top);
    }

    #[test]
    fn single_pixel_image() {
        let g = run(&PixelGrid::from_fn(1, 1, |_, _| RED));
        assert_eq!(g.stops(), &[ColorStop::implicit(RED), ColorStop::implicit(RED)]);
    }

    #[test]
    fn empty_image_is_unsupported() {
        let grid = PixelGrid::new(0, 4, Vec::new()).unwrap();
        let err = extract(&grid, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedGradient { .. }));
    }

    #[test]
    fn tolerance_option_is_honored() {
        // Top corners differ by 3: equal only with a looser tolerance.
        let grid = PixelGrid::from_fn(5, 5, |x, _| Color::rgb(if x == 4 { 3 } else { 0 }, 0, 0));
        let strict = extract(&grid, &ExtractOptions::default()).unwrap();
        let loose = extract(&grid, &ExtractOptions::default().with_tolerance(3)).unwrap();
        assert_eq!(strict.direction(), Direction::Left);
        assert_eq!(loose.direction(), Direction::Top);
    }
}
