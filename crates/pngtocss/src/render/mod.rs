//! Text output for extracted gradients.
//!
//! Two targets, both keyed by a class name derived from the input file:
//! - [`css`]: legacy WebKit and standard `linear-gradient` declarations
//! - [`yui`]: a YUI3 `Y.Graphic` rect with a linear fill

pub mod css;
pub mod yui;

use std::fmt;
use std::path::Path;

use pngtocss_core::{Color, Direction, Gradient};

/// Which snippets to print for each file.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutputFormat {
    Css,
    Yui,
    All,
}

/// Renders every snippet selected by `format`.
pub fn render(class: &str, gradient: &Gradient, format: OutputFormat) -> String {
    match format {
        OutputFormat::Css => css::Css::new(class, gradient).to_string(),
        OutputFormat::Yui => yui::Yui::new(class, gradient).to_string(),
        OutputFormat::All => format!("{}{}", css::Css::new(class, gradient), yui::Yui::new(class, gradient)),
    }
}

/// File basename up to its first `.` (`"img/sky.grad.png"` → `"sky"`).
pub fn class_name(path: &Path) -> String {
    let base = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    match base.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => base.to_string(),
    }
}

/// `#rrggbb` for opaque colors, `rgba(r, g, b, a)` otherwise.
pub struct CssColor(pub Color);

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        if c.is_opaque() {
            fmt::Display::fmt(&Hex(c), f)
        } else {
            write!(f, "rgba({}, {}, {}, {:.2})", c.r, c.g, c.b, alpha_fraction(c))
        }
    }
}

/// `#rrggbb`, ignoring alpha.
pub struct Hex(pub Color);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

#[inline]
pub fn alpha_fraction(c: Color) -> f32 {
    f32::from(c.a) / 255.0
}

pub fn webkit_keyword(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Top => "top",
        Direction::TopLeft => "-45deg",
        Direction::TopRight => "45deg",
    }
}

pub fn w3c_keyword(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "to right",
        Direction::Top => "to bottom",
        Direction::TopLeft => "135deg",
        Direction::TopRight => "45deg",
    }
}

/// Fill rotation in degrees for YUI3 graphics.
pub fn yui_rotation(direction: Direction) -> u16 {
    match direction {
        Direction::Left => 0,
        Direction::Top => 90,
        Direction::TopLeft => 45,
        Direction::TopRight => 135,
    }
}
