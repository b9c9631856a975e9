use std::fmt;

use pngtocss_core::{ColorStop, Gradient};

use super::{CssColor, w3c_keyword, webkit_keyword};

/// CSS rule with a legacy WebKit and a standard `linear-gradient` background.
pub struct Css<'a> {
    class: &'a str,
    gradient: &'a Gradient,
}

impl<'a> Css<'a> {
    pub fn new(class: &'a str, gradient: &'a Gradient) -> Self {
        Self { class, gradient }
    }
}

/// Comma-separated `color[ pos%]` list.
pub struct StopList<'a>(pub &'a [ColorStop]);

impl fmt::Display for StopList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", CssColor(stop.color))?;
            if let Some(pos) = stop.position {
                write!(f, " {}%", pos)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Css<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = self.gradient.direction();
        let stops = StopList(self.gradient.stops());
        writeln!(f, ".{} {{", self.class)?;
        writeln!(f, "\tbackground-image: -webkit-linear-gradient({}, {});", webkit_keyword(direction), stops)?;
        writeln!(f, "\tbackground-image: linear-gradient({}, {});", w3c_keyword(direction), stops)?;
        writeln!(f, "}}")
    }
}
