use std::fmt;

use pngtocss_core::Gradient;

use super::{Hex, alpha_fraction, yui_rotation};

/// YUI3 `Y.Graphic` snippet drawing a 200×200 rect with the gradient fill.
pub struct Yui<'a> {
    class: &'a str,
    gradient: &'a Gradient,
}

impl<'a> Yui<'a> {
    pub fn new(class: &'a str, gradient: &'a Gradient) -> Self {
        Self { class, gradient }
    }

    fn write_stops(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops = self.gradient.stops();
        for (i, stop) in stops.iter().enumerate() {
            write!(f, "\t\t\t{{ color: \"{}\"", Hex(stop.color))?;
            if !stop.color.is_opaque() {
                write!(f, ", opacity: {:.2}", alpha_fraction(stop.color))?;
            }
            if let Some(pos) = stop.position {
                write!(f, ", offset: {:.2}", f32::from(pos) / 100.0)?;
            }
            f.write_str(" }")?;
            if i + 1 < stops.len() {
                f.write_str(",")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for Yui<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.class;
        writeln!(f, "graphics = graphics || {{}};")?;
        writeln!(f, "graphics[\"{name}\"] = new Y.Graphic({{ render: '#{name}' }});")?;
        writeln!(f, "graphics[\"{name}\"].addShape({{")?;
        writeln!(f, "\ttype: \"rect\",")?;
        writeln!(f, "\theight: 200, width: 200,")?;
        writeln!(f, "\tfill: {{")?;
        writeln!(f, "\t\ttype: \"linear\",")?;
        writeln!(f, "\t\tstops: [")?;
        self.write_stops(f)?;
        writeln!(f, "\t\t],")?;
        writeln!(f, "\t\trotation: {}", yui_rotation(self.gradient.direction()))?;
        writeln!(f, "\t}}")?;
        writeln!(f, "}});")
    }
}
