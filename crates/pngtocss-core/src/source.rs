use crate::color::Color;

/// Random-access pixel provider, normally backed by a decoded image.
///
/// `color_at` is only ever called with `x < width()` and `y < height()`.
/// Implementations are free to panic outside that range.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn color_at(&self, x: u32, y: u32) -> Color;
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Color {
        (**self).color_at(x, y)
    }
}

/// Owned row-major pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Wraps `pixels` (row-major). Returns `None` if the length does not match
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Which line of the image a gradient is sampled along.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    /// Row 0, varying `x`.
    Row,
    /// Column 0, varying `y`.
    Column,
}

/// One-dimensional view `P(0..len)` over row 0 or column 0 of a source.
pub struct AxisLine<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    axis: Axis,
}

impl<'a, S: PixelSource + ?Sized> AxisLine<'a, S> {
    pub fn new(source: &'a S, axis: Axis) -> Self {
        Self { source, axis }
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn len(&self) -> u32 {
        match self.axis {
            Axis::Row => self.source.width(),
            Axis::Column => self.source.height(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, i: u32) -> Color {
        match self.axis {
            Axis::Row => self.source.color_at(i, 0),
            Axis::Column => self.source.color_at(0, i),
        }
    }

    /// True midpoint color of the window `[lo, hi]`.
    ///
    /// An even span has a middle pixel; an odd span averages the two pixels
    /// straddling the center.
    pub fn midpoint(&self, lo: u32, hi: u32) -> Color {
        debug_assert!(lo <= hi);
        let center = lo + (hi - lo) / 2;
        if (hi - lo) % 2 == 0 {
            self.get(center)
        } else {
            self.get(center).average(self.get(center + 1))
        }
    }
}
