use crate::color::Tolerance;

/// Extraction settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Per-channel slack used for every color comparison.
    pub tolerance: Tolerance,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { tolerance: Tolerance::DEFAULT }
    }
}

impl ExtractOptions {
    pub fn with_tolerance(mut self, tolerance: u16) -> Self {
        self.tolerance = Tolerance(tolerance);
        self
    }
}
