use thiserror::Error;

/// Rejection of a single image by the extractor.
///
/// This is never fatal for a batch: callers report it and move on to the next
/// image.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// No usable direction or stop structure could be derived.
    #[error("Gradient type not supported ({reason})")]
    UnsupportedGradient { reason: &'static str },
}
