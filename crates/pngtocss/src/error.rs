use std::io;

use pngtocss_core::ExtractError;
use thiserror::Error;

/// Why a single input file produced no output.
///
/// Every variant is reported and skipped; none of them stops the batch.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Could not open file: {0}")]
    Open(#[source] io::Error),

    #[error("File is not a png")]
    NotPng,

    #[error("Problem inside the png decoder: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Unsupported(#[from] ExtractError),
}
