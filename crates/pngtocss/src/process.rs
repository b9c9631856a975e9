use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pngtocss_core::{ExtractOptions, PixelSource};

use crate::decode::PngImage;
use crate::error::FileError;
use crate::render::{self, OutputFormat};

/// Decodes one PNG, extracts its gradient and renders the selected snippets.
///
/// The decoded pixels are dropped as soon as the gradient is known.
pub fn process_file(path: &Path, options: &ExtractOptions, format: OutputFormat) -> Result<String, FileError> {
    let gradient = {
        let image = PngImage::open(path)?;
        log::debug!("{}: decoded {}x{}", path.display(), image.width(), image.height());
        pngtocss_core::extract(&image, options)?
    };
    log::debug!(
        "{}: {:?} with {} stops",
        path.display(),
        gradient.direction(),
        gradient.stops().len()
    );
    Ok(render::render(&render::class_name(path), &gradient, format))
}

/// Runs [`process_file`] over `files` in order and returns how many failed.
///
/// Snippets go to `out`, one `Error with` line per failed path goes to
/// `errors`. A failing path never stops the ones after it; only a write
/// error on either stream aborts the batch.
pub fn process_all<O: Write, E: Write>(
    files: &[PathBuf],
    options: &ExtractOptions,
    format: OutputFormat,
    out: &mut O,
    errors: &mut E,
) -> io::Result<usize> {
    let mut failures = 0usize;

    for path in files {
        match process_file(path, options, format) {
            Ok(text) => out.write_all(text.as_bytes())?,
            Err(err) => {
                failures += 1;
                log::debug!("{}: {:?}", path.display(), err);
                writeln!(errors, "Error with ``{}''; {}", path.display(), err)?;
            }
        }
    }

    if failures > 0 {
        log::info!("{} of {} files failed", failures, files.len());
    }
    Ok(failures)
}
