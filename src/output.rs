/*!
Writing chunks to numbered files.
*/

use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::SplitError;

/// Number of digits used to zero-pad chunk indices in output file names.
///
/// This is the number of decimal digits in `chunk_count` itself, not in the
/// largest index, so a count that is an exact power of ten gets one more digit
/// than strictly needed (10 chunks are numbered `00` through `09`).
///
/// ```
/// use word_splitter::pad_width;
///
/// assert_eq!(pad_width(1), 1);
/// assert_eq!(pad_width(10), 2);
/// assert_eq!(pad_width(16), 2);
/// assert_eq!(pad_width(100), 3);
/// ```
#[must_use]
pub fn pad_width(chunk_count: usize) -> usize {
    chunk_count
        .checked_ilog10()
        .map_or(1, |digits| digits as usize + 1)
}

/// Name of the output file for the chunk at `index`:
/// `<stem>_split<index><extension>`, with the index zero-padded to `width`
/// digits. `extension` includes its leading dot, or is empty.
///
/// ```
/// use std::ffi::OsStr;
/// use word_splitter::chunk_file_name;
///
/// let name = chunk_file_name(OsStr::new("text-french"), OsStr::new(".txt"), 3, 2);
/// assert_eq!(name, "text-french_split03.txt");
/// ```
#[must_use]
pub fn chunk_file_name(stem: &OsStr, extension: &OsStr, index: usize, width: usize) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_split{index:0width$}"));
    name.push(extension);
    name
}

/// Splits the file name of `input` into its stem and its extension, the
/// latter with a leading dot. A name without extension has an empty one, and
/// a leading dot does not start an extension.
fn stem_and_extension(input: &Path) -> (OsString, OsString) {
    let stem = input.file_stem().unwrap_or_default().to_os_string();
    let extension = input.extension().map_or_else(OsString::new, |ext| {
        let mut dotted = OsString::from(".");
        dotted.push(ext);
        dotted
    });
    (stem, extension)
}

/// Write each chunk to its own file in `output_dir`, named after `input`.
///
/// The output directory must already exist. Files are written in order and
/// the first failure aborts the remaining writes; files written before it are
/// left in place.
///
/// Returns the paths of the written files, in chunk order.
///
/// # Errors
///
/// Will return [`SplitError::WriteChunk`] if a file could not be written.
pub fn write_chunks<T>(
    chunks: &[T],
    input: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, SplitError>
where
    T: AsRef<str>,
{
    let (stem, extension) = stem_and_extension(input);
    let width = pad_width(chunks.len());

    let mut written = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let path = output_dir.join(chunk_file_name(&stem, &extension, index, width));
        if let Err(source) = fs::write(&path, chunk.as_ref()) {
            return Err(SplitError::WriteChunk { path, source });
        }
        debug!("Wrote chunk {index} to {}", path.display());
        written.push(path);
    }
    Ok(written)
}
