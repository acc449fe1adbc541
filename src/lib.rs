/*!
# word-splitter

Split a text file into a sequence of smaller files, each holding a fixed number
of words.

The text is tokenized on runs of whitespace, tokens are grouped until the
desired number of words is reached, and each group is written to its own file
in an output directory, named `<stem>_split<NN><ext>` with a zero-padded index.

## Get Started

### Splitting text in memory

```rust
use word_splitter::{ChunkConfig, WordSplitter};

let splitter = WordSplitter::new(ChunkConfig::new(3)?);
let chunks = splitter.chunks("The quick brown fox jumps over the lazy dog");

assert_eq!(vec!["The quick brown", "fox jumps over", "the lazy dog", ""], chunks);
# Ok::<(), word_splitter::ChunkConfigError>(())
```

Note the empty final chunk: whatever remains after the last full chunk is
always emitted, even if nothing remains. Words are rejoined with a single
space, so line breaks and runs of spaces in the input are not preserved.

### Splitting a file

```rust,no_run
use word_splitter::{split_file, ChunkConfig, LogReporter, WordSplitter};

let splitter = WordSplitter::new(ChunkConfig::new(1000)?);
let summary = split_file("text-french.txt", "parts", &splitter, &LogReporter)?;

println!("wrote {} files", summary.file_count());
# Ok::<(), Box<dyn std::error::Error>>(())
```

### Preserving sentences

With [`ChunkConfig::with_preserve_sentences`], a full chunk is cut after the
latest word ending in `.`, `!` or `?` among its last few words, and the words
after it move on to the next chunk. Chunks then hold up to the configured
number of words instead of exactly that many.

```rust
use word_splitter::{ChunkConfig, WordSplitter};

let config = ChunkConfig::new(4)?
    .with_preserve_sentences(true)
    .with_sentence_window(2)?;
let splitter = WordSplitter::new(config);

assert_eq!(
    vec!["One two three.", "Four five six."],
    splitter.chunks("One two three. Four five six.")
);
# Ok::<(), word_splitter::ChunkConfigError>(())
```
*/

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

mod config;
mod output;
mod report;
mod splitter;
mod words;

pub use config::{ChunkConfig, ChunkConfigError};
pub use output::{chunk_file_name, pad_width, write_chunks};
pub use report::{LogReporter, NoopReporter, Reporter, SplitSummary};
pub use splitter::{Chunk, WordSplitter};
pub use words::{ends_sentence, is_word, tokenize};

/// Errors that can occur while splitting a file.
#[derive(Error, Debug)]
pub enum SplitError {
    /// The chunk configuration was invalid.
    #[error(transparent)]
    Config(#[from] ChunkConfigError),
    /// The input file could not be read as UTF-8 text.
    #[error("Failed to read input file {}", path.display())]
    ReadInput {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A chunk could not be written. Chunks written before it remain on disk.
    #[error("Failed to write chunk file {}", path.display())]
    WriteChunk {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Split the file at `input` into chunks and write each one to `output_dir`,
/// which must already exist.
///
/// The whole file is read into memory first, so nothing is written if it
/// cannot be read. Once all chunks are written the summary is passed to
/// `reporter`.
///
/// # Errors
///
/// Will return [`SplitError::ReadInput`] if the input could not be read, and
/// [`SplitError::WriteChunk`] on the first chunk that could not be written.
pub fn split_file(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    splitter: &WordSplitter,
    reporter: &impl Reporter,
) -> Result<SplitSummary, SplitError> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    let text = fs::read_to_string(input).map_err(|source| SplitError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let chunks = splitter.chunks(&text);
    debug!(
        "Split {} into {} chunks of up to {} words",
        input.display(),
        chunks.len(),
        splitter.config().words_per_chunk()
    );

    let files = write_chunks(&chunks, input, output_dir)?;
    let summary = SplitSummary::new(input.to_path_buf(), output_dir.to_path_buf(), files);
    reporter.report(&summary);
    Ok(summary)
}
