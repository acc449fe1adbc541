use thiserror::Error;

/// Indicates there was an error with the chunk configuration.
/// The `Display` implementation will provide a human-readable error message to
/// help debug the issue that caused the error.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ChunkConfigError(#[from] ChunkConfigErrorRepr);

/// Private error and free to change across minor version of the crate.
#[derive(Error, Debug)]
enum ChunkConfigErrorRepr {
    #[error("The number of words per chunk must be greater than zero")]
    ZeroWordsPerChunk,
    #[error("The sentence window must be greater than zero")]
    ZeroSentenceWindow,
}

/// Configuration for how chunks should be created.
///
/// ```
/// use word_splitter::ChunkConfig;
///
/// let config = ChunkConfig::new(1000)?
///     .with_preserve_sentences(true)
///     .with_sentence_window(50)?;
/// assert_eq!(config.words_per_chunk(), 1000);
/// # Ok::<(), word_splitter::ChunkConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Number of words each chunk is filled up to.
    words_per_chunk: usize,
    /// Whether a full chunk may be cut early at a sentence end.
    preserve_sentences: bool,
    /// How many of the trailing words of a full chunk are searched for a
    /// sentence end. `None` uses the default derived from `words_per_chunk`.
    sentence_window: Option<usize>,
}

impl ChunkConfig {
    /// Create a configuration producing chunks of `words_per_chunk` words.
    ///
    /// By default sentence boundaries are ignored and every chunk except the
    /// last holds exactly `words_per_chunk` words.
    ///
    /// # Errors
    ///
    /// Will return an error if `words_per_chunk` is zero.
    pub fn new(words_per_chunk: usize) -> Result<Self, ChunkConfigError> {
        if words_per_chunk == 0 {
            return Err(ChunkConfigError(ChunkConfigErrorRepr::ZeroWordsPerChunk));
        }
        Ok(Self {
            words_per_chunk,
            preserve_sentences: false,
            sentence_window: None,
        })
    }

    /// Retrieve the number of words per chunk.
    #[must_use]
    pub fn words_per_chunk(&self) -> usize {
        self.words_per_chunk
    }

    /// Whether chunks are cut early at sentence boundaries.
    #[must_use]
    pub fn preserve_sentences(&self) -> bool {
        self.preserve_sentences
    }

    /// Specify whether a full chunk should be cut at the latest sentence end
    /// found within the sentence window, instead of exactly at
    /// `words_per_chunk` words. Words after the cut carry over into the next
    /// chunk. If no sentence ends inside the window, the chunk is cut at
    /// `words_per_chunk` words as usual.
    #[must_use]
    pub fn with_preserve_sentences(mut self, preserve_sentences: bool) -> Self {
        self.preserve_sentences = preserve_sentences;
        self
    }

    /// Number of trailing words of a full chunk that are searched for a
    /// sentence end.
    ///
    /// Defaults to a fifth of `words_per_chunk` (at least one), and is never
    /// larger than `words_per_chunk - 1`, since a chunk always keeps its first
    /// word.
    ///
    /// ```
    /// use word_splitter::ChunkConfig;
    ///
    /// assert_eq!(ChunkConfig::new(1000)?.sentence_window(), 200);
    /// assert_eq!(ChunkConfig::new(3)?.sentence_window(), 1);
    /// assert_eq!(ChunkConfig::new(1)?.sentence_window(), 0);
    /// # Ok::<(), word_splitter::ChunkConfigError>(())
    /// ```
    #[must_use]
    pub fn sentence_window(&self) -> usize {
        let max_window = self.words_per_chunk - 1;
        self.sentence_window
            .unwrap_or_else(|| (self.words_per_chunk / 5).max(1))
            .min(max_window)
    }

    /// Set the number of trailing words of a full chunk that are searched for
    /// a sentence end. Only has an effect if sentences are preserved.
    ///
    /// # Errors
    ///
    /// Will return an error if the window is zero.
    pub fn with_sentence_window(mut self, window: usize) -> Result<Self, ChunkConfigError> {
        if window == 0 {
            return Err(ChunkConfigError(ChunkConfigErrorRepr::ZeroSentenceWindow));
        }
        self.sentence_window = Some(window);
        Ok(self)
    }
}

impl TryFrom<usize> for ChunkConfig {
    type Error = ChunkConfigError;

    fn try_from(words_per_chunk: usize) -> Result<Self, Self::Error> {
        Self::new(words_per_chunk)
    }
}
