/*!
# [`WordSplitter`]
Splitting of text into chunks of a fixed number of words.
*/

use itertools::Itertools;

use crate::{
    words::{count_words, ends_sentence, is_word, tokenize},
    ChunkConfig,
};

/// A contiguous group of words taken from the input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Tokens of the chunk joined with single spaces.
    text: String,
    /// Number of words in the chunk. Empty tokens are not counted.
    word_count: usize,
}

impl Chunk {
    fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            text: tokens.iter().join(" "),
            word_count: count_words(tokens),
        }
    }

    /// The rendered text of the chunk.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of words in the chunk.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Consume the chunk, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Splits text into chunks of a fixed number of words.
///
/// Text is tokenized on runs of whitespace, and tokens are rejoined with a
/// single space, so the original spacing between words is not preserved.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct WordSplitter {
    /// Method of determining chunk boundaries.
    config: ChunkConfig,
}

impl WordSplitter {
    /// Creates a new [`WordSplitter`].
    ///
    /// ```
    /// use word_splitter::{ChunkConfig, WordSplitter};
    ///
    /// let splitter = WordSplitter::new(ChunkConfig::new(1000)?);
    /// # Ok::<(), word_splitter::ChunkConfigError>(())
    /// ```
    #[must_use]
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Retrieve the configuration of this splitter.
    #[must_use]
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Generate the list of chunk texts for a given text.
    ///
    /// Every chunk except the last holds exactly the configured number of
    /// words (or, when sentences are preserved, up to that many). Whatever
    /// remains after the last full chunk is always returned as a final chunk,
    /// even if it is empty. So the result is never empty, and a text whose
    /// word count is an exact multiple of the chunk size ends with an empty
    /// chunk.
    ///
    /// ```
    /// use word_splitter::{ChunkConfig, WordSplitter};
    ///
    /// let splitter = WordSplitter::new(ChunkConfig::new(2)?);
    /// let chunks = splitter.chunks("Some text\n\nfrom a\ndocument");
    ///
    /// assert_eq!(vec!["Some text", "from a", "document"], chunks);
    /// # Ok::<(), word_splitter::ChunkConfigError>(())
    /// ```
    #[must_use]
    pub fn chunks(&self, text: &str) -> Vec<String> {
        self.chunk_words(text)
            .into_iter()
            .map(Chunk::into_text)
            .collect()
    }

    /// Generate the list of chunks for a given text, along with the number of
    /// words in each.
    ///
    /// See [`WordSplitter::chunks`] for more information.
    #[must_use]
    pub fn chunk_words(&self, text: &str) -> Vec<Chunk> {
        let words_per_chunk = self.config.words_per_chunk();
        let mut chunks = Vec::new();
        let mut current = Vec::new();
        let mut word_count = 0;

        for token in tokenize(text) {
            current.push(token);
            if is_word(token) {
                word_count += 1;
            }
            if word_count == words_per_chunk {
                let cut = self.sentence_cut(&current).unwrap_or(current.len());
                // Words past the cut start the next chunk
                let rest = current.split_off(cut);
                chunks.push(Chunk::from_tokens(&current));
                word_count = count_words(&rest);
                current = rest;
            }
        }

        chunks.push(Chunk::from_tokens(&current));
        chunks
    }

    /// Where to cut a full chunk so that it ends on a sentence, if sentences
    /// are preserved and one ends within the window.
    fn sentence_cut(&self, tokens: &[&str]) -> Option<usize> {
        if !self.config.preserve_sentences() {
            return None;
        }

        tokens
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, token)| is_word(token))
            .take(self.config.sentence_window())
            .find(|(_, word)| ends_sentence(word))
            .map(|(i, _)| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(words_per_chunk: usize) -> WordSplitter {
        WordSplitter::new(ChunkConfig::new(words_per_chunk).unwrap())
    }

    fn sentence_splitter(words_per_chunk: usize, window: usize) -> WordSplitter {
        WordSplitter::new(
            ChunkConfig::new(words_per_chunk)
                .unwrap()
                .with_preserve_sentences(true)
                .with_sentence_window(window)
                .unwrap(),
        )
    }

    #[test]
    fn groups_words() {
        let chunks = splitter(2).chunks("one two three four five");
        assert_eq!(vec!["one two", "three four", "five"], chunks);
    }

    #[test]
    fn exact_multiple_leaves_empty_final_chunk() {
        let chunks = splitter(2).chunks("one two three four");
        assert_eq!(vec!["one two", "three four", ""], chunks);
    }

    #[test]
    fn empty_text_is_one_empty_chunk() {
        assert_eq!(vec![""], splitter(3).chunks(""));
    }

    #[test]
    fn whitespace_is_collapsed() {
        let chunks = splitter(3).chunks("a\n\n b\t\tc");
        assert_eq!(vec!["a b c", ""], chunks);
    }

    #[test]
    fn leading_whitespace_keeps_empty_token() {
        let chunks = splitter(1).chunks("  a b");
        assert_eq!(vec![" a", "b", ""], chunks);
    }

    #[test]
    fn trailing_whitespace_lands_in_final_chunk() {
        let chunks = splitter(2).chunks("a b c\n");
        assert_eq!(vec!["a b", "c "], chunks);

        let chunks = splitter(2).chunks("a b\n");
        assert_eq!(vec!["a b", ""], chunks);
    }

    #[test]
    fn chunk_word_counts() {
        let chunks = splitter(2).chunk_words(" a b c");
        assert_eq!(
            chunks.iter().map(Chunk::word_count).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(chunks[0].text(), " a b");
    }

    #[test]
    fn single_word_chunks() {
        let chunks = splitter(1).chunks("é ü");
        assert_eq!(vec!["é", "ü", ""], chunks);
    }

    #[test]
    fn sentences_ignored_by_default() {
        let chunks = splitter(4).chunks("One two. Three four five six.");
        assert_eq!(vec!["One two. Three four", "five six."], chunks);
    }

    #[test]
    fn cuts_at_sentence_end_inside_window() {
        let chunks = sentence_splitter(4, 2).chunks("One two three. Four five six.");
        assert_eq!(vec!["One two three.", "Four five six."], chunks);
    }

    #[test]
    fn carried_words_count_toward_next_chunk() {
        let chunks = sentence_splitter(4, 2).chunk_words("A b c. D e f g h");
        assert_eq!(
            chunks
                .iter()
                .map(|c| (c.text(), c.word_count()))
                .collect::<Vec<_>>(),
            vec![("A b c.", 3), ("D e f g", 4), ("h", 1)]
        );
    }

    #[test]
    fn prefers_latest_sentence_end() {
        let chunks = sentence_splitter(5, 4).chunks("A. B. C. D e f");
        assert_eq!(vec!["A. B. C.", "D e f"], chunks);
    }

    #[test]
    fn falls_back_to_word_count_outside_window() {
        let chunks = sentence_splitter(5, 1).chunks("One. two three four five six");
        assert_eq!(vec!["One. two three four five", "six"], chunks);
    }

    #[test]
    fn sentence_end_on_last_word_is_plain_cut() {
        let chunks = sentence_splitter(3, 2).chunks("a b c! d");
        assert_eq!(vec!["a b c!", "d"], chunks);
    }

    #[test]
    fn sentence_mode_keeps_trailing_empty_chunk() {
        let chunks = sentence_splitter(2, 1).chunks("Yes. No.");
        assert_eq!(vec!["Yes. No.", ""], chunks);
    }

    #[test]
    fn single_word_chunks_never_carry() {
        let splitter = WordSplitter::new(
            ChunkConfig::new(1)
                .unwrap()
                .with_preserve_sentences(true),
        );
        assert_eq!(vec!["a.", "b", ""], splitter.chunks("a. b"));
    }
}
