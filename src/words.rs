/*!
Whitespace tokenization.

Text is split on runs of whitespace. The separators themselves are dropped, so
rejoining the tokens with a single space collapses the original spacing.
*/

use once_cell::sync::Lazy;
use regex::Regex;

// Lazy so that we don't have to compile it more than once.
// The information separators U+001C..U+001F count as whitespace too.
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1C-\x1F]+").unwrap());

/// Closing quotes and brackets that may trail the punctuation ending a sentence.
const SENTENCE_CLOSERS: [char; 8] = ['"', '\'', '”', '’', ')', ']', '}', '»'];

/// Characters that end a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split `text` on runs of whitespace.
///
/// Leading or trailing whitespace produces an empty token at that end, and an
/// empty text produces a single empty token, so the result is never empty.
///
/// ```
/// use word_splitter::tokenize;
///
/// assert_eq!(tokenize(" one  two\n"), vec!["", "one", "two", ""]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    WHITESPACE_RUNS.split(text).collect()
}

/// Whether a token counts toward the number of words in a chunk.
/// Empty tokens and tokens made only of whitespace do not.
#[must_use]
pub fn is_word(token: &str) -> bool {
    !token.trim().is_empty()
}

/// Number of tokens in `tokens` that are words.
pub(crate) fn count_words(tokens: &[&str]) -> usize {
    tokens.iter().filter(|t| is_word(t)).count()
}

/// Whether a word closes a sentence, i.e. ends in `.`, `!` or `?`, optionally
/// followed by closing quotes or brackets.
#[must_use]
pub fn ends_sentence(word: &str) -> bool {
    word.trim_end_matches(SENTENCE_CLOSERS)
        .ends_with(SENTENCE_TERMINATORS)
}
