/*!
Shared test and benchmark utilities.

Separate crate so that it can be only included in test mode for
unit tests, benchmarks, and integration tests.
*/
use std::{
    fs,
    path::{Path, PathBuf},
};

use fake::{faker::lorem::en::Words, Fake};
use tempfile::TempDir;

/// Generates exactly `count` lorem ipsum words. None of them contain whitespace.
pub fn lorem_words(count: usize) -> Vec<String> {
    Words(count..count + 1).fake()
}

/// Generates a text of `count` words, each separated by a single space and
/// without leading or trailing whitespace.
pub fn lorem_text(count: usize) -> String {
    lorem_words(count).join(" ")
}

/// Generates a text of `count` words where every `sentence_len`-th word ends
/// with a period.
pub fn lorem_sentences(count: usize, sentence_len: usize) -> String {
    lorem_words(count)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            if (i + 1) % sentence_len == 0 {
                format!("{word}.")
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Creates a fresh temporary directory that is removed on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Lists the file names inside `dir`, sorted.
pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}
