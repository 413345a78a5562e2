//! Splits a text into words: maximal runs of ASCII letters.

use hashplot_common::{PlotError, Result};
use std::path::Path;

/// Words of `text` in order of appearance, duplicates included.
///
/// Everything that is not an ASCII letter separates words and is dropped,
/// so `don't` yields `don` and `t`.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
}

/// Reads the text file to hash. An empty file is rejected.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(PlotError::validation_field(
            format!("{} is empty", path.display()),
            "text_file",
        ));
    }

    // non-UTF-8 bytes can never be part of a word
    let text = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashplot_common::test_utils::write_data_file;

    #[test]
    fn test_split_on_non_letters() {
        let words: Vec<&str> = split_words("Hello, world! 42 times: don't-stop").collect();
        assert_eq!(words, ["Hello", "world", "times", "don", "t", "stop"]);
    }

    #[test]
    fn test_no_words() {
        assert_eq!(split_words(" 1, 2; 3 \n").count(), 0);
        assert_eq!(split_words("").count(), 0);
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        let words: Vec<&str> = split_words("caf\u{e9}s na\u{ef}ve").collect();
        assert_eq!(words, ["caf", "s", "na", "ve"]);
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(dir.path(), "empty.txt", "");
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, PlotError::Validation { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
