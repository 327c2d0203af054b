//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::LexiconError;
use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines are skipped silently; lines that are not a single alphabetic
/// word are skipped with a warning.
///
/// # Errors
///
/// Returns [`LexiconError::Io`] if the file cannot be read and
/// [`LexiconError::Empty`] if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use hangman::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/lexicon.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    debug!("loaded {} words from {}", words.len(), path.display());

    if words.is_empty() {
        return Err(LexiconError::Empty);
    }
    Ok(words)
}

/// Parse newline-separated words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| warn!("skipping lexicon line {}: {trimmed:?}: {e}", number + 1))
                .ok()
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::lexicon::loader::words_from_slice;
/// use hangman::lexicon::BUILTIN;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_text_uppercases_and_skips_blank_lines() {
        let words = words_from_text("apple\n\n  Cherry \r\nmango\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["APPLE", "CHERRY", "MANGO"]);
    }

    #[test]
    fn words_from_text_skips_invalid() {
        let words = words_from_text("apple\nice cream\nr2d2\nplum");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["APPLE", "PLUM"]);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["otter", "", "badger"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "BADGER");
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "walnut\npecan").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "WALNUT");
    }

    #[test]
    fn load_from_file_rejects_empty_lexicon() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(LexiconError::Empty)
        ));
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
