//! Tokenizer - Turns an input file into its running text
//!
//! Tokens are maximal runs of bytes that are not separators, kept verbatim:
//! no decoding, no case folding and no punctuation stripping. The separators
//! are the C-locale whitespace bytes (space, `\t`, `\n`, `\v`, `\f`, `\r`);
//! Unicode spaces such as U+00A0 belong to the surrounding token.
//!
//! An input that cannot be opened or read yields an empty running text
//! instead of an error, so a bad path produces an empty report.

use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::model::{ReadError, RunningText};

/// Vertical tab, which `u8::is_ascii_whitespace` leaves out
const VERTICAL_TAB: u8 = 0x0B;

/// Whether a byte separates two tokens
#[inline]
pub fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == VERTICAL_TAB
}

/// Split raw text into whitespace-delimited tokens, in source order
pub fn split_words(text: &[u8]) -> RunningText {
    text.split(|b| is_separator(*b))
        .filter(|word| !word.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

/// Read the whole file as raw bytes
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(buffer)
}

/// Read the running text of a file, degrading to empty on failure
pub fn read_words(path: &Path) -> RunningText {
    match read_bytes(path) {
        Ok(text) => split_words(&text),
        Err(err) => {
            info!("{}; treating input as empty", err);
            RunningText::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn words(text: &[u8]) -> Vec<String> {
        split_words(text)
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    #[test]
    fn test_split_words_basic() {
        assert_eq!(
            words(b"the cat sat on the mat"),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
    }

    #[test]
    fn test_split_words_mixed_whitespace() {
        let text = b"  one\ttwo\n\nthree \r\n four\x0Cfive  ";
        assert_eq!(words(text), vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_split_words_vertical_tab_separates() {
        assert_eq!(words(b"foo\x0Bbar"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_split_words_unicode_spaces_do_not_separate() {
        let nbsp = "foo\u{00A0}bar";
        assert_eq!(words(nbsp.as_bytes()), vec![nbsp]);

        let en_space = "foo\u{2002}bar baz";
        assert_eq!(words(en_space.as_bytes()), vec!["foo\u{2002}bar", "baz"]);
    }

    #[test]
    fn test_split_words_empty_and_blank() {
        assert!(split_words(b"").is_empty());
        assert!(split_words(b" \n\t\x0B ").is_empty());
    }

    #[test]
    fn test_split_words_keeps_case_and_punctuation() {
        assert_eq!(
            words(b"Hello, world! hello"),
            vec!["Hello,", "world!", "hello"]
        );
    }

    #[test]
    fn test_split_words_keeps_invalid_utf8_bytes() {
        let tokens = split_words(b"caf\xE9 caf\xE8 caf\xE9");
        assert_eq!(
            tokens,
            vec![b"caf\xE9".to_vec(), b"caf\xE8".to_vec(), b"caf\xE9".to_vec()]
        );
    }

    #[test]
    fn test_read_words_from_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("input.txt");
        fs::write(&file_path, "a dog and\na cat\n").unwrap();

        let tokens = read_words(&file_path);
        assert_eq!(
            tokens,
            vec![
                b"a".to_vec(),
                b"dog".to_vec(),
                b"and".to_vec(),
                b"a".to_vec(),
                b"cat".to_vec()
            ]
        );
    }

    #[test]
    fn test_read_words_latin1_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("latin1.txt");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(b"caf\xE9 na\xEFve\n").unwrap();

        let tokens = read_words(&file_path);
        assert_eq!(tokens, vec![b"caf\xE9".to_vec(), b"na\xEFve".to_vec()]);
    }

    #[test]
    fn test_read_words_nonexistent_file_is_empty() {
        let tokens = read_words(Path::new("/nonexistent/input.txt"));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_read_words_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let tokens = read_words(dir.path());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_read_bytes_open_error() {
        let err = read_bytes(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }

    #[test]
    fn test_read_bytes_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_bytes(dir.path()).unwrap_err();
        assert!(matches!(err, ReadError::Read { .. }));
    }
}
