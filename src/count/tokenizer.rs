use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;

use super::normalize::normalize;
use crate::error::HuntError;

/// Longest token compared as a whole unless configured otherwise
pub const DEFAULT_MAX_TOKEN_BYTES: usize = 1023;

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Counts tokens whose normalized form equals a target word
///
/// Tokens are maximal runs of non-whitespace bytes. A token longer than
/// `max_token_bytes` is cut into consecutive pieces of at most that many
/// bytes and each piece is compared on its own. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD before normalization.
#[derive(Debug, Clone)]
pub struct WordCounter {
    target: String,
    max_token_bytes: Option<NonZeroUsize>,
}

impl WordCounter {
    /// Build a counter for `word`; `max_token_bytes == 0` means no limit
    pub fn new(word: &str, max_token_bytes: usize) -> Result<Self, HuntError> {
        let target = normalize(word);
        if target.is_empty() {
            return Err(HuntError::invalid_config(format!(
                "target word '{word}' is empty after removing punctuation"
            )));
        }

        Ok(Self {
            target,
            max_token_bytes: NonZeroUsize::new(max_token_bytes),
        })
    }

    /// The normalized word being counted
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Read `reader` to the end and return the number of matching tokens
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> io::Result<u64> {
        let mut token = Vec::with_capacity(64);
        let mut count = 0;

        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            let consumed = buf.len();
            for &byte in buf {
                if is_separator(byte) {
                    count += self.finish_token(&mut token);
                    continue;
                }
                token.push(byte);
                if self.max_token_bytes.is_some_and(|max| token.len() == max.get()) {
                    count += self.finish_token(&mut token);
                }
            }
            reader.consume(consumed);
        }

        count += self.finish_token(&mut token);
        Ok(count)
    }

    /// Open `path` and count matching tokens in it
    pub fn count_file(&self, path: &Path) -> Result<u64, HuntError> {
        let file = File::open(path).map_err(|source| HuntError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.count_reader(BufReader::new(file))
            .map_err(|source| HuntError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn finish_token(&self, token: &mut Vec<u8>) -> u64 {
        if token.is_empty() {
            return 0;
        }
        let matched = normalize(&String::from_utf8_lossy(token)) == self.target;
        token.clear();
        u64::from(matched)
    }
}
