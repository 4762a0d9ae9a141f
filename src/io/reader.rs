//! Reader for count-prefixed integer vectors.

use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use crate::data_structures::perfect_hash_set::Key;
use crate::error::input::InputError;
use crate::error::FixedSetResult;

/// The two vectors the query tool consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryBatch {
    /// Keys the set is built from
    pub data: Vec<Key>,
    /// Keys to look up, in output order
    pub queries: Vec<Key>,
}

/// Pulls numbers out of a whitespace-separated token stream.
#[derive(Debug)]
pub struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> TokenReader<'a> {
    /// Creates a reader over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_parsed<T: FromStr>(&mut self) -> Option<Result<T, InputError>> {
        let token = self.tokens.next()?;
        let position = self.position;
        self.position += 1;
        Some(token.parse().map_err(|_| InputError::InvalidToken {
            token: token.to_string(),
            position,
        }))
    }

    /// Reads a count followed by that many integers.
    ///
    /// `section` names the vector in error messages.
    pub fn read_vector(&mut self, section: &'static str) -> Result<Vec<Key>, InputError> {
        let expected: usize = match self.next_parsed() {
            Some(count) => count?,
            None => return Err(InputError::MissingCount { section }),
        };

        // The count is untrusted, so don't let it size the allocation alone.
        let mut values = Vec::with_capacity(expected.min(1 << 20));
        while values.len() < expected {
            match self.next_parsed() {
                Some(value) => values.push(value?),
                None => {
                    return Err(InputError::Truncated {
                        section,
                        expected,
                        found: values.len(),
                    })
                }
            }
        }
        Ok(values)
    }
}

/// Reads the data vector and the query vector from `input`.
///
/// Anything after the query vector is ignored.
pub fn read_batch<R: Read>(mut input: R) -> FixedSetResult<QueryBatch> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let mut reader = TokenReader::new(&text);
    let data = reader.read_vector("data")?;
    let queries = reader.read_vector("queries")?;
    Ok(QueryBatch { data, queries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixedSetError;

    #[test]
    fn test_read_batch() {
        let input = "4\n1 2 3 1000000007\n4\n2 4 1000000007 -5\n";
        let batch = read_batch(input.as_bytes()).unwrap();
        assert_eq!(batch.data, vec![1, 2, 3, 1_000_000_007]);
        assert_eq!(batch.queries, vec![2, 4, 1_000_000_007, -5]);
    }

    #[test]
    fn test_tokens_may_span_lines_freely() {
        let batch = read_batch("2 7\n8 1\n\n  9".as_bytes()).unwrap();
        assert_eq!(batch.data, vec![7, 8]);
        assert_eq!(batch.queries, vec![9]);
    }

    #[test]
    fn test_empty_vectors() {
        let batch = read_batch("0 0".as_bytes()).unwrap();
        assert_eq!(batch, QueryBatch::default());
    }

    #[test]
    fn test_extreme_values() {
        let input = format!("2 {} {} 0", i64::MIN, i64::MAX);
        let batch = read_batch(input.as_bytes()).unwrap();
        assert_eq!(batch.data, vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn test_missing_query_count() {
        let err = read_batch("1 5".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            FixedSetError::Input(InputError::MissingCount { section: "queries" })
        ));
    }

    #[test]
    fn test_truncated_vector() {
        let mut reader = TokenReader::new("3 1 2");
        assert_eq!(
            reader.read_vector("data"),
            Err(InputError::Truncated {
                section: "data",
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_token() {
        let mut reader = TokenReader::new("2 1 x");
        assert_eq!(
            reader.read_vector("data"),
            Err(InputError::InvalidToken {
                token: "x".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn test_negative_count_is_invalid() {
        let mut reader = TokenReader::new("-1");
        assert!(matches!(
            reader.read_vector("data"),
            Err(InputError::InvalidToken { position: 0, .. })
        ));
    }
}
