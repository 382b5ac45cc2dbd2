use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

pub const SAMPLE: [i64; 10] = [5, 0, 1, 7, 3, 2, 4, 9, 6, 8];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSequenceError {
    #[error("invalid integer {token:?}: {source}")]
    InvalidValue {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("empty value at position {position}")]
    EmptyToken { position: usize },
}

/// Values taken from one command-line argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueList(pub Vec<i64>);

/// Parses `"5, 0,1"` style input. Whitespace around each value is ignored.
pub fn parse_values(input: &str) -> Result<ValueList, ParseSequenceError> {
    input
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            if token.is_empty() {
                return Err(ParseSequenceError::EmptyToken { position });
            }
            token
                .parse::<i64>()
                .map_err(|source| ParseSequenceError::InvalidValue {
                    token: token.to_owned(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ValueList)
}

/// `label: [v1, v2, ...]`
pub struct Labeled<'a> {
    pub label: &'a str,
    pub values: &'a [i64],
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.label)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
