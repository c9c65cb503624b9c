//! Parsing of user-supplied ranking parameters
//!
//! Shared by the CLI arguments and the browser's input fields. Counts are
//! integers; a negative count is accepted and means "none".

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("{field} must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: i64 },
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, ParamError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParamError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

/// Parse a top-N count. Values <= 0 become 0 (an empty ranking).
pub fn parse_count(field: &'static str, value: &str) -> Result<usize, ParamError> {
    let n = parse_integer(field, value)?;
    Ok(usize::try_from(n).unwrap_or(0))
}

/// Parse a page size, which must be strictly positive
pub fn parse_page_size(value: &str) -> Result<usize, ParamError> {
    let field = "page size";
    let n = parse_integer(field, value)?;
    match usize::try_from(n) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ParamError::NotPositive { field, value: n }),
    }
}
