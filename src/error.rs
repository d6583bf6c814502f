use std::error;
use std::fmt;
use std::str::Utf8Error;

/// Why an input buffer could not be parsed into a document.
#[derive(Debug, PartialEq)]
pub enum ParseError {
  /// The input does not follow the accepted grammar; the payload is a
  /// rendered description of where the scan stopped.
  Syntax(String),
  /// Nesting exceeded the supported depth.
  TooDeep(usize),
  /// The byte buffer is not valid UTF-8.
  InvalidUtf8(Utf8Error),
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::Syntax(detail) => write!(f, "invalid document:\n{}", detail),
      ParseError::TooDeep(limit) => write!(f, "nesting deeper than {} levels", limit),
      ParseError::InvalidUtf8(e) => write!(f, "input is not valid UTF-8: {}", e),
    }
  }
}

impl error::Error for ParseError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ParseError::InvalidUtf8(e) => Some(e),
      _ => None,
    }
  }
}
