//! Scanner primitives the parser is built from.
//!
//! All of them operate on borrowed ranges of the caller's buffer and never
//! copy text. Only space and newline count as insignificant whitespace;
//! tab and carriage-return are significant and will break a scan.

use nom::{
  bytes::complete::{tag, take_while},
  error::{ParseError, VerboseError},
  sequence::delimited,
  IResult,
};

pub type Scan<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Consumes insignificant whitespace: space and newline only.
pub fn space() -> impl Fn(&str) -> Scan<&str> {
  |input| take_while(|c| c == ' ' || c == '\n')(input)
}

/// Scans a double-quoted member key and the whitespace around it, yielding
/// the text between the quotes. There is no escape handling: the key ends
/// at the next quote character, and a missing quote on either side fails
/// the scan.
pub fn key() -> impl Fn(&str) -> Scan<&str> {
  |input| {
    delimited(
      space(),
      delimited(tag("\""), take_while(|c| c != '"'), tag("\"")),
      space(),
    )(input)
  }
}

/// Scans a leaf value: everything up to, but not including, the first
/// unescaped `,`, `}` or `]`, verbatim. Reaching the end of input without
/// a delimiter yields the whole remainder.
pub fn leaf() -> impl Fn(&str) -> Scan<&str> {
  |input| {
    let mut escaped = false;
    for (at, c) in input.char_indices() {
      if escaped {
        escaped = false;
        continue;
      }
      match c {
        '\\' => escaped = true,
        ',' | '}' | ']' => return Ok((&input[at..], &input[..at])),
        _ => {}
      }
    }
    Ok((&input[input.len()..], input))
  }
}

/// Scans a bracketed block from `open` through its matching `close` at
/// nesting depth zero, yielding the whole block, delimiters included.
/// The count is not string-aware: a close character inside quoted text
/// still counts. Fails when the input does not start with `open` or when
/// no matching close exists before the end of input.
pub fn balanced(open: char, close: char) -> impl Fn(&str) -> Scan<&str> {
  move |input| {
    if !input.starts_with(open) {
      return Err(nom::Err::Error(VerboseError::from_char(input, open)));
    }
    let mut depth = 0usize;
    for (at, c) in input.char_indices() {
      if c == open {
        depth += 1;
      } else if c == close {
        depth -= 1;
        if depth == 0 {
          let end = at + close.len_utf8();
          return Ok((&input[end..], &input[..end]));
        }
      }
    }
    Err(nom::Err::Error(VerboseError::from_char(input, close)))
  }
}

#[cfg(test)]
mod tests {
  use super::{balanced, key, leaf, space};

  #[test]
  fn space_skips_spaces_and_newlines_only() {
    let tests = vec![
      ("", ""),
      ("x", "x"),
      ("  x", "x"),
      ("\n\n x", "x"),
      ("\tx", "\tx"),
      ("\rx", "\rx"),
    ];
    for (input, rest) in tests {
      let (remaining, _) = space()(input).unwrap();
      assert_eq!(remaining, rest, "input: `{}`", input.replace('\n', "\\n"));
    }
  }

  #[test]
  fn key_requires_both_quotes() {
    let tests = vec![
      ("\"a\":1", "a", ":1"),
      (" \"a b\" :1", "a b", ":1"),
      ("\"a,}\":1", "a,}", ":1"),
      ("\"\":1", "", ":1"),
      ("\n\"a\"\n:1", "a", ":1"),
    ];
    for (input, expected, rest) in tests {
      assert_eq!(
        key()(input),
        Ok((rest, expected)),
        "input: `{}`",
        input.replace('\n', "\\n")
      );
    }
    for input in ["a\":1", "\"a:1", "", "'a':1"] {
      assert!(key()(input).is_err(), "input: `{}`", input);
    }
  }

  #[test]
  fn leaf_stops_at_unescaped_delimiters() {
    let tests = vec![
      ("77,\"k\":1", "77", ",\"k\":1"),
      ("77}", "77", "}"),
      ("77]", "77", "]"),
      ("\"a b\",x", "\"a b\"", ",x"),
      ("12abc", "12abc", ""),
      ("7\\,8,x", "7\\,8", ",x"),
      ("", "", ""),
      (",x", "", ",x"),
    ];
    for (input, expected, rest) in tests {
      assert_eq!(leaf()(input), Ok((rest, expected)), "input: `{}`", input);
    }
  }

  #[test]
  fn balanced_matches_nested_blocks() {
    let tests = vec![
      ("{}", "{}", ""),
      ("{{}}x", "{{}}", "x"),
      ("{\"a\":{\"b\":1}},y", "{\"a\":{\"b\":1}}", ",y"),
    ];
    for (input, block, rest) in tests {
      assert_eq!(
        balanced('{', '}')(input),
        Ok((rest, block)),
        "input: `{}`",
        input
      );
    }
    assert_eq!(
      balanced('[', ']')("[1,[2,[3]]]z"),
      Ok(("z", "[1,[2,[3]]]"))
    );
    // not string-aware: a close inside quoted text still counts
    assert_eq!(balanced('{', '}')("{\"a}\"}"), Ok(("\"}", "{\"a}")));
    for input in ["{{}", "[]", "", "}"] {
      assert!(balanced('{', '}')(input).is_err(), "input: `{}`", input);
    }
  }
}
