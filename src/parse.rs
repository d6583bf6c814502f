//! Recursive descent over balanced blocks of the input buffer.
//!
//! Each nested block is first measured with [`balanced`] and then
//! re-scanned by its builder, so deeply nested input costs an extra pass
//! per level. Any failure at any depth propagates to the root: a document
//! either parses completely or not at all, partially built trees are never
//! handed out.

use crate::error::ParseError;
use crate::node::Node;
use crate::scan::{balanced, key, leaf, space, Scan};
use log::{debug, warn};
use nom::{
  bytes::complete::tag,
  combinator::{eof, opt},
  error::{
    convert_error, ContextError, ErrorKind, ParseError as NomParseError, VerboseError,
    VerboseErrorKind,
  },
  Err::{Error, Failure, Incomplete},
};
use std::collections::BTreeMap;
use std::ffi::CStr;

/// Most deeply nested blocks a document may have.
pub const MAX_DEPTH: usize = 128;

const DEPTH_LIMIT: &str = "depth limit";

/// Parses a complete document from a borrowed slice. The returned tree
/// borrows from `input` and cannot outlive it. The root must be an object;
/// `{}` parses to an empty one.
pub fn parse(input: &str) -> Result<Node, ParseError> {
  debug!("parsing {} bytes", input.len());
  match document()(input) {
    Ok((_, node)) => Ok(node),
    Err(Error(e)) | Err(Failure(e)) => Err(classify(input, e)),
    Err(Incomplete(_)) => panic!("unexpected incomplete error"),
  }
}

/// Parses a document from an explicit byte buffer.
pub fn parse_bytes(input: &[u8]) -> Result<Node, ParseError> {
  parse(std::str::from_utf8(input).map_err(ParseError::InvalidUtf8)?)
}

/// Parses a document from a null-terminated buffer.
pub fn parse_cstr(input: &CStr) -> Result<Node, ParseError> {
  parse(input.to_str().map_err(ParseError::InvalidUtf8)?)
}

fn document<'a>() -> impl Fn(&'a str) -> Scan<'a, Node<'a>> {
  |input| {
    let (input, _) = space()(input)?;
    let (input, block) = balanced('{', '}')(input)?;
    let (_, node) = object(1)(block)?;
    let (input, _) = space()(input)?;
    let (input, _) = eof(input)?;
    Ok((input, node))
  }
}

/// Builds an object from a balanced `{...}` block by alternating key,
/// mandatory `:`, and value scans until the closing brace. A duplicate key
/// keeps the first occurrence.
fn object<'a>(depth: usize) -> impl Fn(&'a str) -> Scan<'a, Node<'a>> {
  move |input| {
    if depth > MAX_DEPTH {
      return Err(too_deep(input));
    }
    let (mut rest, _) = tag("{")(input)?;
    let mut members = BTreeMap::new();
    loop {
      let (after, _) = space()(rest)?;
      if let Ok((after, _)) = tag::<&str, &str, VerboseError<&str>>("}")(after) {
        let (after, _) = space()(after)?;
        let (after, _) = eof(after)?;
        return Ok((after, Node::Object(members)));
      }
      let (after, name) = key()(after)?;
      let (after, _) = tag(":")(after)?;
      let (after, item) = value(depth)(after)?;
      members.entry(name).or_insert(item);
      rest = after;
    }
  }
}

/// Builds an array from a balanced `[...]` block, dispatching each element
/// the same way object values are dispatched.
fn array<'a>(depth: usize) -> impl Fn(&'a str) -> Scan<'a, Node<'a>> {
  move |input| {
    if depth > MAX_DEPTH {
      return Err(too_deep(input));
    }
    let (mut rest, _) = tag("[")(input)?;
    let mut items = Vec::new();
    loop {
      let (after, _) = space()(rest)?;
      if let Ok((after, _)) = tag::<&str, &str, VerboseError<&str>>("]")(after) {
        let (after, _) = space()(after)?;
        let (after, _) = eof(after)?;
        return Ok((after, Node::Array(items)));
      }
      let (after, item) = value(depth)(after)?;
      items.push(item);
      rest = after;
    }
  }
}

/// Dispatches on the first significant character: `{` and `[` open a
/// nested block, anything else must look like a scalar (a quote, an ASCII
/// alphanumeric, or `-`). Whitespace and at most one trailing comma are
/// consumed after the value.
fn value<'a>(depth: usize) -> impl Fn(&'a str) -> Scan<'a, Node<'a>> {
  move |input| {
    let (input, _) = space()(input)?;
    let (input, node) = match input.chars().next() {
      Some('{') => {
        let (rest, block) = balanced('{', '}')(input)?;
        let (_, node) = object(depth + 1)(block)?;
        (rest, node)
      }
      Some('[') => {
        let (rest, block) = balanced('[', ']')(input)?;
        let (_, node) = array(depth + 1)(block)?;
        (rest, node)
      }
      Some(c) if c == '"' || c.is_ascii_alphanumeric() || c == '-' => {
        let (rest, raw) = leaf()(input)?;
        (rest, Node::Leaf(raw))
      }
      _ => return Err(Error(VerboseError::from_error_kind(input, ErrorKind::Char))),
    };
    let (input, _) = space()(input)?;
    let (input, _) = opt(tag(","))(input)?;
    let (input, _) = space()(input)?;
    Ok((input, node))
  }
}

fn too_deep(input: &str) -> nom::Err<VerboseError<&str>> {
  warn!("nesting deeper than {} levels", MAX_DEPTH);
  Failure(VerboseError::add_context(
    input,
    DEPTH_LIMIT,
    VerboseError::from_error_kind(input, ErrorKind::TooLarge),
  ))
}

fn classify(input: &str, e: VerboseError<&str>) -> ParseError {
  let deep = e
    .errors
    .iter()
    .any(|(_, kind)| matches!(kind, VerboseErrorKind::Context(DEPTH_LIMIT)));
  if deep {
    ParseError::TooDeep(MAX_DEPTH)
  } else {
    ParseError::Syntax(convert_error(input, e))
  }
}
