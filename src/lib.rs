//! Zero-copy JSON parsing with lazily typed document access.
//!
//! [`parse`] builds a tree of [`Node`]s whose text is borrowed directly
//! from the caller's buffer: scalar values keep their raw source text
//! (quotes included) and are only converted when a typed value is
//! requested. The tree, and any array view taken from it, cannot outlive
//! the buffer it borrows from.
//!
//! ```
//! use jsonpeek::parse;
//!
//! let doc = parse(r#"{"host": "localhost", "port": 8080}"#).unwrap();
//! assert_eq!(doc.get("host").value_as::<&str>(), Some("localhost"));
//! assert_eq!(doc.get("port").value_as::<u16>(), Some(8080));
//! assert_eq!(doc.get("gone").value_as::<u16>(), None);
//! ```
//!
//! The accepted grammar is deliberately narrower than the JSON
//! specification: only space and newline are insignificant whitespace,
//! string escapes are not decoded, and a string value cannot contain a
//! literal `,`, `}` or `]` since leaf scanning stops there.

mod error;
mod extract;
mod node;
mod parse;
mod scan;

pub use error::ParseError;
pub use extract::FromLeaf;
pub use node::Node;
pub use parse::{parse, parse_bytes, parse_cstr, MAX_DEPTH};
