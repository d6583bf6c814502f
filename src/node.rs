use crate::extract::FromLeaf;
use std::collections::BTreeMap;

/// A document node borrowing from the buffer it was parsed out of.
///
/// Scalar text is kept verbatim as it appeared in the source, quote
/// characters included, and is only interpreted when a typed value is
/// requested. Object members are ordered by the byte order of their key
/// text, not by source order.
#[derive(Debug, PartialEq)]
pub enum Node<'a> {
  /// Raw scalar text, uninterpreted.
  Leaf(&'a str),
  /// Keyed children.
  Object(BTreeMap<&'a str, Node<'a>>),
  /// Ordered children.
  Array(Vec<Node<'a>>),
}

// Handed out by `get` for absent keys: not a branch, and every typed
// extraction on it fails.
static ABSENT: Node<'static> = Node::Leaf("");

impl<'a> Node<'a> {
  /// Creates an empty object root for programmatic construction.
  pub fn new_object() -> Self {
    Node::Object(BTreeMap::new())
  }

  /// Inserts a child under `key`, replacing any existing entry. Does
  /// nothing on non-object nodes.
  pub fn add(&mut self, key: &'a str, item: Node<'a>) {
    if let Node::Object(members) = self {
      members.insert(key, item);
    }
  }

  /// Erases the entry for `key` if present, otherwise does nothing.
  pub fn remove(&mut self, key: &str) {
    if let Node::Object(members) = self {
      members.remove(key);
    }
  }

  /// Looks up a child by key.
  pub fn find(&self, key: &str) -> Option<&Node<'a>> {
    match self {
      Node::Object(members) => members.get(key),
      _ => None,
    }
  }

  /// Like [`find`](Node::find) but never fails: an absent key yields a
  /// shared empty leaf, so lookups can be chained without checking each
  /// step of a path.
  pub fn get(&self, key: &str) -> &Node<'a> {
    self.find(key).unwrap_or(&ABSENT)
  }

  /// True for object nodes only.
  pub fn is_branch(&self) -> bool {
    matches!(self, Node::Object(_))
  }

  /// True when the node has no children, or no text for a leaf.
  pub fn is_empty(&self) -> bool {
    match self {
      Node::Leaf(raw) => raw.is_empty(),
      Node::Object(members) => members.is_empty(),
      Node::Array(items) => items.is_empty(),
    }
  }

  /// Array element by index; None when out of range or not an array.
  pub fn at(&self, index: usize) -> Option<&Node<'a>> {
    self.as_array()?.get(index)
  }

  /// Borrowed view over an array's elements, valid as long as the node.
  pub fn as_array(&self) -> Option<&[Node<'a>]> {
    match self {
      Node::Array(items) => Some(items),
      _ => None,
    }
  }

  /// Converts the leaf's raw text to `T`. Fails on objects and arrays,
  /// and whenever the text does not fit the requested type.
  pub fn value_as<T: FromLeaf<'a>>(&self) -> Option<T> {
    match self {
      Node::Leaf(raw) => T::from_leaf(raw),
      _ => None,
    }
  }
}

impl Default for Node<'_> {
  fn default() -> Self {
    Node::new_object()
  }
}
