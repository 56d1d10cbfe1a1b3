//! Reading node trees from JSON documents.
//!
//! A JSON string is a text node and an object with `tag`, `attrs` and
//! `children` is an element, which is the shape tree builders produce when
//! their nodes are serialized. Attribute and style order follows the document.

use std::io::Read;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::node::Node;

pub fn from_str(content: &str) -> Result<Node> {
    decode(serde_json::Deserializer::from_str(content))
}

pub fn from_slice(content: &[u8]) -> Result<Node> {
    decode(serde_json::Deserializer::from_slice(content))
}

pub fn from_reader<R: Read>(mut reader: R) -> Result<Node> {
    let mut buffer = Vec::with_capacity(1024);
    reader.read_to_end(&mut buffer)?;
    from_slice(&buffer)
}

/// Element nesting has no fixed limit. serde_json's own depth guard is turned
/// off and replaced by `serde_stacker`, which grows the stack on the heap as
/// the visitors recurse instead of failing past a fixed depth.
fn decode<'de, R: serde_json::de::Read<'de>>(
    mut deserializer: serde_json::Deserializer<R>,
) -> Result<Node> {
    deserializer.disable_recursion_limit();
    let node = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(Error::InvalidNodeShape)?;
    deserializer.end().map_err(Error::InvalidNodeShape)?;
    Ok(node)
}
