mod deserialize;
mod map;

use std::fmt::{Display, Formatter};

pub use map::{Iter, OrderedMap};

use crate::tags::is_void_tag;

/// Insertion-ordered attributes of a single element.
pub type AttributeMap = OrderedMap<AttributeValue>;

/// Insertion-ordered inline style declarations, keyed by camelCase property name.
pub type StyleMap = OrderedMap<StyleValue>;

/// A node in a declarative markup tree: either a raw text leaf or an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(String),
    Element(ElementNode),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(element: ElementNode) -> Self {
        Node::Element(element)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(element),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<ElementNode> for Node {
    fn from(value: ElementNode) -> Self {
        Node::Element(value)
    }
}

/// Renders the node with the default, legacy-compatible options.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render(self))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub attrs: AttributeMap,
    pub children: Vec<Node>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttributeMap::new(),
            children: vec![],
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn with_attrs(mut self, attrs: AttributeMap) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_style(self, style: StyleMap) -> Self {
        self.with_attr("style", style)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &AttributeMap {
        &self.attrs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns true if this element's tag never receives a separate closing tag.
    pub fn is_void(&self) -> bool {
        is_void_tag(&self.tag)
    }
}

/// The value of a single attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Bool(bool),
    Style(StyleMap),
    /// An event handler or element reference. These only have meaning to a
    /// live DOM and are never written to markup.
    Binding,
    /// An attribute that is present in the map with no value.
    Empty,
}

impl AttributeValue {
    /// Falsy values are skipped when serializing, except for the forced
    /// boolean attributes which ignore their value entirely.
    pub fn is_falsy(&self) -> bool {
        match self {
            AttributeValue::String(value) => value.is_empty(),
            AttributeValue::Number(value) => *value == 0.0 || value.is_nan(),
            AttributeValue::Bool(value) => !value,
            AttributeValue::Style(_) | AttributeValue::Binding => false,
            AttributeValue::Empty => true,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<StyleMap> for AttributeValue {
    fn from(value: StyleMap) -> Self {
        AttributeValue::Style(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Empty, Into::into)
    }
}

/// The value of a single inline style declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    String(String),
    Number(f64),
}

impl Display for StyleValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::String(value) => f.write_str(value),
            StyleValue::Number(value) => f.write_str(&format_number(*value)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::String(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(value.into())
    }
}

/// Write a number the way a dynamically-typed host prints it when
/// interpolating into a string (ECMAScript `Number::toString`): integral values
/// have no fractional part, negative zero prints as `0`, very large and very
/// small magnitudes switch to exponent form, and the non-finite values use
/// their long names.
pub(crate) fn format_number(value: f64) -> String {
    let mut buffer = ryu_js::Buffer::new();
    buffer.format(value).to_string()
}
