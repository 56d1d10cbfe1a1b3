//! Order-preserving deserialization of node trees.
//!
//! Attribute and style objects are read entry by entry through custom
//! visitors rather than through an intermediate map type, so the order that
//! keys appear in the source document is exactly the order they are rendered
//! in, regardless of which map features the data format enables.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use super::{AttributeMap, AttributeValue, ElementNode, Node, StyleMap, StyleValue};
use crate::attributes::is_binding_key;

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(r#"a text string or an element ({"tag", "attrs", "children"})"#)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Node, E> {
        Ok(Node::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Node, E> {
        Ok(Node::Text(value))
    }

    fn visit_map<V>(self, mut map: V) -> Result<Node, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut tag: Option<String> = None;
        let mut attrs: Option<AttributeMap> = None;
        let mut children: Option<Vec<Node>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "tag" => {
                    if tag.is_some() {
                        return Err(de::Error::duplicate_field("tag"));
                    }
                    tag = Some(map.next_value()?);
                }
                "attrs" => {
                    if attrs.is_some() {
                        return Err(de::Error::duplicate_field("attrs"));
                    }
                    attrs = Some(map.next_value()?);
                }
                "children" => {
                    if children.is_some() {
                        return Err(de::Error::duplicate_field("children"));
                    }
                    children = Some(map.next_value()?);
                }
                // Tree builders are free to attach their own bookkeeping to a node.
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(Node::Element(ElementNode {
            tag: tag.ok_or_else(|| de::Error::missing_field("tag"))?,
            attrs: attrs.ok_or_else(|| de::Error::missing_field("attrs"))?,
            children: children.ok_or_else(|| de::Error::missing_field("children"))?,
        }))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct AttributeMapVisitor;

impl<'de> Visitor<'de> for AttributeMapVisitor {
    type Value = AttributeMap;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(r#"an attribute object ("key": value)"#)
    }

    fn visit_map<V>(self, mut map: V) -> Result<AttributeMap, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut attrs = AttributeMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            // Handlers and references can't be described by data anyway, so whatever stands in
            // for them is skipped without being inspected.
            let value = if is_binding_key(&key) {
                map.next_value::<IgnoredAny>()?;
                AttributeValue::Binding
            } else {
                map.next_value::<AttributeValue>()?
            };
            attrs.insert(key, value);
        }
        Ok(attrs)
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string, number, boolean, null, or style object")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<AttributeValue, E> {
        Ok(AttributeValue::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<AttributeValue, E> {
        Ok(AttributeValue::String(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Empty)
    }

    fn visit_map<V>(self, map: V) -> Result<AttributeValue, V::Error>
    where
        V: MapAccess<'de>,
    {
        StyleMapVisitor.visit_map(map).map(AttributeValue::Style)
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttributeValueVisitor)
    }
}

struct StyleMapVisitor;

impl<'de> Visitor<'de> for StyleMapVisitor {
    type Value = StyleMap;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(r#"a style object ("property": value)"#)
    }

    fn visit_map<V>(self, mut map: V) -> Result<StyleMap, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut style = StyleMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, StyleValue>()? {
            style.insert(key, value);
        }
        Ok(style)
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StyleMapVisitor)
    }
}

struct StyleValueVisitor;

impl<'de> Visitor<'de> for StyleValueVisitor {
    type Value = StyleValue;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string or number style value")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<StyleValue, E> {
        Ok(StyleValue::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<StyleValue, E> {
        Ok(StyleValue::String(value))
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StyleValueVisitor)
    }
}
