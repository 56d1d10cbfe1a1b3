use std::borrow::Cow;

use crate::format::escape::push_escaped_attribute_value;
use crate::node::{format_number, AttributeMap, AttributeValue};
use crate::style::serialize_style;

/// Attributes whose presence alone carries their meaning. These are always
/// written as `key="key"`, whatever value they were given.
const FORCED_BOOLEAN_ATTRIBUTES: [&str; 4] = ["disabled", "autocomplete", "selected", "checked"];

/// Returns true for keys that bind event handlers (`onClick`, `oninput`, ...)
/// or element references (`ref`). These never appear in markup.
pub(crate) fn is_binding_key(key: &str) -> bool {
    key.starts_with("on") || key == "ref"
}

fn is_forced_boolean(key: &str) -> bool {
    FORCED_BOOLEAN_ATTRIBUTES.contains(&key)
}

/// Serialize an element's attributes into a string that can be appended
/// directly after the tag name, like ` id="a" class="b"`. Returns an empty
/// string when no attribute produces output.
///
/// Values are written verbatim. Use [`crate::render_with_options`] to escape them.
pub fn serialize_attrs(attrs: &AttributeMap) -> String {
    let mut result = String::new();
    write_attrs(&mut result, attrs, false);
    result
}

/// Append the serialized attributes to `buffer`. Each emitted attribute is
/// preceded by exactly one space, which is the same as joining the fragments
/// with spaces and prefixing the whole run with one more.
pub(crate) fn write_attrs(buffer: &mut String, attrs: &AttributeMap, escape_values: bool) {
    for (key, value) in attrs {
        if is_binding_key(key) {
            continue;
        }

        if is_forced_boolean(key) {
            buffer.reserve(4 + key.len() * 2);
            buffer.push(' ');
            buffer.push_str(key);
            buffer.push_str("=\"");
            buffer.push_str(key);
            buffer.push('"');
            continue;
        }

        if value.is_falsy() {
            continue;
        }

        let text = match value {
            // Handlers stored under any other key still have no markup form.
            AttributeValue::Binding | AttributeValue::Empty => continue,
            AttributeValue::Style(style) if key == "style" => Cow::Owned(serialize_style(style)),
            AttributeValue::Style(_) => Cow::Borrowed("[object Object]"),
            AttributeValue::String(text) => Cow::Borrowed(text.as_str()),
            AttributeValue::Number(number) => Cow::Owned(format_number(*number)),
            AttributeValue::Bool(true) => Cow::Borrowed("true"),
            AttributeValue::Bool(false) => Cow::Borrowed("false"),
        };
        let name = if key == "className" { "class" } else { key };

        buffer.reserve(4 + name.len() + text.len());
        buffer.push(' ');
        buffer.push_str(name);
        buffer.push_str("=\"");
        if escape_values {
            push_escaped_attribute_value(buffer, &text);
        } else {
            buffer.push_str(&text);
        }
        buffer.push('"');
    }
}

#[cfg(test)]
mod test {
    use super::{is_binding_key, serialize_attrs, write_attrs};
    use crate::node::{AttributeMap, AttributeValue, StyleMap};

    #[test]
    fn test_empty() {
        assert_eq!("", serialize_attrs(&AttributeMap::new()));
    }

    #[test]
    fn test_order_is_preserved() {
        let attrs = AttributeMap::new()
            .with("id", "a")
            .with("className", "b")
            .with("title", "c");
        assert_eq!(r#" id="a" class="b" title="c""#, serialize_attrs(&attrs));
    }

    #[test]
    fn test_binding_keys() {
        assert!(is_binding_key("onClick"));
        assert!(is_binding_key("oninput"));
        // Anything starting with "on" counts, even when it isn't a handler.
        assert!(is_binding_key("one"));
        assert!(is_binding_key("ref"));
        assert!(!is_binding_key("refs"));
        assert!(!is_binding_key("button"));

        let attrs = AttributeMap::new()
            .with("onClick", AttributeValue::Binding)
            .with("ref", AttributeValue::Binding)
            .with("id", "z");
        assert_eq!(r#" id="z""#, serialize_attrs(&attrs));
    }

    #[test]
    fn test_binding_keys_are_filtered_before_forced_booleans() {
        let attrs = AttributeMap::new().with("onChecked", true);
        assert_eq!("", serialize_attrs(&attrs));
    }

    #[test]
    fn test_forced_booleans_ignore_value() {
        let attrs = AttributeMap::new()
            .with("disabled", false)
            .with("autocomplete", 0)
            .with("selected", AttributeValue::Empty)
            .with("checked", "");
        assert_eq!(
            r#" disabled="disabled" autocomplete="autocomplete" selected="selected" checked="checked""#,
            serialize_attrs(&attrs)
        );
    }

    #[test]
    fn test_falsy_values_are_skipped() {
        let attrs = AttributeMap::new()
            .with("hidden", false)
            .with("tabIndex", 0)
            .with("title", "")
            .with("alt", AttributeValue::Empty)
            .with("width", f64::NAN);
        assert_eq!("", serialize_attrs(&attrs));
    }

    #[test]
    fn test_value_coercion() {
        let attrs = AttributeMap::new()
            .with("hidden", true)
            .with("tabIndex", -1)
            .with("width", 12.5)
            .with("data-style", StyleMap::new().with("color", "red"));
        assert_eq!(
            r#" hidden="true" tabIndex="-1" width="12.5" data-style="[object Object]""#,
            serialize_attrs(&attrs)
        );
    }

    #[test]
    fn test_style() {
        let style = StyleMap::new()
            .with("backgroundColor", "red")
            .with("fontSize", 12);
        let attrs = AttributeMap::new().with("style", style);
        assert_eq!(
            r#" style="background-color:red;font-size:12;""#,
            serialize_attrs(&attrs)
        );

        // An empty style object is still a value, so the attribute is kept.
        let attrs = AttributeMap::new().with("style", StyleMap::new());
        assert_eq!(r#" style="""#, serialize_attrs(&attrs));

        let attrs = AttributeMap::new().with("style", "color:red");
        assert_eq!(r#" style="color:red""#, serialize_attrs(&attrs));
    }

    #[test]
    fn test_values_are_not_escaped_by_default() {
        let attrs = AttributeMap::new().with("title", r#"a "quote" & <tag>"#);
        assert_eq!(r#" title="a "quote" & <tag>""#, serialize_attrs(&attrs));
    }

    #[test]
    fn test_escaped_values() {
        let attrs = AttributeMap::new()
            .with("title", r#"a "quote" & <tag>"#)
            .with("style", StyleMap::new().with("fontFamily", "\"Fira Code\""));
        let mut buffer = String::new();
        write_attrs(&mut buffer, &attrs, true);
        assert_eq!(
            r#" title="a &quot;quote&quot; &amp; &lt;tag&gt;" style="font-family:&quot;Fira Code&quot;;""#,
            buffer
        );
    }
}
