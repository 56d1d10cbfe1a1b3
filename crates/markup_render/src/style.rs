use crate::node::StyleMap;

/// Flatten a style map into an inline CSS string like `color:red;font-size:12;`.
/// Every declaration, including the last one, ends with a semicolon.
pub fn serialize_style(style: &StyleMap) -> String {
    let mut result = String::with_capacity(style.len() * 16);
    for (property, value) in style {
        result.push_str(&css_property_name(property));
        result.push(':');
        result.push_str(&value.to_string());
        result.push(';');
    }
    result
}

/// Convert a camelCase property name into its kebab-case CSS name.
///
/// This is a single left-to-right pass that only inserts a hyphen where an
/// ASCII lowercase letter is immediately followed by an ASCII uppercase
/// letter, consuming both so matches never overlap. The whole name is then
/// lowercased. Runs of uppercase letters are deliberately left joined, so
/// `fontSIZE` becomes `font-size` and `aBcD` becomes `a-bc-d`.
pub(crate) fn css_property_name(property: &str) -> String {
    let bytes = property.as_bytes();
    let mut hyphenated = String::with_capacity(property.len() + 4);
    let mut chunk_start = 0;
    let mut index = 0;
    while index + 1 < bytes.len() {
        if bytes[index].is_ascii_lowercase() && bytes[index + 1].is_ascii_uppercase() {
            hyphenated.push_str(&property[chunk_start..=index]);
            hyphenated.push('-');
            hyphenated.push(char::from(bytes[index + 1]));
            index += 2;
            chunk_start = index;
        } else {
            index += 1;
        }
    }
    hyphenated.push_str(&property[chunk_start..]);
    hyphenated.to_lowercase()
}

#[cfg(test)]
mod test {
    use super::{css_property_name, serialize_style};
    use crate::node::StyleMap;

    #[test]
    fn test_property_names() {
        assert_eq!("color", css_property_name("color"));
        assert_eq!("background-color", css_property_name("backgroundColor"));
        assert_eq!("border-top-left-radius", css_property_name("borderTopLeftRadius"));
        assert_eq!("webkit-transform", css_property_name("WebkitTransform"));
        assert_eq!("font-size", css_property_name("fontSIZE"));
        assert_eq!("a-bc-d", css_property_name("aBcD"));
        assert_eq!("a-bc", css_property_name("aBC"));
        assert_eq!("already-kebab", css_property_name("already-kebab"));
        assert_eq!("", css_property_name(""));
    }

    #[test]
    fn test_non_ascii_names_are_kept_intact() {
        assert_eq!("ünter-scheid", css_property_name("ünterScheid"));
        assert_eq!("éx", css_property_name("éX"));
    }

    #[test]
    fn test_serialize_style() {
        let style = StyleMap::new()
            .with("backgroundColor", "red")
            .with("fontSize", 12)
            .with("opacity", 0.5);

        assert_eq!(
            "background-color:red;font-size:12;opacity:0.5;",
            serialize_style(&style)
        );
    }

    #[test]
    fn test_empty_style() {
        assert_eq!("", serialize_style(&StyleMap::new()));
    }
}
