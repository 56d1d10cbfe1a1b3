use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Tags that never receive a separate closing tag. These are rendered as
/// `<tag ... />` instead of `<tag ...></tag>`.
pub static VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static VOID_TAG_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| VOID_TAGS.iter().copied().collect());

/// Returns true if `tag` is a void (self-closing) element. Matching is exact
/// and case-sensitive.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAG_SET.contains(tag)
}

#[cfg(test)]
mod test {
    use super::{is_void_tag, VOID_TAGS};

    #[test]
    fn every_listed_tag_is_void() {
        for tag in VOID_TAGS {
            assert!(is_void_tag(tag), "{tag} should be void");
        }
    }

    #[test]
    fn normal_tags_are_not_void() {
        for tag in ["div", "span", "p", "a", "script", "style", "textarea", "", "BR", "image"] {
            assert!(!is_void_tag(tag), "{tag} should not be void");
        }
    }
}
