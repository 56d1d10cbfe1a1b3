use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings that change how a tree is rendered. The defaults reproduce the
/// legacy output byte for byte: nothing is escaped and children of void
/// elements are written in front of the closing ` />`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub escape: EscapeMode,
    pub void_children: VoidChildren,
}

impl RenderOptions {
    /// Read options from a JSON object like `{"escape": "all", "voidChildren": "drop"}`.
    /// Missing fields take their default values.
    pub fn from_json(config: &str) -> Result<RenderOptions> {
        serde_json::from_str(config).map_err(Error::InvalidOptions)
    }

    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_void_children(mut self, void_children: VoidChildren) -> Self {
        self.void_children = void_children;
        self
    }

    pub(crate) fn escapes_text(&self) -> bool {
        matches!(self.escape, EscapeMode::Text | EscapeMode::All)
    }

    pub(crate) fn escapes_attributes(&self) -> bool {
        matches!(self.escape, EscapeMode::Attributes | EscapeMode::All)
    }
}

/// Which parts of the output have HTML-significant characters escaped.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EscapeMode {
    /// Text and attribute values are written verbatim.
    #[default]
    None,
    /// Text leaves escape `&`, `<` and `>`.
    Text,
    /// Attribute values escape `&`, `<`, `>` and `"`.
    Attributes,
    /// Both text leaves and attribute values are escaped.
    All,
}

/// What to do with children given to a void element, which HTML does not allow.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VoidChildren {
    /// Write the children between the open tag's attributes and the closing
    /// ` />`, e.g. `<img src="x"t />`.
    #[default]
    Interleave,
    /// Skip the children entirely, e.g. `<img src="x" />`.
    Drop,
}

#[cfg(test)]
mod test {
    use super::{EscapeMode, RenderOptions, VoidChildren};
    use crate::error::Error;

    #[test]
    fn test_defaults_are_legacy() {
        let options = RenderOptions::default();
        assert_eq!(EscapeMode::None, options.escape);
        assert_eq!(VoidChildren::Interleave, options.void_children);
        assert!(!options.escapes_text());
        assert!(!options.escapes_attributes());
    }

    #[test]
    fn test_from_json() {
        let options = RenderOptions::from_json(r#"{"escape": "all", "voidChildren": "drop"}"#)
            .expect("options should parse");
        assert_eq!(
            RenderOptions::default()
                .with_escape(EscapeMode::All)
                .with_void_children(VoidChildren::Drop),
            options
        );
        assert!(options.escapes_text());
        assert!(options.escapes_attributes());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = RenderOptions::from_json(r#"{"escape": "text"}"#).unwrap();
        assert!(options.escapes_text());
        assert!(!options.escapes_attributes());
        assert_eq!(VoidChildren::Interleave, options.void_children);

        assert_eq!(RenderOptions::default(), RenderOptions::from_json("{}").unwrap());
    }

    #[test]
    fn test_invalid_json() {
        let result = RenderOptions::from_json(r#"{"escape": "sometimes"}"#);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }
}
