pub use attributes::serialize_attrs;
pub use error::{Error, Result};
pub use format::HtmlRenderer;
pub use node::{
    AttributeMap, AttributeValue, ElementNode, Node, OrderedMap, StyleMap, StyleValue,
};
pub use options::{EscapeMode, RenderOptions, VoidChildren};
pub use style::serialize_style;
pub use tags::{is_void_tag, VOID_TAGS};

mod attributes;
mod error;
pub mod format;
pub mod json;
pub mod node;
mod options;
mod style;
mod tags;

/// Render a node tree to an HTML string.
///
/// Text is written verbatim and void elements keep any children they were
/// given, matching the legacy output exactly.
pub fn render(node: &Node) -> String {
    render_with_options(node, &RenderOptions::default())
}

/// Render a node tree to an HTML string using the given options.
pub fn render_with_options(node: &Node, options: &RenderOptions) -> String {
    let _span = tracing::trace_span!(
        "render",
        root = match node {
            Node::Text(_) => "#text",
            Node::Element(element) => element.tag.as_str(),
        },
        escape = ?options.escape,
        void_children = ?options.void_children,
    )
    .entered();

    let mut renderer = HtmlRenderer::new(*options);
    renderer.format_node(node);
    renderer.finish()
}
