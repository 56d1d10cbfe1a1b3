pub mod escape;

use crate::attributes::write_attrs;
use crate::format::escape::push_escaped_text;
use crate::node::{ElementNode, Node};
use crate::options::{RenderOptions, VoidChildren};
use crate::tags::is_void_tag;

/// Writes node trees as HTML into a single growing buffer.
///
/// Several roots can be rendered back to back into the same buffer before
/// calling [`HtmlRenderer::finish`]; they are concatenated with no separator.
pub struct HtmlRenderer {
    result: String,
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            result: String::new(),
            options,
        }
    }

    pub fn with_capacity(options: RenderOptions, capacity: usize) -> Self {
        Self {
            result: String::with_capacity(capacity),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn finish(self) -> String {
        self.result
    }

    pub fn format_node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.format_text(text),
            Node::Element(element) => self.format_element(element),
        }
    }

    pub fn format_text(&mut self, text: &str) {
        if self.options.escapes_text() {
            push_escaped_text(&mut self.result, text);
        } else {
            self.result.push_str(text);
        }
    }

    pub fn format_element(&mut self, element: &ElementNode) {
        let is_void = is_void_tag(&element.tag);

        self.open_tag(element, is_void);
        if is_void && !element.children.is_empty() {
            tracing::debug!(
                tag = %element.tag,
                children = element.children.len(),
                mode = ?self.options.void_children,
                "void element was given children"
            );
            if self.options.void_children == VoidChildren::Interleave {
                self.format_children(&element.children);
            }
        } else {
            self.format_children(&element.children);
        }
        self.close_tag(&element.tag, is_void);
    }

    fn format_children(&mut self, children: &[Node]) {
        for child in children {
            self.format_node(child);
        }
    }

    /// Writes `<tag` and the attributes. The `>` is only written for normal
    /// elements, since void elements are finished by [`HtmlRenderer::close_tag`].
    fn open_tag(&mut self, element: &ElementNode, is_void: bool) {
        self.result.push('<');
        self.result.push_str(&element.tag);
        write_attrs(
            &mut self.result,
            &element.attrs,
            self.options.escapes_attributes(),
        );
        if !is_void {
            self.result.push('>');
        }
    }

    fn close_tag(&mut self, tag: &str, is_void: bool) {
        if is_void {
            self.result.push_str(" />");
        } else {
            self.result.reserve(3 + tag.len());
            self.result.push_str("</");
            self.result.push_str(tag);
            self.result.push('>');
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod test {
    use super::HtmlRenderer;
    use crate::node::{ElementNode, Node};
    use crate::options::{EscapeMode, RenderOptions};

    #[test]
    fn test_multiple_roots_share_a_buffer() {
        let mut renderer = HtmlRenderer::default();
        renderer.format_node(&Node::from(ElementNode::new("hr")));
        renderer.format_node(&Node::text("between"));
        renderer.format_node(&Node::from(ElementNode::new("p").with_child("end")));
        assert_eq!("<hr />between<p>end</p>", renderer.finish());
    }

    #[test]
    fn test_text_escaping_only_touches_text() {
        let options = RenderOptions::default().with_escape(EscapeMode::Text);
        let mut renderer = HtmlRenderer::new(options);
        renderer.format_element(
            &ElementNode::new("p")
                .with_attr("title", "<b>")
                .with_child("1 < 2 & 3 > 2"),
        );
        assert_eq!(r#"<p title="<b>">1 &lt; 2 &amp; 3 &gt; 2</p>"#, renderer.finish());
    }
}
