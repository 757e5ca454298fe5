//! # HTML Codegen
//!
//! Serializes a [`Node`] tree to HTML for one output medium.

use super::Medium;
use super::node::{Element, Node};

/// Tags that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input"];

impl Node {
    /// Serialize to HTML. Non-printable nodes are dropped for [`Medium::Print`].
    pub fn to_html(&self, medium: Medium) -> String {
        let mut out = String::new();
        write_node(self, medium, &mut out);
        out
    }
}

fn write_node(node: &Node, medium: Medium, out: &mut String) {
    match node {
        Node::Text(t) => escape_into(t, out),
        Node::Element(el) => {
            if medium == Medium::Print && !el.printable {
                return;
            }
            write_element(el, medium, out);
        }
    }
}

fn write_element(el: &Element, medium: Medium, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);

    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&el.classes.join(" "), out);
        out.push('"');
    }

    if !el.styles.is_empty() {
        let style = el
            .styles
            .iter()
            .map(|(prop, value)| format!("{}: {}", prop, value))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(" style=\"");
        escape_into(&style, out);
        out.push('"');
    }

    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag) {
        return;
    }

    for child in &el.children {
        write_node(child, medium, out);
    }

    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(s, &mut out);
    out
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_with_class_style_attr() {
        let node = Node::div("tp-row")
            .style("height", "40px")
            .attr("data-id", "abc")
            .with_text("x");
        assert_eq!(
            node.to_html(Medium::Screen),
            r#"<div class="tp-row" style="height: 40px" data-id="abc">x</div>"#
        );
    }

    #[test]
    fn test_escaping() {
        let node = Node::div("v").attr("title", "a\"b").with_text("<b>&</b>");
        assert_eq!(
            node.to_html(Medium::Screen),
            r#"<div class="v" title="a&quot;b">&lt;b&gt;&amp;&lt;/b&gt;</div>"#
        );
    }

    #[test]
    fn test_void_tag() {
        let node = Node::el("img").attr("src", "x.png");
        assert_eq!(node.to_html(Medium::Screen), r#"<img src="x.png">"#);
    }

    #[test]
    fn test_print_drops_non_printable() {
        let node = Node::div("page")
            .child(Node::div("tp-drag-handle").no_print())
            .child(Node::div("content").with_text("kept"));
        let screen = node.to_html(Medium::Screen);
        let print = node.to_html(Medium::Print);
        assert!(screen.contains("tp-drag-handle"));
        assert!(!print.contains("tp-drag-handle"));
        assert!(print.contains("kept"));
    }
}
