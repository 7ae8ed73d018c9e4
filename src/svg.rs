use crate::types::ShapeNode;

/// Write a shape tree back out as a compact SVG document
///
/// Attributes are written in their stored order (namespace declarations
/// included), values and text are XML-escaped, and empty elements are
/// self-closing. No whitespace is added between elements, so writing a
/// normalized tree, re-parsing and normalizing it again gives the same text.
///
/// # Examples
/// ```
/// use svg2tsx::svg::write_document;
/// use svg2tsx::types::ShapeNode;
///
/// let root = ShapeNode::new("svg")
///     .with_attr("viewBox", "0 0 8 8")
///     .with_child(ShapeNode::new("rect").with_attr("width", "1"));
///
/// assert_eq!(
///     write_document(&root),
///     r#"<svg viewBox="0 0 8 8"><rect width="1"/></svg>"#
/// );
/// ```
pub fn write_document(root: &ShapeNode) -> String {
    let mut out = String::new();
    write_node(root, &mut out);
    out
}

fn write_node(node: &ShapeNode, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);
    for (name, value) in &node.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value, true));
        out.push('"');
    }

    if node.children.is_empty() && node.text.is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text, false));
    }
    for child in &node.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

fn escape(value: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            '\n' if in_attribute => out.push_str("&#10;"),
            '\t' if in_attribute => out.push_str("&#9;"),
            '\r' if in_attribute => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}
