pub mod attributes;

pub use attributes::{escape_attribute, escape_text, jsx_attribute_name};

use crate::types::ShapeNode;

/// Spaces added per nesting level
const INDENT_STEP: usize = 2;

/// Render the children of `root` as JSX, skipping the root element itself
///
/// The root `<svg>` wrapper is supplied by the component template, so only
/// its children are rendered, each starting at `indent` spaces and joined
/// by newlines.
///
/// # Examples
/// ```
/// use svg2tsx::jsx::render_children;
/// use svg2tsx::types::ShapeNode;
///
/// let root = ShapeNode::new("svg")
///     .with_child(ShapeNode::new("rect").with_attr("fill-rule", "evenodd"));
///
/// assert_eq!(
///     render_children(&root, 2),
///     "  <rect\n    fillRule=\"evenodd\"\n  />"
/// );
/// ```
pub fn render_children(root: &ShapeNode, indent: usize) -> String {
    root.children
        .iter()
        .map(|child| render_node(child, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one node and its subtree as JSX
///
/// Every attribute goes on its own line one step deeper than the tag.
/// Nodes without children or text are self-closing; otherwise children
/// (and escaped text) are rendered one step deeper between the open and
/// close tags.
pub fn render_node(node: &ShapeNode, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let inner_pad = " ".repeat(indent + INDENT_STEP);

    let mut attrs = String::new();
    for (name, value) in &node.attributes {
        attrs.push('\n');
        attrs.push_str(&inner_pad);
        attrs.push_str(jsx_attribute_name(name));
        attrs.push_str("=\"");
        attrs.push_str(&escape_attribute(value));
        attrs.push('"');
    }

    if node.children.is_empty() && node.text.is_none() {
        return format!("{pad}<{tag}{attrs}\n{pad}/>", tag = node.tag);
    }

    let mut inner: Vec<String> = Vec::new();
    if let Some(text) = &node.text {
        inner.push(format!("{}{}", inner_pad, escape_text(text)));
    }
    inner.extend(
        node.children
            .iter()
            .map(|child| render_node(child, indent + INDENT_STEP)),
    );

    format!(
        "{pad}<{tag}{attrs}\n{pad}>\n{inner}\n{pad}</{tag}>",
        tag = node.tag,
        inner = inner.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;

    #[test]
    fn test_self_closing() {
        let rect = ShapeNode::new("rect")
            .with_attr("x", "1")
            .with_attr("y", "2")
            .with_attr("fill", "currentColor");

        assert_eq!(
            render_node(&rect, 6),
            "      <rect\n        x=\"1\"\n        y=\"2\"\n        fill=\"currentColor\"\n      />"
        );
    }

    #[test]
    fn test_no_attributes() {
        assert_eq!(render_node(&ShapeNode::new("g"), 0), "<g\n/>");
    }

    #[test]
    fn test_nested_indentation() {
        let group = ShapeNode::new("g")
            .with_attr("stroke-width", "2")
            .with_child(
                ShapeNode::new("g").with_child(ShapeNode::new("path").with_attr("d", "M0 0")),
            );

        let expected = [
            "    <g",
            "      strokeWidth=\"2\"",
            "    >",
            "      <g",
            "      >",
            "        <path",
            "          d=\"M0 0\"",
            "        />",
            "      </g>",
            "    </g>",
        ]
        .join("\n");

        assert_eq!(render_node(&group, 4), expected);
    }

    #[test]
    fn test_text_content() {
        let mut text = ShapeNode::new("text").with_attr("font-size", "4");
        text.text = Some("a<b {c}".to_string());

        let expected = [
            "<text",
            "  fontSize=\"4\"",
            ">",
            "  a&lt;b {'{'}c{'}'}",
            "</text>",
        ]
        .join("\n");

        assert_eq!(render_node(&text, 0), expected);
    }

    #[test]
    fn test_root_skipped_and_children_joined() {
        let root = ShapeNode::new("svg")
            .with_attr("viewBox", "0 0 8 8")
            .with_child(ShapeNode::new("rect"))
            .with_child(ShapeNode::new("path"));

        assert_eq!(render_children(&root, 2), "  <rect\n  />\n  <path\n  />");
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(render_children(&ShapeNode::new("svg"), 6), "");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let node = ShapeNode::new("g").with_attr("data-label", "a \"b\" & c");
        assert_eq!(
            render_node(&node, 0),
            "<g\n  data-label=\"a &quot;b&quot; &amp; c\"\n/>"
        );
    }

    #[test]
    fn test_reparse_structurally_equivalent() {
        let source = r##"<svg viewBox="0 0 16 16"><g fill-rule="evenodd" clip-rule="evenodd"><rect x="1" y="2" width="3" height="4" fill="currentColor"/><path d="M0 0h1" stroke-width="2"/></g><rect x="5" y="5" width="1" height="1"/></svg>"##;
        let root = parse_svg(source).unwrap();

        let jsx = render_children(&root, 2);
        let reparsed = parse_svg(&format!("<svg>\n{}\n</svg>", jsx)).unwrap();

        assert_eq!(reparsed.children.len(), root.children.len());
        for (original, rendered) in root.descendants().skip(1).zip(reparsed.descendants().skip(1)) {
            assert_eq!(original.tag, rendered.tag);
            assert_eq!(original.children.len(), rendered.children.len());
            let expected: Vec<&str> = original
                .attributes
                .keys()
                .map(|k| jsx_attribute_name(k))
                .collect();
            let actual: Vec<&str> = rendered.attributes.keys().map(String::as_str).collect();
            assert_eq!(expected, actual);
            for (name, value) in &original.attributes {
                assert_eq!(rendered.attr(jsx_attribute_name(name)), Some(value.as_str()));
            }
        }
        assert_eq!(root.descendants().count(), reparsed.descendants().count());
    }
}
