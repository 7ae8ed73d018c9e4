use crate::error::Result;
use crate::types::ShapeNode;
use roxmltree::{Document, Node, ParsingOptions};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse SVG markup into an owned shape tree
///
/// Only element nodes are kept; comments and processing instructions are
/// dropped. Namespace declarations are carried as `xmlns`/`xmlns:*`
/// attributes on the element that declares them, so that the tree can be
/// written back out and re-parsed. `xlink:href` is folded into plain `href`.
///
/// # Arguments
/// * `text` - UTF-8 SVG document
///
/// # Returns
/// * `Ok(ShapeNode)` - The root element with all descendants
/// * `Err(IconError::Parse)` - If the markup is not well-formed XML
///
/// # Examples
/// ```
/// use svg2tsx::parser::parse_svg;
///
/// let root = parse_svg(r#"<svg viewBox="0 0 10 10"><rect width="2"/></svg>"#).unwrap();
/// assert_eq!(root.tag, "svg");
/// assert_eq!(root.children[0].attr("width"), Some("2"));
/// ```
pub fn parse_svg(text: &str) -> Result<ShapeNode> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    Ok(build_node(doc.root_element()))
}

/// Recursively convert a roxmltree element into a ShapeNode
fn build_node(node: Node<'_, '_>) -> ShapeNode {
    let mut shape = ShapeNode::new(node.tag_name().name());

    for (prefix, uri) in declared_namespaces(node) {
        let key = match prefix {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        shape.attributes.insert(key, uri);
    }

    for attr in node.attributes() {
        let name = match attr.namespace() {
            None | Some(XLINK_NS) => attr.name().to_string(),
            Some(XML_NS) => format!("xml:{}", attr.name()),
            Some(uri) => match node.lookup_prefix(uri) {
                Some(prefix) => format!("{}:{}", prefix, attr.name()),
                None => attr.name().to_string(),
            },
        };
        shape.attributes.insert(name, attr.value().to_string());
    }

    shape.text = node
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    shape.children = node
        .children()
        .filter(|child| child.is_element())
        .map(build_node)
        .collect();

    shape
}

/// Namespaces declared on this element (in scope here but not on the parent)
fn declared_namespaces(node: Node<'_, '_>) -> Vec<(Option<String>, String)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
        .collect()
}
