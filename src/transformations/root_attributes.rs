use crate::types::ShapeNode;

/// Authoring-tool attributes stripped from the root `<svg>`
const ROOT_ATTRIBUTES_REMOVED: &[&str] = &[
    "id",
    "project-id",
    "export-id",
    "cached",
    "xmlns:xlink",
    "text-rendering",
];

const SHAPE_RENDERING: &str = "shape-rendering";
const SMOOTH_RENDERING: &str = "geometricPrecision";
const CRISP_RENDERING: &str = "crispEdges";

/// Clean up the root element's attributes
///
/// Removes editor metadata (ids, export/cache markers, the xlink namespace
/// declaration, text-rendering hints) from the root only, and makes
/// `shape-rendering` deterministic: `geometricPrecision` becomes
/// `crispEdges`, and a missing value is set to `crispEdges`. Other explicit
/// values are left alone. Nested elements are never touched.
///
/// # Examples
/// ```
/// use svg2tsx::transformations::clean_root_attributes;
/// use svg2tsx::types::ShapeNode;
///
/// let mut root = ShapeNode::new("svg")
///     .with_attr("id", "svg123")
///     .with_attr("viewBox", "0 0 120 120");
/// clean_root_attributes(&mut root);
///
/// assert!(root.attr("id").is_none());
/// assert_eq!(root.attr("shape-rendering"), Some("crispEdges"));
/// ```
pub fn clean_root_attributes(root: &mut ShapeNode) {
    for name in ROOT_ATTRIBUTES_REMOVED {
        root.attributes.shift_remove(*name);
    }

    let rendering = root.attr(SHAPE_RENDERING);
    if rendering.is_none() || rendering == Some(SMOOTH_RENDERING) {
        root.attributes
            .insert(SHAPE_RENDERING.to_string(), CRISP_RENDERING.to_string());
    }
}
