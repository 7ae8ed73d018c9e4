/// Normalization passes for parsed icon trees
///
/// Each concern lives in its own module and works on a single node or
/// attribute map; `normalize_tree` composes them in one traversal:
///
/// - `root_attributes`: Strip editor metadata from the root and force `crispEdges`
/// - `animation_removal`: Identify animation/style nodes and detach collected paths
/// - `background_removal`: Classify dark full-canvas backdrop rects
/// - `transform_resolution`: Resolve `matrix`/`translate` on rects into integer geometry
/// - `current_color`: Replace literal white fills with `currentColor`
/// - `corner_radii`: Drop zero `rx`/`ry`
pub mod animation_removal;
pub mod background_removal;
pub mod corner_radii;
pub mod current_color;
pub mod root_attributes;
pub mod transform_resolution;

// Re-export commonly used functions
pub use animation_removal::{is_animation_node, remove_paths};
pub use background_removal::{classify_rect, is_background_fill, BackgroundMatch};
pub use corner_radii::remove_zero_corner_radii;
pub use current_color::{is_white_fill, substitute_current_color, CURRENT_COLOR};
pub use root_attributes::clean_root_attributes;
pub use transform_resolution::{apply_transform, parse_transform, resolve_rect_transform};

use crate::types::{CanvasBox, Diagnostic, ShapeNode, TagKind};
use tracing::{debug, warn};

/// Normalize a parsed icon tree in place
///
/// Walks the tree once. Animation/style nodes and background rects are
/// collected as child-index paths and detached only after the walk, so no
/// child list is modified while it is being iterated. Surviving rects get
/// their transforms resolved and zero radii dropped; every surviving node has
/// white fills replaced by `currentColor`.
///
/// # Arguments
/// * `root` - Root `<svg>` element; it is never removed itself
/// * `canvas` - Canvas dimensions from the root `viewBox`
///
/// # Returns
/// Recoverable diagnostics, in document order
///
/// # Examples
/// ```
/// use svg2tsx::parser::parse_svg;
/// use svg2tsx::transformations::normalize_tree;
/// use svg2tsx::types::CanvasBox;
///
/// let mut root = parse_svg(
///     r##"<svg viewBox="0 0 120 120"><rect width="100%" height="100%" fill="#1a1a1a"/><rect fill="#fff" transform="translate(2 3)"/></svg>"##,
/// ).unwrap();
/// let diagnostics = normalize_tree(&mut root, CanvasBox::default());
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(root.children.len(), 1);
/// assert_eq!(root.children[0].attr("fill"), Some("currentColor"));
/// assert_eq!(root.children[0].attr("x"), Some("2"));
/// ```
pub fn normalize_tree(root: &mut ShapeNode, canvas: CanvasBox) -> Vec<Diagnostic> {
    clean_root_attributes(root);

    let mut normalizer = Normalizer {
        canvas,
        path: Vec::new(),
        removals: Vec::new(),
        diagnostics: Vec::new(),
    };
    normalizer.visit(root);

    let removed = remove_paths(root, normalizer.removals);
    debug!(removed, "detached animation, style and background nodes");

    normalizer.diagnostics
}

struct Normalizer {
    canvas: CanvasBox,
    /// Child indices from the root to the node being visited
    path: Vec<usize>,
    removals: Vec<Vec<usize>>,
    diagnostics: Vec<Diagnostic>,
}

impl Normalizer {
    fn visit(&mut self, node: &mut ShapeNode) {
        if !self.path.is_empty() && self.should_remove(node) {
            self.removals.push(self.path.clone());
            return;
        }

        if node.kind() == TagKind::Rect {
            self.resolve_geometry(node);
            remove_zero_corner_radii(node);
        }

        substitute_current_color(node);

        for (index, child) in node.children.iter_mut().enumerate() {
            self.path.push(index);
            self.visit(child);
            self.path.pop();
        }
    }

    fn should_remove(&mut self, node: &ShapeNode) -> bool {
        if is_animation_node(node) {
            debug!(tag = %node.tag, "removing animation node");
            return true;
        }

        if node.kind() != TagKind::Rect {
            return false;
        }

        match classify_rect(&node.attributes, self.canvas) {
            BackgroundMatch::Background => {
                debug!(fill = node.attr("fill"), "removing background rect");
                true
            }
            BackgroundMatch::Ambiguous => {
                let diagnostic = Diagnostic::AmbiguousBackground {
                    fill: node.attr("fill").unwrap_or_default().to_string(),
                };
                self.report(diagnostic);
                false
            }
            BackgroundMatch::NotBackground => false,
        }
    }

    fn resolve_geometry(&mut self, node: &mut ShapeNode) {
        match resolve_rect_transform(&node.attributes) {
            Ok(Some(resolved)) => node.attributes = resolved,
            Ok(None) => {}
            Err(diagnostic) => self.report(diagnostic),
        }
    }

    /// Log and record a diagnostic; the only place diagnostics are logged
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            warn!(%diagnostic, "rect left unresolved");
        } else {
            debug!(%diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }
}
