use crate::types::ShapeNode;

/// Literal white fills replaced by the theme color (exact match)
const WHITE_FILLS: &[&str] = &["#fff", "#FFF", "#ffffff", "#FFFFFF", "white"];

/// Fill value that inherits the surrounding text color
pub const CURRENT_COLOR: &str = "currentColor";

/// Whether a fill value is a literal white token
///
/// Surrounding whitespace is ignored, but the token must otherwise match
/// exactly: mixed-case spellings like `#Fff` are left alone.
pub fn is_white_fill(fill: &str) -> bool {
    WHITE_FILLS.contains(&fill.trim())
}

/// Replace a node's white fill with `currentColor`
///
/// Returns `true` when the fill was rewritten.
pub fn substitute_current_color(node: &mut ShapeNode) -> bool {
    match node.attributes.get_mut("fill") {
        Some(fill) if is_white_fill(fill) => {
            *fill = CURRENT_COLOR.to_string();
            true
        }
        _ => false,
    }
}
