use crate::types::{CanvasBox, ShapeNode};

/// Parse a `viewBox` value into canvas dimensions
///
/// Accepts `"<minx> <miny> <width> <height>"` with whitespace and/or comma
/// separators. The min-x/min-y components are ignored. A missing value, fewer
/// than four components, non-numeric components, or a size that is not
/// positive once rounded to whole pixels all fall back to the default
/// 120×120 canvas.
///
/// # Examples
/// ```
/// use svg2tsx::parser::parse_view_box;
///
/// let canvas = parse_view_box(Some("0 0 32 16"));
/// assert_eq!((canvas.width, canvas.height), (32.0, 16.0));
///
/// let canvas = parse_view_box(None);
/// assert_eq!((canvas.width, canvas.height), (120.0, 120.0));
/// ```
pub fn parse_view_box(value: Option<&str>) -> CanvasBox {
    value.and_then(parse_dimensions).unwrap_or_default()
}

/// Canvas of a parsed tree, from its root `viewBox`
pub fn canvas_of(root: &ShapeNode) -> CanvasBox {
    parse_view_box(root.attr("viewBox"))
}

fn parse_dimensions(value: &str) -> Option<CanvasBox> {
    let parts: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < 4 {
        return None;
    }

    let width: f64 = parts[2].parse().ok()?;
    let height: f64 = parts[3].parse().ok()?;

    let is_drawable = |size: f64| size.is_finite() && size.round_ties_even() >= 1.0;
    if !(is_drawable(width) && is_drawable(height)) {
        return None;
    }

    Some(CanvasBox::new(width, height))
}
