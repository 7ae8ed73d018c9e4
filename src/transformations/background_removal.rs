use super::transform_resolution::resolve_rect_transform;
use crate::types::{Attributes, CanvasBox};

/// Dark fills used by exported canvas backdrops (compared case-insensitively)
const BACKGROUND_FILLS: &[&str] = &["#1a1a1a", "#000", "#000000", "black"];

/// Coverage required by the literal (pre-transform) check
const LITERAL_COVERAGE: f64 = 0.9;

/// Maximum offset from the origin accepted by the literal check
const LITERAL_ORIGIN_TOLERANCE: f64 = 0.1;

/// Coverage required once any transform has been resolved
const RESOLVED_COVERAGE: f64 = 0.8;

/// Outcome of classifying a rect against the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMatch {
    /// Dark, full-canvas rect: discard it
    Background,
    /// Dark fill but too small or offset: kept
    Ambiguous,
    NotBackground,
}

/// Whether a fill value is one of the dark background tokens
pub fn is_background_fill(fill: &str) -> bool {
    let fill = fill.trim();
    BACKGROUND_FILLS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(fill))
}

/// Cheap check on the literal attributes, before any transform is resolved
///
/// Matches a dark rect whose numeric geometry covers at least 90% of the
/// canvas in each dimension while sitting within 10% of the origin, or whose
/// width and height are both `"100%"`.
pub fn is_literal_background(attributes: &Attributes, canvas: CanvasBox) -> bool {
    if !has_background_fill(attributes) {
        return false;
    }

    if let (Some(x), Some(y), Some(width), Some(height)) = (
        number(attributes, "x", 0.0),
        number(attributes, "y", 0.0),
        number(attributes, "width", 0.0),
        number(attributes, "height", 0.0),
    ) {
        if width >= canvas.width * LITERAL_COVERAGE
            && height >= canvas.height * LITERAL_COVERAGE
            && x <= canvas.width * LITERAL_ORIGIN_TOLERANCE
            && y <= canvas.height * LITERAL_ORIGIN_TOLERANCE
        {
            return true;
        }
    }

    is_full_percentage(attributes)
}

/// Check after resolving the rect's transform (if any)
///
/// Matches a dark rect whose resolved size covers at least 80% of the canvas
/// in each dimension, or whose width and height are both `"100%"`.
pub fn is_resolved_background(attributes: &Attributes, canvas: CanvasBox) -> bool {
    if !has_background_fill(attributes) {
        return false;
    }

    let resolved = match resolve_rect_transform(attributes) {
        Ok(Some(resolved)) => resolved,
        Ok(None) => attributes.clone(),
        Err(_) => return is_full_percentage(attributes),
    };

    if let (Some(width), Some(height)) = (
        number(&resolved, "width", 0.0),
        number(&resolved, "height", 0.0),
    ) {
        if width >= canvas.width * RESOLVED_COVERAGE && height >= canvas.height * RESOLVED_COVERAGE
        {
            return true;
        }
    }

    is_full_percentage(attributes)
}

/// Classify a rect's attributes
///
/// The literal check runs first, then the resolved one; a rect flagged by
/// either is a background. Dark rects matching neither are ambiguous and
/// stay in the tree.
pub fn classify_rect(attributes: &Attributes, canvas: CanvasBox) -> BackgroundMatch {
    if !has_background_fill(attributes) {
        return BackgroundMatch::NotBackground;
    }

    if is_literal_background(attributes, canvas) || is_resolved_background(attributes, canvas) {
        BackgroundMatch::Background
    } else {
        BackgroundMatch::Ambiguous
    }
}

fn has_background_fill(attributes: &Attributes) -> bool {
    attributes
        .get("fill")
        .is_some_and(|fill| is_background_fill(fill))
}

fn is_full_percentage(attributes: &Attributes) -> bool {
    let is_full = |name: &str| attributes.get(name).is_some_and(|v| v.trim() == "100%");
    is_full("width") && is_full("height")
}

/// Numeric attribute value; `None` when present but not a number
fn number(attributes: &Attributes, name: &str, default: f64) -> Option<f64> {
    match attributes.get(name) {
        None => Some(default),
        Some(value) => value.trim().parse::<f64>().ok(),
    }
}
