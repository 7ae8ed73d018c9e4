//! # svg2tsx
//!
//! A library for normalizing pixel-art SVG icons and wrapping them in React
//! TSX components.
//!
//! Hand-exported icons often position every pixel with fractional
//! `matrix(...)`/`translate(...)` transforms and carry a dark full-canvas
//! backdrop. Normalization resolves those transforms into integer
//! `x`/`y`/`width`/`height`, drops the backdrop, animations and style blocks,
//! and swaps white fills for `currentColor` so the icon follows the theme.
//!
//! ## Example
//!
//! ```
//! use svg2tsx::{convert, normalize_svg};
//!
//! let svg = r##"<svg viewBox="0 0 120 120">
//!   <rect width="100%" height="100%" fill="#1a1a1a"/>
//!   <rect width="1" height="1" fill="#fff" transform="matrix(2 0 0 2 10 10)"/>
//! </svg>"##;
//!
//! let icon = normalize_svg(svg).unwrap();
//! assert_eq!(icon.root.children.len(), 1);
//! assert_eq!(icon.root.children[0].attr("x"), Some("10"));
//!
//! let tsx = convert(svg, "PixelIcon").unwrap();
//! assert!(tsx.contains("export default function PixelIcon("));
//! ```

pub mod batch;
pub mod component;
pub mod error;
pub mod jsx;
pub mod parser;
pub mod svg;
pub mod transformations;
pub mod types;

// Re-export commonly used items
pub use error::{IconError, Result};
pub use types::{CanvasBox, Diagnostic, NormalizedIcon, ShapeNode};

/// Parse and normalize one icon
///
/// # Arguments
/// * `text` - SVG markup of a single icon
///
/// # Returns
/// * `Ok(NormalizedIcon)` - The normalized tree, its canvas and any diagnostics
/// * `Err(IconError::Parse)` - If the markup is not well-formed; no partial tree is returned
pub fn normalize_svg(text: &str) -> Result<NormalizedIcon> {
    let mut root = parser::parse_svg(text)?;
    let canvas = parser::canvas_of(&root);
    let diagnostics = transformations::normalize_tree(&mut root, canvas);

    Ok(NormalizedIcon {
        root,
        canvas,
        diagnostics,
    })
}

/// Normalize an icon and generate its TSX component source
pub fn convert(text: &str, component_name: &str) -> Result<String> {
    let icon = normalize_svg(text)?;
    let markup = icon.to_jsx(component::MARKUP_INDENT);
    Ok(component::emit_component(
        component_name,
        &markup,
        icon.canvas,
    ))
}
