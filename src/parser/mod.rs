pub mod tree;
pub mod viewbox;

// Re-export commonly used items
pub use tree::parse_svg;
pub use viewbox::{canvas_of, parse_view_box};
