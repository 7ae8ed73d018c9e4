use crate::types::ShapeNode;

const CORNER_RADII: &[&str] = &["rx", "ry"];

const ZERO_RADII: &[&str] = &["0", "0.0"];

/// Drop `rx`/`ry` attributes set to zero
///
/// A zero radius is the default for `<rect>`, so the attribute only adds
/// noise to the generated markup. Any other value is kept verbatim.
pub fn remove_zero_corner_radii(node: &mut ShapeNode) {
    for name in CORNER_RADII {
        let is_zero = node
            .attr(name)
            .is_some_and(|value| ZERO_RADII.contains(&value.trim()));
        if is_zero {
            node.attributes.shift_remove(*name);
        }
    }
}
