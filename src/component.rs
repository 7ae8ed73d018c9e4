use crate::types::CanvasBox;

/// Indentation of the icon markup inside the generated `<svg>` element
pub const MARKUP_INDENT: usize = 6;

/// Default rendered height in pixels
pub const DEFAULT_SIZE: u32 = 18;

/// Generate a React TSX component wrapping an icon's JSX markup
///
/// The component takes an optional `size` (rendered height, default 18),
/// `className` and `style`. Width follows the canvas aspect ratio:
/// `Math.round(size * (W / H))`. The canvas is re-declared as
/// `viewBox="0 0 W H"` with W/H rounded to whole pixels.
///
/// # Arguments
/// * `name` - Component (and default export) name, e.g. `GearIcon`
/// * `markup` - JSX children rendered at `MARKUP_INDENT`
/// * `canvas` - Canvas dimensions of the icon
///
/// # Examples
/// ```
/// use svg2tsx::component::emit_component;
/// use svg2tsx::types::CanvasBox;
///
/// let tsx = emit_component("SunIcon", "", CanvasBox::new(120.0, 60.0));
/// assert!(tsx.contains("export default function SunIcon({ size = 18, className, style }: Props)"));
/// assert!(tsx.contains("const w = Math.round(size * (120 / 60));"));
/// assert!(tsx.contains(r#"viewBox="0 0 120 60""#));
/// ```
pub fn emit_component(name: &str, markup: &str, canvas: CanvasBox) -> String {
    let (width, height) = canvas.rounded();

    let mut tsx = String::new();
    tsx.push_str("interface Props {\n");
    tsx.push_str("  size?: number;\n");
    tsx.push_str("  className?: string;\n");
    tsx.push_str("  style?: React.CSSProperties;\n");
    tsx.push_str("}\n");
    tsx.push('\n');
    tsx.push_str(&format!(
        "// {name}: pixel-art icon, fill inherits currentColor for theme support.\n"
    ));
    tsx.push_str(&format!("// Original viewBox: {width}×{height}.\n"));
    tsx.push_str(&format!(
        "export default function {name}({{ size = {DEFAULT_SIZE}, className, style }}: Props) {{\n"
    ));
    tsx.push_str(&format!(
        "  const w = Math.round(size * ({width} / {height}));\n"
    ));
    tsx.push_str("  return (\n");
    tsx.push_str("    <svg\n");
    tsx.push_str("      xmlns=\"http://www.w3.org/2000/svg\"\n");
    tsx.push_str("      width={w}\n");
    tsx.push_str("      height={size}\n");
    tsx.push_str(&format!("      viewBox=\"0 0 {width} {height}\"\n"));
    tsx.push_str("      shapeRendering=\"crispEdges\"\n");
    tsx.push_str("      aria-hidden=\"true\"\n");
    tsx.push_str("      className={className}\n");
    tsx.push_str(
        "      style={{ display: 'inline-block', verticalAlign: 'middle', flexShrink: 0, ...style }}\n",
    );
    tsx.push_str("    >\n");
    if !markup.is_empty() {
        tsx.push_str(markup);
        tsx.push('\n');
    }
    tsx.push_str("    </svg>\n");
    tsx.push_str("  );\n");
    tsx.push_str("}\n");
    tsx
}

/// Default component name for an icon file: PascalCase stem + `Icon`
///
/// Non-alphanumeric characters separate words; a stem already ending in
/// `Icon` is not suffixed twice.
///
/// # Examples
/// ```
/// use svg2tsx::component::component_name_for;
///
/// assert_eq!(component_name_for("upload-download"), "UploadDownloadIcon");
/// assert_eq!(component_name_for("gear icon"), "GearIcon");
/// ```
pub fn component_name_for(stem: &str) -> String {
    let mut name: String = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "Icon");
    }
    if !name.ends_with("Icon") {
        name.push_str("Icon");
    }
    name
}
