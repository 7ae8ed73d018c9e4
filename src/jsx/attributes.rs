/// Hyphenated SVG attribute names and their React prop names
const JSX_ATTRIBUTE_NAMES: &[(&str, &str)] = &[
    ("clip-path", "clipPath"),
    ("clip-rule", "clipRule"),
    ("fill-opacity", "fillOpacity"),
    ("fill-rule", "fillRule"),
    ("font-family", "fontFamily"),
    ("font-size", "fontSize"),
    ("font-weight", "fontWeight"),
    ("shape-rendering", "shapeRendering"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-opacity", "strokeOpacity"),
    ("stroke-width", "strokeWidth"),
    ("text-anchor", "textAnchor"),
    ("text-rendering", "textRendering"),
    ("xml:space", "xmlSpace"),
];

/// React prop name for an SVG attribute; unknown names pass through
pub fn jsx_attribute_name(name: &str) -> &str {
    JSX_ATTRIBUTE_NAMES
        .iter()
        .find(|(svg, _)| *svg == name)
        .map(|(_, jsx)| *jsx)
        .unwrap_or(name)
}

/// Escape a value for a double-quoted JSX string attribute
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text content for use between JSX tags
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("{'{'}"),
            '}' => out.push_str("{'}'}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_translated() {
        assert_eq!(jsx_attribute_name("fill-rule"), "fillRule");
        assert_eq!(jsx_attribute_name("stroke-width"), "strokeWidth");
        assert_eq!(jsx_attribute_name("shape-rendering"), "shapeRendering");
        assert_eq!(jsx_attribute_name("xml:space"), "xmlSpace");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        for name in ["fill", "x", "d", "viewBox", "data-name", "aria-label", "vector-effect"] {
            assert_eq!(jsx_attribute_name(name), name);
        }
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("M0 0h1"), "M0 0h1");
        assert_eq!(escape_attribute(r#"say "hi" & bye"#), "say &quot;hi&quot; &amp; bye");
        // Braces are literal inside a quoted attribute
        assert_eq!(escape_attribute("{x}"), "{x}");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_text("{fill}"), "{'{'}fill{'}'}");
    }
}
