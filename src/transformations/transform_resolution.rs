use crate::types::{AffineTransform, Attributes, Diagnostic, ResolvedGeometry};
use regex::Regex;
use std::sync::OnceLock;

/// Largest b/c matrix term still treated as zero
const SHEAR_TOLERANCE: f64 = 1e-6;

const NUM: &str = r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";

fn re_matrix() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        let sep = r"(?:\s*,\s*|\s+)";
        let pattern = format!(
            r"^matrix\(\s*({n}){s}({n}){s}({n}){s}({n}){s}({n}){s}({n})\s*\)$",
            n = NUM,
            s = sep
        );
        Regex::new(&pattern).expect("matrix grammar is a valid regex")
    })
}

fn re_translate() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        let pattern = format!(
            r"^translate\(\s*({n})(?:(?:\s*,\s*|\s+)({n}))?\s*\)$",
            n = NUM
        );
        Regex::new(&pattern).expect("translate grammar is a valid regex")
    })
}

/// Parse a `transform` attribute value
///
/// `matrix(a b c d e f)` is tried first, then `translate(tx [ty])`. Numbers may
/// be separated by whitespace or commas. Anything else, including lists of
/// several transforms, returns `None`.
///
/// # Examples
/// ```
/// use svg2tsx::transformations::parse_transform;
/// use svg2tsx::types::AffineTransform;
///
/// assert_eq!(
///     parse_transform("translate(4, 2.5)"),
///     Some(AffineTransform::Translate { tx: 4.0, ty: 2.5 })
/// );
/// assert_eq!(parse_transform("skewX(10)"), None);
/// ```
pub fn parse_transform(value: &str) -> Option<AffineTransform> {
    let value = value.trim();

    if let Some(caps) = re_matrix().captures(value) {
        let n = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());
        return Some(AffineTransform::Matrix {
            a: n(1)?,
            b: n(2)?,
            c: n(3)?,
            d: n(4)?,
            e: n(5)?,
            f: n(6)?,
        });
    }

    if let Some(caps) = re_translate().captures(value) {
        let tx = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let ty = match caps.get(2) {
            Some(m) => m.as_str().parse::<f64>().ok()?,
            None => 0.0,
        };
        return Some(AffineTransform::Translate { tx, ty });
    }

    None
}

/// Apply a transform to a rect's original geometry
///
/// Only the diagonal and translation terms of a matrix are used; callers
/// reject matrices with rotation or shear beforehand.
pub fn apply_transform(
    transform: AffineTransform,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> ResolvedGeometry {
    match transform {
        AffineTransform::Matrix { a, d, e, f, .. } => ResolvedGeometry {
            x: round(e + x * a),
            y: round(f + y * d),
            width: round(width * a),
            height: round(height * d),
        },
        AffineTransform::Translate { tx, ty } => ResolvedGeometry {
            x: round(x + tx),
            y: round(y + ty),
            width: round(width),
            height: round(height),
        },
    }
}

/// Resolve the `transform` of a rect into absolute integer geometry
///
/// Returns a copy of the attributes with `transform` removed and
/// x/y/width/height replaced by rounded integers. Missing x/y default to 0,
/// missing width/height default to 1. Existing attributes keep their
/// position; new ones are appended.
///
/// # Returns
/// * `Ok(None)` - No transform, nothing to do
/// * `Ok(Some(attributes))` - The resolved attributes
/// * `Err(Diagnostic)` - The transform cannot be resolved; the caller keeps the
///   original attributes
///
/// # Examples
/// ```
/// use svg2tsx::transformations::resolve_rect_transform;
/// use svg2tsx::types::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.insert("width".into(), "5".into());
/// attrs.insert("height".into(), "5".into());
/// attrs.insert("transform".into(), "matrix(2 0 0 2 10 10)".into());
///
/// let resolved = resolve_rect_transform(&attrs).unwrap().unwrap();
/// assert_eq!(resolved.get("x").map(String::as_str), Some("10"));
/// assert_eq!(resolved.get("width").map(String::as_str), Some("10"));
/// assert!(resolved.get("transform").is_none());
/// ```
pub fn resolve_rect_transform(
    attributes: &Attributes,
) -> std::result::Result<Option<Attributes>, Diagnostic> {
    let Some(transform_value) = attributes.get("transform") else {
        return Ok(None);
    };

    let transform = parse_transform(transform_value).ok_or_else(|| {
        Diagnostic::UnrecognizedTransform {
            transform: transform_value.clone(),
        }
    })?;

    if let AffineTransform::Matrix { b, c, .. } = transform {
        if b.abs() > SHEAR_TOLERANCE || c.abs() > SHEAR_TOLERANCE {
            return Err(Diagnostic::ShearedMatrix {
                transform: transform_value.clone(),
            });
        }
    }

    let x = numeric_attr(attributes, "x", 0.0)?;
    let y = numeric_attr(attributes, "y", 0.0)?;
    let width = numeric_attr(attributes, "width", 1.0)?;
    let height = numeric_attr(attributes, "height", 1.0)?;

    let geometry = apply_transform(transform, x, y, width, height);

    let mut resolved = attributes.clone();
    resolved.shift_remove("transform");
    resolved.insert("x".to_string(), geometry.x.to_string());
    resolved.insert("y".to_string(), geometry.y.to_string());
    resolved.insert("width".to_string(), geometry.width.to_string());
    resolved.insert("height".to_string(), geometry.height.to_string());

    Ok(Some(resolved))
}

/// Read a numeric geometry attribute, with a default when absent
fn numeric_attr(
    attributes: &Attributes,
    name: &str,
    default: f64,
) -> std::result::Result<f64, Diagnostic> {
    match attributes.get(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Diagnostic::InvalidGeometry {
                attribute: name.to_string(),
                value: value.clone(),
            }),
    }
}

/// Round half to even, as integer pixels
fn round(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn get<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
        attributes.get(name).map(String::as_str)
    }

    #[test]
    fn test_parse_matrix() {
        assert_eq!(
            parse_transform("matrix(1.5 0 0 2 -3 4.25)"),
            Some(AffineTransform::Matrix {
                a: 1.5,
                b: 0.0,
                c: 0.0,
                d: 2.0,
                e: -3.0,
                f: 4.25
            })
        );
    }

    #[test]
    fn test_parse_matrix_with_commas_and_exponents() {
        assert_eq!(
            parse_transform(" matrix(1e1, 0, 0, 1E-1 ,.5,-2.) "),
            Some(AffineTransform::Matrix {
                a: 10.0,
                b: 0.0,
                c: 0.0,
                d: 0.1,
                e: 0.5,
                f: -2.0
            })
        );
    }

    #[test]
    fn test_parse_translate_single_argument() {
        assert_eq!(
            parse_transform("translate(7)"),
            Some(AffineTransform::Translate { tx: 7.0, ty: 0.0 })
        );
    }

    #[test]
    fn test_parse_rejects_other_grammars() {
        let cases = vec![
            "skewX(10)",
            "rotate(45)",
            "scale(2)",
            "matrix(1 0 0 1 0)",
            "translate()",
            "translate(1 2) scale(2)",
            "translate(a b)",
            "",
        ];
        for case in cases {
            assert_eq!(parse_transform(case), None, "case {:?}", case);
        }
    }

    #[test]
    fn test_matrix_resolution() {
        let input = attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "5"),
            ("height", "5"),
            ("transform", "matrix(2 0 0 2 10 10)"),
        ]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();

        assert_eq!(get(&resolved, "x"), Some("10"));
        assert_eq!(get(&resolved, "y"), Some("10"));
        assert_eq!(get(&resolved, "width"), Some("10"));
        assert_eq!(get(&resolved, "height"), Some("10"));
        assert!(resolved.get("transform").is_none());
    }

    #[test]
    fn test_matrix_fractional_scale() {
        // Typical exported pixel: 1x1 rect scaled by ~7.5 and offset by fractional amounts
        let input = attrs(&[
            ("width", "1"),
            ("height", "1"),
            ("transform", "matrix(7.4999 0 0 7.5001 29.9996 52.4997)"),
        ]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();

        assert_eq!(get(&resolved, "x"), Some("30"));
        assert_eq!(get(&resolved, "y"), Some("52"));
        assert_eq!(get(&resolved, "width"), Some("7"));
        assert_eq!(get(&resolved, "height"), Some("8"));
    }

    #[test]
    fn test_matrix_applies_scale_to_position() {
        let input = attrs(&[
            ("x", "3"),
            ("y", "4"),
            ("width", "2"),
            ("height", "2"),
            ("transform", "matrix(2 0 0 3 1 1)"),
        ]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();

        assert_eq!(get(&resolved, "x"), Some("7"));
        assert_eq!(get(&resolved, "y"), Some("13"));
        assert_eq!(get(&resolved, "width"), Some("4"));
        assert_eq!(get(&resolved, "height"), Some("6"));
    }

    #[test]
    fn test_translate_resolution() {
        let input = attrs(&[
            ("x", "2"),
            ("y", "3"),
            ("width", "4.4"),
            ("height", "6"),
            ("transform", "translate(10.2, -1.7)"),
        ]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();

        assert_eq!(get(&resolved, "x"), Some("12"));
        assert_eq!(get(&resolved, "y"), Some("1"));
        // Size is invariant under translation, only rounded
        assert_eq!(get(&resolved, "width"), Some("4"));
        assert_eq!(get(&resolved, "height"), Some("6"));
    }

    #[test]
    fn test_translate_invariant_sizes() {
        let sizes = vec![(1.0, 1.0), (7.5, 2.25), (119.0, 0.4)];
        for (width, height) in sizes {
            let input = attrs(&[
                ("width", &width.to_string()),
                ("height", &height.to_string()),
                ("transform", "translate(13.37 -4)"),
            ]);
            let resolved = resolve_rect_transform(&input).unwrap().unwrap();
            assert_eq!(
                get(&resolved, "width"),
                Some(round(width).to_string().as_str())
            );
            assert_eq!(
                get(&resolved, "height"),
                Some(round(height).to_string().as_str())
            );
            assert_eq!(get(&resolved, "x"), Some("13"));
            assert_eq!(get(&resolved, "y"), Some("-4"));
        }
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round(0.5), 0);
        assert_eq!(round(1.5), 2);
        assert_eq!(round(2.5), 2);
        assert_eq!(round(-0.5), 0);
        assert_eq!(round(-1.5), -2);
        assert_eq!(round(2.5001), 3);
    }

    #[test]
    fn test_translate_rounds_half_to_even() {
        let input = attrs(&[("transform", "translate(0.5 2.5)")]);
        let resolved = resolve_rect_transform(&input).unwrap().unwrap();
        assert_eq!(get(&resolved, "x"), Some("0"));
        assert_eq!(get(&resolved, "y"), Some("2"));
    }

    #[test]
    fn test_defaults_for_missing_geometry() {
        let input = attrs(&[("fill", "#fff"), ("transform", "translate(4 5)")]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();

        assert_eq!(get(&resolved, "x"), Some("4"));
        assert_eq!(get(&resolved, "y"), Some("5"));
        assert_eq!(get(&resolved, "width"), Some("1"));
        assert_eq!(get(&resolved, "height"), Some("1"));
        // Untouched attributes are preserved
        assert_eq!(get(&resolved, "fill"), Some("#fff"));
    }

    #[test]
    fn test_attribute_order() {
        let input = attrs(&[
            ("width", "1"),
            ("transform", "translate(1 1)"),
            ("fill", "red"),
            ("x", "0"),
        ]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();
        let keys: Vec<&str> = resolved.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["width", "fill", "x", "y", "height"]);
    }

    #[test]
    fn test_no_transform() {
        let input = attrs(&[("x", "1.5"), ("width", "2")]);
        assert_eq!(resolve_rect_transform(&input), Ok(None));
    }

    #[test]
    fn test_unrecognized_transform() {
        let input = attrs(&[("x", "1"), ("transform", "skewX(10)")]);

        let result = resolve_rect_transform(&input);

        assert_eq!(
            result,
            Err(Diagnostic::UnrecognizedTransform {
                transform: "skewX(10)".to_string()
            })
        );
    }

    #[test]
    fn test_sheared_matrix_rejected() {
        let input = attrs(&[("transform", "matrix(0.7071 0.7071 -0.7071 0.7071 0 0)")]);

        assert!(matches!(
            resolve_rect_transform(&input),
            Err(Diagnostic::ShearedMatrix { .. })
        ));
    }

    #[test]
    fn test_negligible_shear_accepted() {
        let input = attrs(&[("transform", "matrix(1 1e-9 0 1 3 3)")]);

        let resolved = resolve_rect_transform(&input).unwrap().unwrap();
        assert_eq!(get(&resolved, "x"), Some("3"));
    }

    #[test]
    fn test_percentage_geometry_is_invalid() {
        let input = attrs(&[("width", "100%"), ("transform", "translate(0 0.5)")]);

        assert_eq!(
            resolve_rect_transform(&input),
            Err(Diagnostic::InvalidGeometry {
                attribute: "width".to_string(),
                value: "100%".to_string()
            })
        );
    }
}
