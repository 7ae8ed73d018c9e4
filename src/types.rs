use indexmap::IndexMap;
use std::fmt;

/// Element attributes, in document order
pub type Attributes = IndexMap<String, String>;

/// Classification of an element tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Svg,
    Rect,
    Group,
    Path,
    /// `animate`, `animateTransform`, `animateMotion`, `animateColor`, `set`
    Animation,
    Style,
    Other,
}

const TAG_KINDS: &[(&str, TagKind)] = &[
    ("svg", TagKind::Svg),
    ("rect", TagKind::Rect),
    ("g", TagKind::Group),
    ("path", TagKind::Path),
    ("animate", TagKind::Animation),
    ("animateTransform", TagKind::Animation),
    ("animateMotion", TagKind::Animation),
    ("animateColor", TagKind::Animation),
    ("set", TagKind::Animation),
    ("style", TagKind::Style),
];

impl TagKind {
    /// Look up the kind of a local tag name
    pub fn of(tag: &str) -> Self {
        TAG_KINDS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
            .unwrap_or(TagKind::Other)
    }
}

/// One element of a parsed shape tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeNode {
    /// Local tag name (namespace prefix stripped)
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<ShapeNode>,
    /// Trimmed inline text, `None` when empty
    pub text: Option<String>,
}

impl ShapeNode {
    /// Create an element with no attributes, children or text
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder-style attribute setter, mostly useful in tests
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: ShapeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> TagKind {
        TagKind::of(&self.tag)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Depth-first iterator over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a ShapeNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ShapeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Logical coordinate space of an icon, taken from the root `viewBox`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBox {
    pub width: f64,
    pub height: f64,
}

impl CanvasBox {
    pub const DEFAULT_SIZE: f64 = 120.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas dimensions rounded to whole pixels, as re-declared in the component viewBox
    pub fn rounded(&self) -> (i64, i64) {
        (
            self.width.round_ties_even() as i64,
            self.height.round_ties_even() as i64,
        )
    }
}

impl Default for CanvasBox {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }
}

/// Parsed `transform` attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AffineTransform {
    Matrix {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
    Translate {
        tx: f64,
        ty: f64,
    },
}

/// Integer-rounded absolute rectangle geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGeometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Recoverable problem found while normalizing an icon
///
/// Diagnostics never abort processing: the affected shape is left as it was
/// so the result is visibly wrong instead of silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Transform matches neither `matrix(...)` nor `translate(...)`
    UnrecognizedTransform { transform: String },
    /// Matrix with rotation or shear terms, which a rect's x/y/width/height cannot express
    ShearedMatrix { transform: String },
    /// Geometry attribute that is not a plain number
    InvalidGeometry { attribute: String, value: String },
    /// Dark-filled rect that does not cover enough of the canvas to be a background
    AmbiguousBackground { fill: String },
}

impl Diagnostic {
    /// Whether the shape was left in a state the author should look at
    ///
    /// A kept dark rect is usually just a dark pixel, so it is informational.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Diagnostic::AmbiguousBackground { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedTransform { transform } => {
                write!(f, "Unknown transform: {:?}", transform)
            }
            Diagnostic::ShearedMatrix { transform } => {
                write!(f, "Matrix with rotation/shear left unresolved: {:?}", transform)
            }
            Diagnostic::InvalidGeometry { attribute, value } => {
                write!(f, "Non-numeric {} {:?}, transform left unresolved", attribute, value)
            }
            Diagnostic::AmbiguousBackground { fill } => {
                write!(f, "Dark rect ({}) kept: too small to be a background", fill)
            }
        }
    }
}

/// Output of the normalization pipeline for one icon
#[derive(Debug, Clone)]
pub struct NormalizedIcon {
    /// Normalized root `<svg>` element
    pub root: ShapeNode,
    pub canvas: CanvasBox,
    pub diagnostics: Vec<Diagnostic>,
}

impl NormalizedIcon {
    /// JSX markup for the root's children, starting at `indent` spaces
    pub fn to_jsx(&self, indent: usize) -> String {
        crate::jsx::render_children(&self.root, indent)
    }

    /// The normalized icon as a standalone SVG document
    pub fn to_svg(&self) -> String {
        crate::svg::write_document(&self.root)
    }
}
