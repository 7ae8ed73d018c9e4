use crate::error::{IconError, Result};
use crate::types::{Diagnostic, NormalizedIcon};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Icon files shipped with the app and the components generated from them
const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("gallery.svg", "GalleryIcon"),
    ("artists.svg", "ArtistsIcon"),
    ("moon.svg", "MoonIcon"),
    ("sun.svg", "SunIcon"),
    ("upload-download.svg", "UploadDownloadIcon"),
    ("trophy.svg", "TrophyIcon"),
    ("gear.svg", "GearIcon"),
    ("shield.svg", "ShieldIcon"),
    ("about.svg", "AboutIcon"),
    ("favourites-star.svg", "FavoritesIcon"),
];

/// Mapping from source SVG file name to generated component name
///
/// Read from a flat JSON object: `{"gear.svg": "GearIcon", ...}`.
/// Entries are processed in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IconManifest {
    entries: IndexMap<String, String>,
}

impl IconManifest {
    /// The built-in icon table
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ICONS
                .iter()
                .map(|(file, component)| (file.to_string(), component.to_string()))
                .collect(),
        }
    }

    /// Parse a manifest from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(file name, component name)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(file, component)| (file.as_str(), component.as_str()))
    }
}

/// One successfully generated component
#[derive(Debug)]
pub struct ConvertedIcon {
    pub source: PathBuf,
    pub output: PathBuf,
    pub component: String,
    pub rect_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertedIcon {
    /// Diagnostics that were logged at warn level
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedIcon>,
    /// Source file name and the error that made it fail
    pub failed: Vec<(String, IconError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert every icon listed in the manifest into a `.tsx` component
///
/// Creates `components_dir` if needed. Each icon is read, normalized,
/// wrapped and written before the next one starts. A parse or IO error only
/// skips that icon: it is logged and recorded in the report, and the batch
/// moves on.
///
/// # Returns
/// * `Ok(BatchReport)` - Per-icon results
/// * `Err(IconError)` - If the output directory cannot be created
pub fn run_batch(
    icons_dir: &Path,
    components_dir: &Path,
    manifest: &IconManifest,
) -> Result<BatchReport> {
    fs::create_dir_all(components_dir)?;

    let mut report = BatchReport::default();

    for (file_name, component) in manifest.iter() {
        info!("Processing: {}", file_name);

        match convert_file(icons_dir, components_dir, file_name, component) {
            Ok(converted) => {
                info!("  -> {}", converted.output.display());
                report.converted.push(converted);
            }
            Err(err) => {
                error!("  {}: {}", file_name, err);
                report.failed.push((file_name.to_string(), err));
            }
        }
    }

    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "Batch done"
    );

    Ok(report)
}

/// Convert a single manifest entry
fn convert_file(
    icons_dir: &Path,
    components_dir: &Path,
    file_name: &str,
    component: &str,
) -> Result<ConvertedIcon> {
    let source = icons_dir.join(file_name);
    if !source.is_file() {
        return Err(IconError::MissingInput { path: source });
    }

    let text = fs::read_to_string(&source)?;
    let icon = crate::normalize_svg(&text)?;

    let rect_count = count_rects(&icon);
    debug!("  Rects in output: {}", rect_count);

    let remaining = icon
        .root
        .descendants()
        .filter(|node| node.attr("transform").is_some())
        .count();
    if remaining > 0 {
        warn!("  {} transform attributes remain in {}", remaining, file_name);
    }

    let tsx = crate::component::emit_component(
        component,
        &icon.to_jsx(crate::component::MARKUP_INDENT),
        icon.canvas,
    );

    let output = components_dir.join(format!("{}.tsx", component));
    fs::write(&output, tsx)?;

    Ok(ConvertedIcon {
        source,
        output,
        component: component.to_string(),
        rect_count,
        diagnostics: icon.diagnostics,
    })
}

fn count_rects(icon: &NormalizedIcon) -> usize {
    icon.root
        .descendants()
        .filter(|node| node.tag == "rect")
        .count()
}
