use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use svg2tsx::batch::{run_batch, IconManifest};
use svg2tsx::component::{component_name_for, emit_component, MARKUP_INDENT};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "svg2tsx")]
#[command(version, about = "Normalize pixel-art SVG icons into React TSX components")]
#[command(long_about = "Normalize pixel-art SVG icons into React TSX components\n\n\
    Resolves matrix/translate transforms on rects into integer geometry, removes\n\
    dark full-canvas backgrounds, animations and style blocks, and replaces white\n\
    fills with currentColor.\n\n\
    For a directory of icons (converts every entry of the icon manifest):\n  \
    svg2tsx icons-dir components-dir [-m manifest.json] [-v]\n\n\
    For a single icon:\n  \
    svg2tsx icon.svg [-o Icon.tsx] [-n IconName] [--svg] [-v]")]
struct Cli {
    /// Input .svg file or directory of icons
    input: PathBuf,

    /// Directory for generated components (required for directory input)
    output_dir: Option<PathBuf>,

    /// JSON manifest mapping icon file names to component names (directory input only)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Component name (single file; default: file stem in PascalCase + "Icon")
    #[arg(short, long)]
    name: Option<String>,

    /// Output file path (single file; default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the normalized SVG instead of a TSX component (single file)
    #[arg(long)]
    svg: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if cli.input.is_dir() {
        let output_dir = cli
            .output_dir
            .as_ref()
            .context("Directory input requires an output directory as second argument")?;

        if cli.output.is_some() || cli.name.is_some() || cli.svg {
            bail!("-o/--output, -n/--name and --svg only apply to single-file input");
        }

        handle_batch_mode(&cli.input, output_dir, cli.manifest.as_deref())
    } else {
        if cli.output_dir.is_some() || cli.manifest.is_some() {
            bail!("An output directory and --manifest only apply to directory input");
        }

        handle_file_mode(&cli)
    }
}

/// Convert every icon of the manifest found in `icons_dir`
fn handle_batch_mode(icons_dir: &Path, output_dir: &Path, manifest: Option<&Path>) -> Result<()> {
    let manifest = match manifest {
        Some(path) => IconManifest::load(path)
            .with_context(|| format!("Failed to load manifest: {}", path.display()))?,
        None => IconManifest::builtin(),
    };

    let report = run_batch(icons_dir, output_dir, &manifest).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    if !report.is_success() {
        bail!(
            "{} of {} icon(s) failed",
            report.failed.len(),
            manifest.len()
        );
    }

    info!("Done. All TSX components generated.");
    Ok(())
}

/// Convert one icon file to a component (or normalized SVG)
fn handle_file_mode(cli: &Cli) -> Result<()> {
    info!("Reading input file: {}", cli.input.display());

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    let icon = svg2tsx::normalize_svg(&text)
        .with_context(|| format!("Failed to normalize: {}", cli.input.display()))?;

    let output = if cli.svg {
        icon.to_svg() + "\n"
    } else {
        let name = match &cli.name {
            Some(name) => name.clone(),
            None => {
                let stem = cli
                    .input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default();
                component_name_for(stem)
            }
        };
        emit_component(&name, &icon.to_jsx(MARKUP_INDENT), icon.canvas)
    };

    match cli.output.as_ref() {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Written: {}", path.display());
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
