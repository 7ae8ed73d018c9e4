use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("XML parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Icon file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;
