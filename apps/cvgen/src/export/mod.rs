//! JSON export of the CV for a web front end. Shares loading and sorting with
//! the LaTeX document; the output carries no timestamps so repeated exports
//! are byte-identical.

pub mod site;

use std::path::Path;

use tracing::info;

use crate::errors::CvError;
use crate::records::{load_category, load_singleton, sort_by_id_desc, Category, Record};
use crate::render::load_sources;
use crate::render::output::write_atomic;

pub use site::{build_site_data, SiteData};

/// Records only the site export reads. Both may be missing on disk.
#[derive(Debug, Clone, Default)]
pub struct SiteSources {
    /// Sorted by id, descending.
    pub coursework: Vec<Record>,
    pub config: Option<Record>,
}

/// Loads every category, including the export-only ones, and builds the site data.
pub fn load_site_data(data_dir: &Path) -> Result<SiteData, CvError> {
    let sources = load_sources(data_dir)?;
    let site = load_site_sources(data_dir)?;
    build_site_data(&sources, &site)
}

pub fn load_site_sources(data_dir: &Path) -> Result<SiteSources, CvError> {
    Ok(SiteSources {
        coursework: load_optional_coursework(data_dir)?,
        config: load_optional_config(data_dir)?,
    })
}

/// Pretty-printed JSON with a trailing newline.
pub fn to_json(data: &SiteData) -> Result<String, CvError> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

/// Writes the site data JSON to `output`, returning the byte count.
pub fn export_to_file(data_dir: &Path, output: &Path) -> Result<usize, CvError> {
    let json = to_json(&load_site_data(data_dir)?)?;
    write_atomic(output, json.as_bytes())?;
    info!("Exported {} bytes of site data to {}", json.len(), output.display());
    Ok(json.len())
}

// A missing coursework directory means no coursework.
fn load_optional_coursework(data_dir: &Path) -> Result<Vec<Record>, CvError> {
    let dir = Category::Coursework.source_path(data_dir);
    match load_category(data_dir, Category::Coursework) {
        Ok(records) => Ok(sort_by_id_desc(records)),
        Err(CvError::FileNotFound { path }) if path == dir => {
            info!("No coursework directory at {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

// `general/config.yaml` may be absent or empty.
fn load_optional_config(data_dir: &Path) -> Result<Option<Record>, CvError> {
    let file = Category::SiteConfig.source_path(data_dir);
    match load_singleton(data_dir, Category::SiteConfig) {
        Ok(record) => Ok(Some(record)),
        Err(CvError::FileNotFound { path }) | Err(CvError::EmptyCollection { path, .. })
            if path == file =>
        {
            info!("No site config at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
