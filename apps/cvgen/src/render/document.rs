//! Document Assembler: one full generation run.
//!
//! Flow: load categories → sort collections → preamble → left column
//! (information, qualifications) → right column (experience, education) →
//! closing → write output.
//!
//! The whole document is built in memory first, so a loader or formatter
//! failure never touches the previous output file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::CvError;
use crate::records::{load_collection, load_singleton, sort_by_id_desc, Category, Record};
use crate::render::output::write_atomic;
use crate::render::sections::{
    format_education, format_experience, format_information, format_qualifications,
};
use crate::render::templates::{
    CLOSING, EDUCATION_HEADER, LEFT_COLUMN_END, PREAMBLE, WORK_EXPERIENCE_HEADER,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything the document needs, already loaded and sorted.
#[derive(Debug, Clone)]
pub struct CvSources {
    pub information: Record,
    pub qualifications: Record,
    /// Sorted by id, descending.
    pub experience: Vec<Record>,
    /// Sorted by id, descending.
    pub education: Vec<Record>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub experience_count: usize,
    pub education_count: usize,
    pub bytes_written: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the whole pipeline and replaces `output` with the rendered document.
pub fn generate(data_dir: &Path, output: &Path) -> Result<GenerationReport, CvError> {
    let sources = load_sources(data_dir)?;
    let document = assemble(&sources)?;

    write_atomic(output, document.as_bytes())?;
    info!("Wrote {} bytes to {}", document.len(), output.display());

    Ok(GenerationReport {
        output: output.to_path_buf(),
        experience_count: sources.experience.len(),
        education_count: sources.education.len(),
        bytes_written: document.len(),
    })
}

/// Loads every category the document renders and sorts the collections.
///
/// Experience and education must each yield at least one record.
pub fn load_sources(data_dir: &Path) -> Result<CvSources, CvError> {
    info!("Loading CV data from {}", data_dir.display());

    let information = load_singleton(data_dir, Category::Information)?;
    let qualifications = load_singleton(data_dir, Category::Qualifications)?;
    let experience = load_sorted_nonempty(data_dir, Category::Experience)?;
    let education = load_sorted_nonempty(data_dir, Category::Education)?;

    Ok(CvSources {
        information,
        qualifications,
        experience,
        education,
    })
}

/// Builds the complete LaTeX source from loaded records.
pub fn assemble(sources: &CvSources) -> Result<String, CvError> {
    let mut doc = String::from(PREAMBLE);

    // Left column
    doc.push_str(&format_information(&sources.information)?);
    doc.push_str(&format_qualifications(&sources.qualifications)?);
    doc.push_str(LEFT_COLUMN_END);

    // Right column
    doc.push_str(WORK_EXPERIENCE_HEADER);
    for record in &sources.experience {
        doc.push_str(&format_experience(record)?);
    }

    doc.push_str(EDUCATION_HEADER);
    for record in &sources.education {
        doc.push_str(&format_education(record)?);
    }

    doc.push_str(CLOSING);

    info!(
        "Assembled document: {} experience, {} education entries",
        sources.experience.len(),
        sources.education.len()
    );
    Ok(doc)
}

fn load_sorted_nonempty(data_dir: &Path, category: Category) -> Result<Vec<Record>, CvError> {
    let records = load_collection(data_dir, category)?;
    if records.is_empty() {
        return Err(CvError::EmptyCollection {
            category,
            path: category.source_path(data_dir),
        });
    }
    Ok(sort_by_id_desc(records))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
