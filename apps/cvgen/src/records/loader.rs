//! Record Loader: reads YAML data files into generic records.
//!
//! Singleton categories come from one file, collection categories from every
//! `*.yaml` file in the category directory. Enumeration order is lexicographic
//! but carries no meaning; callers sort collections afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml_ng::{Mapping, Value};
use tracing::{debug, info, warn};

use crate::errors::CvError;
use crate::records::category::{Category, DATA_FILE_EXTENSION};
use crate::records::record::Record;

/// Loads every record of `category`.
///
/// Singletons are returned as a one-element vector so callers can uniformly
/// take the first element.
pub fn load_category(data_dir: &Path, category: Category) -> Result<Vec<Record>, CvError> {
    if category.is_singleton() {
        load_singleton(data_dir, category).map(|record| vec![record])
    } else {
        load_collection(data_dir, category)
    }
}

/// Loads the single record stored at `<data_dir>/general/<category>.yaml`.
///
/// The file may hold either a mapping or a one-element list of mappings.
pub fn load_singleton(data_dir: &Path, category: Category) -> Result<Record, CvError> {
    let path = category.source_path(data_dir);
    let mut records = records_from_document(category, &path, read_document(&path)?)?;

    if records.len() > 1 {
        warn!(
            "{} holds {} {} records; using the first",
            path.display(),
            records.len(),
            category
        );
    }
    if records.is_empty() {
        return Err(CvError::EmptyCollection { category, path });
    }

    info!("Loaded {} from {}", category, path.display());
    Ok(records.swap_remove(0))
}

/// Loads and concatenates the records of every data file in `<data_dir>/<category>/`.
pub fn load_collection(data_dir: &Path, category: Category) -> Result<Vec<Record>, CvError> {
    let dir = category.source_path(data_dir);
    let files = collection_files(&dir)?;

    let mut records = Vec::new();
    for file in &files {
        let loaded = records_from_document(category, file, read_document(file)?)?;
        debug!("{}: {} {} records", file.display(), loaded.len(), category);
        records.extend(loaded);
    }

    info!(
        "Loaded {} {} records from {} files in {}",
        records.len(),
        category,
        files.len(),
        dir.display()
    );
    Ok(records)
}

/// Lists the `*.yaml` files directly inside `dir`.
fn collection_files(dir: &Path) -> Result<Vec<PathBuf>, CvError> {
    let metadata = fs::metadata(dir).map_err(|e| CvError::from_read(dir, e))?;
    if !metadata.is_dir() {
        return Err(CvError::Malformed {
            path: dir.to_path_buf(),
            reason: "expected a directory of data files".to_string(),
        });
    }

    let pattern = format!(
        "{}/*.{DATA_FILE_EXTENSION}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let paths = glob::glob(&pattern).map_err(|e| CvError::Malformed {
        path: dir.to_path_buf(),
        reason: format!("invalid file pattern: {e}"),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!("Skipping non-file {}", path.display()),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(CvError::from_read(path, e.into()));
            }
        }
    }
    files.sort();
    Ok(files)
}

fn read_document(path: &Path) -> Result<Value, CvError> {
    let text = fs::read_to_string(path).map_err(|e| CvError::from_read(path, e))?;
    serde_yaml_ng::from_str(&text).map_err(|source| CvError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits a parsed document into records: a list of mappings, a single
/// mapping, or an empty document.
fn records_from_document(
    category: Category,
    path: &Path,
    document: Value,
) -> Result<Vec<Record>, CvError> {
    match document {
        Value::Null => {
            warn!("{} is empty", path.display());
            Ok(Vec::new())
        }
        Value::Mapping(fields) => Ok(vec![Record::new(category, path, fields)]),
        Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                into_mapping(item)
                    .map(|fields| Record::new(category, path, fields))
                    .ok_or_else(|| CvError::Malformed {
                        path: path.to_path_buf(),
                        reason: format!("item {index} is not a mapping of fields"),
                    })
            })
            .collect(),
        _ => Err(CvError::Malformed {
            path: path.to_path_buf(),
            reason: "expected a mapping or a list of mappings".to_string(),
        }),
    }
}

fn into_mapping(value: Value) -> Option<Mapping> {
    match value {
        Value::Mapping(fields) => Some(fields),
        _ => None,
    }
}
