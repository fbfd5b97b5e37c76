use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of every data file the loader reads.
pub const DATA_FILE_EXTENSION: &str = "yaml";

/// Subdirectory of the data root that holds the singleton files.
const GENERAL_DIR: &str = "general";

/// The fixed set of data categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Information,
    Qualifications,
    Experience,
    Education,
    Coursework,
    /// Site export settings (`general/config.yaml`).
    SiteConfig,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Information => "information",
            Category::Qualifications => "qualifications",
            Category::Experience => "experience",
            Category::Education => "education",
            Category::Coursework => "coursework",
            Category::SiteConfig => "config",
        }
    }

    /// Singleton categories yield exactly one record from a single file.
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            Category::Information | Category::Qualifications | Category::SiteConfig
        )
    }

    /// Where this category's data lives under `data_dir`.
    ///
    /// Singletons: `<data_dir>/general/<category>.yaml`.
    /// Collections: the directory `<data_dir>/<category>/`.
    pub fn source_path(&self, data_dir: &Path) -> PathBuf {
        if self.is_singleton() {
            data_dir
                .join(GENERAL_DIR)
                .join(format!("{}.{DATA_FILE_EXTENSION}", self.as_str()))
        } else {
            data_dir.join(self.as_str())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_categories() {
        assert!(Category::Information.is_singleton());
        assert!(Category::Qualifications.is_singleton());
        assert!(!Category::Experience.is_singleton());
        assert!(!Category::Education.is_singleton());
        assert!(!Category::Coursework.is_singleton());
        assert!(Category::SiteConfig.is_singleton());
    }

    #[test]
    fn test_singleton_source_path_is_general_yaml() {
        let path = Category::Information.source_path(Path::new("data"));
        assert_eq!(path, PathBuf::from("data/general/information.yaml"));

        let path = Category::SiteConfig.source_path(Path::new("data"));
        assert_eq!(path, PathBuf::from("data/general/config.yaml"));
    }

    #[test]
    fn test_collection_source_path_is_directory() {
        let path = Category::Experience.source_path(Path::new("data"));
        assert_eq!(path, PathBuf::from("data/experience"));
    }
}
