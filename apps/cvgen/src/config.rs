use std::path::PathBuf;

/// Run configuration loaded from environment variables.
/// Every value is optional; defaults reproduce the fixed `data/` → `cv.tex` layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub export_output: PathBuf,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            output: PathBuf::from("cv.tex"),
            export_output: PathBuf::from("cv.json"),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            data_dir: var("CVGEN_DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            output: var("CVGEN_OUTPUT").map(PathBuf::from).unwrap_or(defaults.output),
            export_output: var("CVGEN_EXPORT_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_output),
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output, PathBuf::from("cv.tex"));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CVGEN_DATA_DIR", "/srv/cv/data"),
            ("CVGEN_OUTPUT", "build/cv.tex"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/srv/cv/data"));
        assert_eq!(config.output, PathBuf::from("build/cv.tex"));
        assert_eq!(config.export_output, PathBuf::from("cv.json"));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[("CVGEN_OUTPUT", "  ")]));
        assert_eq!(config.output, PathBuf::from("cv.tex"));
    }
}
