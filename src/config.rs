use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main agentreg configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub paths: PathsConfig,
    pub import: ImportConfig,
    pub popularity: PopularityConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Where documents are read from and artifacts are written to
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of agent profiles (`*.md`)
    pub source: PathBuf,
    /// Root of the per-record output tree
    pub output: PathBuf,
    /// Registry document
    pub registry: PathBuf,
    /// Directory for category shard documents
    pub categories: PathBuf,
}

/// Constants stamped onto every imported record
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Collection directory under the output root
    pub collection: String,
    pub author: String,
    pub license: String,
    pub homepage: String,
    /// Locale the profiles are written in
    pub source_locale: String,
    /// Locales every localized field is populated for
    pub locales: Vec<String>,
    pub version: String,
    pub changes: String,
    /// File name of the source copy next to metadata.json
    pub agent_file: String,
    /// File names in the source directory that are not profiles
    pub skip_files: Vec<String>,
    pub long_description_limit: usize,
}

/// Ranges for placeholder popularity values in category shards
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PopularityConfig {
    pub rating_min: f64,
    pub rating_max: f64,
    pub downloads_min: u64,
    pub downloads_max: u64,
    /// Fixed seed for reproducible shards
    pub seed: Option<u64>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("agents-main"),
            output: PathBuf::from("agents"),
            registry: PathBuf::from("registry.json"),
            categories: PathBuf::from("index").join("categories"),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            collection: "community".to_string(),
            author: "Community".to_string(),
            license: "MIT".to_string(),
            homepage: "https://github.com/chameleon-nexus/agents-registry".to_string(),
            source_locale: "en".to_string(),
            locales: vec!["en".to_string(), "zh".to_string(), "ja".to_string()],
            version: "1.0.0".to_string(),
            changes: "Imported from agents-main project".to_string(),
            agent_file: "agent.md".to_string(),
            skip_files: vec!["README.md".to_string(), "AGENTS.md".to_string()],
            long_description_limit: 200,
        }
    }
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            rating_min: 3.0,
            rating_max: 5.0,
            downloads_min: 50,
            downloads_max: 2000,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Ok(env_path) = std::env::var("AGENTREG_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from AGENTREG_CONFIG: {}", e);
                    }
                }
            }
        }

        if let Ok(dir) = std::env::var("AGENTREG_DIR") {
            let path = PathBuf::from(dir).join("agentreg.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from AGENTREG_DIR: {}", e);
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("agentreg").join("agentreg.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        let local_config = PathBuf::from("agentreg.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.paths.source, PathBuf::from("agents-main"));
        assert_eq!(config.paths.registry, PathBuf::from("registry.json"));
        assert_eq!(config.import.collection, "community");
        assert_eq!(config.import.long_description_limit, 200);
        assert!(config.import.skip_files.contains(&"README.md".to_string()));
    }

    #[test]
    fn test_default_popularity_ranges() {
        let popularity = PopularityConfig::default();
        assert_eq!(popularity.rating_min, 3.0);
        assert_eq!(popularity.rating_max, 5.0);
        assert_eq!(popularity.downloads_min, 50);
        assert_eq!(popularity.downloads_max, 2000);
        assert!(popularity.seed.is_none());
    }

    #[test]
    fn test_expand_path_no_expansion() {
        let path = PathBuf::from("/usr/local/share/agents");
        let expanded = Config::expand_path(&path);
        assert_eq!(expanded, PathBuf::from("/usr/local/share/agents"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/agents");
        let expanded = Config::expand_path(&path);
        assert!(!expanded.to_string_lossy().contains('~'));
        assert!(expanded.to_string_lossy().contains("agents"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
log_level: debug
paths:
  source: /tmp/profiles
popularity:
  seed: 42
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.paths.source, PathBuf::from("/tmp/profiles"));
        assert_eq!(config.paths.output, PathBuf::from("agents"));
        assert_eq!(config.popularity.seed, Some(42));
        assert_eq!(config.popularity.downloads_max, 2000);
        assert_eq!(config.import.author, "Community");
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("agentreg.yaml");
        fs::write(&path, "import:\n  collection: curated\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.import.collection, "curated");
    }

    #[test]
    fn test_load_explicit_path_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let yaml_str = serde_yaml::to_string(&config).expect("Failed to serialize");
        let parsed: Config = serde_yaml::from_str(&yaml_str).expect("Failed to deserialize");
        assert_eq!(parsed.import.locales, config.import.locales);
        assert_eq!(parsed.paths.categories, config.paths.categories);
    }
}
