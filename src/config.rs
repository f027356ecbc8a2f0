use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub extract: ExtractConfig,
}

/// Scanner settings
///
/// The ignore lists default to the process-wide constants; a config file or
/// the CLI may append extra literal entries but never removes the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub ignore: Vec<String>,
    pub follow_links: bool,
}

/// Extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Lines examined after a class header when collecting methods in
    /// languages without a full parse.
    pub method_scan_window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            follow_links: false,
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            method_scan_window: crate::parser::METHOD_SCAN_WINDOW,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, ignore: Vec<String>, scan_window: Option<usize>) {
        if !ignore.is_empty() {
            self.scan.ignore.extend(ignore);
        }

        if let Some(w) = scan_window {
            self.extract.method_scan_window = w;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.extract.method_scan_window == 0 {
            return Err(Error::config_validation("method_scan_window must be at least 1"));
        }

        if self.extract.method_scan_window > 10_000 {
            return Err(Error::config_validation("method_scan_window cannot exceed 10000"));
        }

        if self.scan.ignore.iter().any(|p| p.is_empty()) {
            return Err(Error::config_validation("ignore entries cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.scan.ignore.is_empty());
        assert!(!config.scan.follow_links);
        assert_eq!(config.extract.method_scan_window, 100);
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[scan]
ignore = ["generated", "third_party"]
follow_links = true

[extract]
method_scan_window = 40
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scan.ignore, vec!["generated", "third_party"]);
        assert!(config.scan.follow_links);
        assert_eq!(config.extract.method_scan_window, 40);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/repoatlas.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = Config::load_or_default(Path::new("/nonexistent/repoatlas.toml"));
        assert_eq!(config.extract.method_scan_window, 100);
    }

    #[test]
    fn test_validation_zero_window() {
        let mut config = Config::default();
        config.extract.method_scan_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_huge_window() {
        let mut config = Config::default();
        config.extract.method_scan_window = 10_001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_ignore_entry() {
        let mut config = Config::default();
        config.scan.ignore.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_cli_ignore() {
        let mut config = Config::default();
        config.merge_cli(vec!["vendored".to_string()], None);
        assert_eq!(config.scan.ignore, vec!["vendored"]);
    }

    #[test]
    fn test_merge_cli_scan_window() {
        let mut config = Config::default();
        config.merge_cli(vec![], Some(25));
        assert_eq!(config.extract.method_scan_window, 25);
    }
}
