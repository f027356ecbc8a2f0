// Repository scanning and ignore filtering
//
// The scanner walks a repository root, prunes ignored directories before
// descending into them, and returns the sorted list of supported files.

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// Names always excluded from scanning, matched as literal or prefix.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[
    "__pycache__",
    ".git",
    ".venv",
    "venv",
    "node_modules",
    ".pytest_cache",
    "dist",
    "build",
    ".DS_Store",
    ".docusaurus",
];

/// Suffixes of generated artifacts excluded from scanning.
pub const DEFAULT_IGNORED_SUFFIXES: &[&str] = &[".pyc", ".pyo", ".egg-info", "-docusaurus"];

/// Matches generated output directories from prior documentation runs,
/// e.g. `myproject-docs-1a2b3c4d`.
static GENERATED_DOCS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-docs-[a-f0-9]{8}$").expect("Invalid generated-docs regex"));

/// A file discovered by the scanner: repository-relative path plus the
/// language derived from its extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Slash-separated path relative to the scanned root
    pub path: String,
    /// Language tag derived from the extension
    pub language: Language,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, language: Language) -> Self {
        Self {
            path: path.into(),
            language,
        }
    }
}

/// Decides whether a single path segment is excluded from scanning.
///
/// Rules are applied in precedence order: the structural generated-docs
/// pattern, then literal/prefix names, then artifact suffixes. A match on
/// any ancestor directory excludes the whole subtree.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    names: Vec<String>,
    suffixes: Vec<String>,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self {
            names: DEFAULT_IGNORED_NAMES.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_IGNORED_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IgnoreFilter {
    /// Build a filter from the defaults plus extra literal entries.
    pub fn with_extra(extra: &[String]) -> Self {
        let mut filter = Self::default();
        filter.names.extend(extra.iter().cloned());
        filter
    }

    /// Check whether a path segment name must be excluded.
    pub fn is_ignored(&self, name: &str) -> bool {
        if GENERATED_DOCS.is_match(name) {
            return true;
        }

        if self.names.iter().any(|p| name == p || name.starts_with(p.as_str())) {
            return true;
        }

        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

/// Walks a repository tree and produces the ordered set of candidate files.
#[derive(Debug, Clone)]
pub struct Scanner {
    filter: IgnoreFilter,
    follow_links: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl Scanner {
    /// Create a scanner from scan settings.
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: IgnoreFilter::with_extra(&config.ignore),
            follow_links: config.follow_links,
        }
    }

    /// The ignore filter in use.
    pub fn filter(&self) -> &IgnoreFilter {
        &self.filter
    }

    /// Scan the repository rooted at `root`.
    ///
    /// Ignored directories are pruned before descent so their contents are
    /// never visited. Files are included only when their extension is in the
    /// supported table. The result is sorted lexicographically by relative
    /// path; unreadable entries are logged and skipped.
    pub fn scan(&self, root: &Path) -> Result<Vec<FileRecord>> {
        if !root.exists() {
            return Err(Error::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || e.file_name()
                        .to_str()
                        .map_or(false, |name| !self.filter.is_ignored(name))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(language) = Language::from_path(entry.path()) else {
                continue;
            };

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let path = relative
                .iter()
                .filter_map(|s| s.to_str())
                .collect::<Vec<_>>()
                .join("/");

            files.push(FileRecord::new(path, language));
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan(dir: &TempDir) -> Vec<FileRecord> {
        Scanner::default().scan(dir.path()).unwrap()
    }

    fn paths(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_generated_docs_pattern() {
        let filter = IgnoreFilter::default();
        assert!(filter.is_ignored("proj-docs-1a2b3c4d"));
        assert!(filter.is_ignored("another-docs-00ff00ff"));
        // 7 hex chars is not a generated docs dir
        assert!(!filter.is_ignored("proj-docs-1a2b3c4"));
        // uppercase hex is not matched
        assert!(!filter.is_ignored("proj-docs-1A2B3C4D"));
    }

    #[test]
    fn test_literal_and_prefix_names() {
        let filter = IgnoreFilter::default();
        assert!(filter.is_ignored("__pycache__"));
        assert!(filter.is_ignored(".git"));
        assert!(filter.is_ignored("node_modules"));
        // prefix semantics
        assert!(filter.is_ignored("build-output"));
        assert!(!filter.is_ignored("src"));
        assert!(!filter.is_ignored("rebuild"));
    }

    #[test]
    fn test_artifact_suffixes() {
        let filter = IgnoreFilter::default();
        assert!(filter.is_ignored("module.pyc"));
        assert!(filter.is_ignored("module.pyo"));
        assert!(filter.is_ignored("mypkg.egg-info"));
        assert!(filter.is_ignored("site-docusaurus"));
        assert!(!filter.is_ignored("module.py"));
    }

    #[test]
    fn test_extra_entries() {
        let filter = IgnoreFilter::with_extra(&["generated".to_string()]);
        assert!(filter.is_ignored("generated"));
        assert!(filter.is_ignored("generated_v2"));
        assert!(!filter.is_ignored("gen"));
    }

    #[test]
    fn test_scan_sorted_relative_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/zeta.py"), "x = 1").unwrap();
        fs::write(dir.path().join("src/alpha.py"), "y = 2").unwrap();
        fs::write(dir.path().join("main.go"), "package main").unwrap();

        let records = scan(&dir);
        assert_eq!(paths(&records), vec!["main.go", "src/alpha.py", "src/zeta.py"]);
    }

    #[test]
    fn test_scan_excludes_unsupported_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.py"), "x = 1").unwrap();
        fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("binary.exe"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("no_extension"), "data").unwrap();

        let records = scan(&dir);
        assert_eq!(paths(&records), vec!["app.py"]);
    }

    #[test]
    fn test_scan_prunes_ignored_directories() {
        let dir = TempDir::new().unwrap();
        let ignored = dir.path().join("node_modules/pkg");
        fs::create_dir_all(&ignored).unwrap();
        fs::write(ignored.join("index.js"), "module.exports = {}").unwrap();

        let docs = dir.path().join("proj-docs-1a2b3c4d");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("page.md"), "# docs").unwrap();

        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let records = scan(&dir);
        assert_eq!(paths(&records), vec!["app.js"]);
    }

    #[test]
    fn test_scan_excludes_ignored_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.py"), "x = 1").unwrap();
        fs::write(dir.path().join(".DS_Store"), "junk").unwrap();

        let records = scan(&dir);
        assert_eq!(paths(&records), vec!["app.py"]);
    }

    #[test]
    fn test_scan_records_language() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[a]").unwrap();
        fs::write(dir.path().join("lib.rs"), "use std::fmt;").unwrap();

        let records = scan(&dir);
        assert_eq!(records[0].language, Language::Toml);
        assert_eq!(records[1].language, Language::Rust);
    }

    #[test]
    fn test_scan_missing_root() {
        let result = Scanner::default().scan(Path::new("/nonexistent/repo"));
        assert!(matches!(result, Err(Error::PathNotFound(_))));
    }

    #[test]
    fn test_scan_root_is_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.py");
        fs::write(&file, "x = 1").unwrap();

        let result = Scanner::default().scan(&file);
        assert!(matches!(result, Err(Error::NotADirectory(_))));
    }

    #[test]
    fn test_scan_empty_repository() {
        let dir = TempDir::new().unwrap();
        assert!(scan(&dir).is_empty());
    }
}
