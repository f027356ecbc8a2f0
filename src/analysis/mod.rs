// Analysis pipeline: scan, extract per file, aggregate into graphs

pub mod graph;
pub mod hierarchy;

pub use graph::{DependencyGraph, ReverseDependencyGraph};
pub use hierarchy::ClassHierarchy;

use crate::config::Config;
use crate::error::Result;
use crate::language::Language;
use crate::parser::{ClassInfo, Extractors};
use crate::scanner::{FileRecord, Scanner};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Result of analyzing a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Scanned files in sorted order
    pub files: Vec<FileRecord>,
    /// File → dependency identifiers
    pub graph: DependencyGraph,
    /// Aggregated class facts
    pub hierarchy: ClassHierarchy,
}

impl AnalysisResult {
    /// Summary counters for reporting.
    pub fn stats(&self) -> AnalysisStats {
        let mut by_language = BTreeMap::new();
        for record in &self.files {
            *by_language.entry(record.language).or_insert(0) += 1;
        }

        AnalysisStats {
            files: self.files.len(),
            by_language,
            dependency_edges: self.graph.edge_count(),
            classes: self.hierarchy.class_count(),
        }
    }
}

/// Summary counters over an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub files: usize,
    pub by_language: BTreeMap<Language, usize>,
    pub dependency_edges: usize,
    pub classes: usize,
}

/// Runs the scan → extract → aggregate pipeline.
pub struct Analyzer {
    scanner: Scanner,
    extractors: Extractors,
    verbose: bool,
}

impl Analyzer {
    /// Create an analyzer from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            scanner: Scanner::new(&config.scan),
            extractors: Extractors::with_scan_window(config.extract.method_scan_window),
            verbose: false,
        })
    }

    /// Create analyzer with a progress bar on extraction
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Analyze the repository rooted at `root`.
    ///
    /// Extraction is fanned out across files; per-file results are
    /// aggregated at a single point afterwards so every scanned file ends up
    /// with a graph entry, empty or not. A file that cannot be read or
    /// yields nothing never aborts the run.
    pub fn analyze(&self, root: &Path) -> Result<AnalysisResult> {
        let files = self.scanner.scan(root)?;

        let progress = if self.verbose {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let extracted: Vec<(String, BTreeSet<String>, Vec<ClassInfo>)> = files
            .par_iter()
            .map(|record| {
                let outcome = self.extract_file(root, record);
                if let Some(pb) = &progress {
                    pb.set_message(record.path.clone());
                    pb.inc(1);
                }
                outcome
            })
            .collect();

        if let Some(pb) = progress {
            pb.finish_with_message("Extraction complete");
        }

        let mut graph = DependencyGraph::new();
        let mut hierarchy = ClassHierarchy::new();
        for (path, dependencies, classes) in extracted {
            graph.insert(path.clone(), dependencies);
            hierarchy.insert(path, classes);
        }

        Ok(AnalysisResult {
            files,
            graph,
            hierarchy,
        })
    }

    fn extract_file(
        &self,
        root: &Path,
        record: &FileRecord,
    ) -> (String, BTreeSet<String>, Vec<ClassInfo>) {
        let full_path = root.join(&record.path);
        let source = match std::fs::read(&full_path) {
            // invalid UTF-8 is replaced rather than failing the file
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                log::warn!("could not read {}: {}", record.path, e);
                return (record.path.clone(), BTreeSet::new(), Vec::new());
            }
        };

        let dependencies = self.extractors.dependencies(&source, record.language);
        let classes = self
            .extractors
            .classes(&source, record.language, &record.path);

        (record.path.clone(), dependencies, classes)
    }

    /// Number of files a scan of `root` would include.
    pub fn file_count(&self, root: &Path) -> Result<usize> {
        self.scanner.scan(root).map(|f| f.len())
    }
}
