//! Repoatlas - Map dependencies and class structure across codebases
//!
//! Scans a repository, classifies files by language, extracts import and
//! class facts per file, and assembles a dependency graph plus a class
//! hierarchy for downstream documentation and diagram renderers.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod parser;
pub mod scanner;

// Re-export main types
pub use analysis::{
    AnalysisResult, Analyzer, ClassHierarchy, DependencyGraph, ReverseDependencyGraph,
};
pub use config::Config;
pub use error::{Error, Result};
pub use language::Language;
pub use parser::{extract_classes, extract_dependencies, ClassInfo, Extractors};
pub use scanner::{FileRecord, IgnoreFilter, Scanner};
