// Dependency graph built from per-file import sets

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from file path to the ordered set of dependency identifiers the
/// file declares. Identifiers are raw strings from import/include/use
/// statements; they may or may not resolve to another file in the
/// repository.
///
/// Every scanned file has an entry, possibly empty. The graph is rebuilt
/// from scratch on every scan, never mutated incrementally. Ordered
/// containers keep repeated runs byte-identical when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    files: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from per-file dependency sets.
    pub fn build(entries: impl IntoIterator<Item = (String, BTreeSet<String>)>) -> Self {
        Self {
            files: entries.into_iter().collect(),
        }
    }

    /// Record the dependency set for a file, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, dependencies: BTreeSet<String>) {
        self.files.insert(path.into(), dependencies);
    }

    /// The dependency set for a file, if the file was scanned.
    pub fn dependencies_of(&self, path: &str) -> Option<&BTreeSet<String>> {
        self.files.get(path)
    }

    /// Whether a file was scanned (a file with no dependencies still has an
    /// entry).
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Iterate over `(file, dependency set)` in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.files.iter()
    }

    /// Number of file entries.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of file → dependency edges.
    pub fn edge_count(&self) -> usize {
        self.files.values().map(|deps| deps.len()).sum()
    }

    /// Derive the reverse mapping: dependency identifier → files declaring
    /// it. Always derived, never built independently, so it cannot drift
    /// from the forward map.
    pub fn reverse(&self) -> ReverseDependencyGraph {
        let mut dependents: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (file, deps) in &self.files {
            for dep in deps {
                dependents
                    .entry(dep.clone())
                    .or_default()
                    .insert(file.clone());
            }
        }

        ReverseDependencyGraph { dependents }
    }
}

/// Derived mapping from dependency identifier to the set of files that
/// declared it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReverseDependencyGraph {
    dependents: BTreeMap<String, BTreeSet<String>>,
}

impl ReverseDependencyGraph {
    /// Files that declared a dependency identifier.
    pub fn dependents_of(&self, dependency: &str) -> Option<&BTreeSet<String>> {
        self.dependents.get(dependency)
    }

    /// Iterate over `(dependency, files)` in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.dependents.iter()
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}
