// Class hierarchy aggregated from per-file class facts

use crate::parser::ClassInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated class facts for a scan.
///
/// The per-file index is the primary, collision-free view. The bare-name
/// index is a secondary, lossy lookup: when a class name appears in more
/// than one file, the entry from the lexicographically last file wins
/// (files are aggregated in sorted scan order, so the outcome is
/// deterministic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassHierarchy {
    by_file: BTreeMap<String, Vec<ClassInfo>>,
    by_name: BTreeMap<String, ClassInfo>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hierarchy from per-file class lists. Files with no classes
    /// contribute no entry to the per-file index.
    pub fn build(entries: impl IntoIterator<Item = (String, Vec<ClassInfo>)>) -> Self {
        let mut hierarchy = Self::new();
        for (path, classes) in entries {
            hierarchy.insert(path, classes);
        }
        hierarchy
    }

    /// Record the classes extracted from one file.
    pub fn insert(&mut self, path: impl Into<String>, classes: Vec<ClassInfo>) {
        let path = path.into();
        if classes.is_empty() {
            return;
        }

        for class in &classes {
            if let Some(previous) = self.by_name.get(&class.name) {
                log::debug!(
                    "class name {} in {} shadows the one in {}",
                    class.name,
                    class.file,
                    previous.file
                );
            }
            self.by_name.insert(class.name.clone(), class.clone());
        }

        self.by_file.insert(path, classes);
    }

    /// Classes declared in a file, in declaration order.
    pub fn classes_in(&self, path: &str) -> Option<&[ClassInfo]> {
        self.by_file.get(path).map(|c| c.as_slice())
    }

    /// Look up a class by bare name. Lossy under cross-file name
    /// collisions; prefer `classes_in` when the owning file is known.
    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.by_name.get(name)
    }

    /// Iterate over `(file, classes)` in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ClassInfo>)> {
        self.by_file.iter()
    }

    /// Every class across all files, in file order then declaration order.
    pub fn all_classes(&self) -> impl Iterator<Item = &ClassInfo> {
        self.by_file.values().flatten()
    }

    /// Total number of classes across all files.
    pub fn class_count(&self) -> usize {
        self.by_file.values().map(|c| c.len()).sum()
    }

    /// Number of files that declared at least one class.
    pub fn file_count(&self) -> usize {
        self.by_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }

    /// Derive the inheritance adjacency: class name → declared parent
    /// names. Follows the bare-name index, so it shares its lossiness.
    pub fn parent_map(&self) -> BTreeMap<String, Vec<String>> {
        self.by_name
            .iter()
            .map(|(name, info)| (name.clone(), info.parents.clone()))
            .collect()
    }

    /// Classes that declare a given name as parent, across all files.
    pub fn children_of(&self, parent: &str) -> Vec<&ClassInfo> {
        self.all_classes().filter(|c| c.has_parent(parent)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, file: &str, parents: &[&str]) -> ClassInfo {
        let mut info = ClassInfo::new(name, file, 1);
        info.parents = parents.iter().map(|p| p.to_string()).collect();
        info
    }

    fn sample() -> ClassHierarchy {
        ClassHierarchy::build([
            (
                "animals.py".to_string(),
                vec![
                    class("Animal", "animals.py", &[]),
                    class("Dog", "animals.py", &["Animal"]),
                ],
            ),
            ("plants.py".to_string(), vec![class("Tree", "plants.py", &[])]),
            ("empty.py".to_string(), vec![]),
        ])
    }

    #[test]
    fn test_classes_in_file() {
        let hierarchy = sample();
        let classes = hierarchy.classes_in("animals.py").unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].name, "Animal");
        // files without classes have no entry
        assert!(hierarchy.classes_in("empty.py").is_none());
    }

    #[test]
    fn test_get_by_name() {
        let hierarchy = sample();
        assert_eq!(hierarchy.get("Dog").unwrap().parents, vec!["Animal"]);
        assert!(hierarchy.get("Missing").is_none());
    }

    #[test]
    fn test_parent_map() {
        let parents = sample().parent_map();
        assert_eq!(parents["Dog"], vec!["Animal"]);
        assert!(parents["Animal"].is_empty());
        assert!(parents["Tree"].is_empty());
    }

    #[test]
    fn test_children_of() {
        let hierarchy = sample();
        let children = hierarchy.children_of("Animal");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "Dog");
    }

    #[test]
    fn test_name_collision_last_file_wins() {
        let hierarchy = ClassHierarchy::build([
            ("a/model.py".to_string(), vec![class("User", "a/model.py", &[])]),
            (
                "b/model.py".to_string(),
                vec![class("User", "b/model.py", &["Base"])],
            ),
        ]);

        // lossy name index keeps the later file
        assert_eq!(hierarchy.get("User").unwrap().file, "b/model.py");
        // the per-file index keeps both
        assert_eq!(hierarchy.class_count(), 2);
        assert!(hierarchy.classes_in("a/model.py").is_some());
        assert!(hierarchy.classes_in("b/model.py").is_some());
    }

    #[test]
    fn test_counts() {
        let hierarchy = sample();
        assert_eq!(hierarchy.class_count(), 3);
        assert_eq!(hierarchy.file_count(), 2);
        assert!(!hierarchy.is_empty());
        assert!(ClassHierarchy::new().is_empty());
    }

    #[test]
    fn test_deterministic_serialization() {
        let a = sample();
        // same content inserted in a different order
        let b = ClassHierarchy::build([
            ("plants.py".to_string(), vec![class("Tree", "plants.py", &[])]),
            (
                "animals.py".to_string(),
                vec![
                    class("Animal", "animals.py", &[]),
                    class("Dog", "animals.py", &["Animal"]),
                ],
            ),
        ]);

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
