// Per-language extraction of dependency identifiers and class facts
//
// Each language implements the same capability interface: a set of raw
// dependency identifiers and an ordered list of class facts. Python is
// parse-first with a regex fallback; every other language is regex-only by
// design, so unusual constructs (multi-line imports, macro-wrapped includes)
// may be missed.

mod c;
mod go;
mod java;
mod javascript;
mod php;
mod python;
mod rust;

pub use c::CExtractor;
pub use go::GoExtractor;
pub use java::JavaExtractor;
pub use javascript::JavaScriptExtractor;
pub use php::PhpExtractor;
pub use python::PythonExtractor;
pub use rust::RustExtractor;

use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lines examined after a class header when collecting methods in languages
/// without a full parse.
pub const METHOD_SCAN_WINDOW: usize = 100;

/// Window used by the python regex fallback, which only runs on files the
/// parser rejected.
pub const PYTHON_FALLBACK_SCAN_WINDOW: usize = 50;

/// Words the brace-less method matcher must never take for a method name.
pub(crate) const RESERVED_WORDS: &[&str] = &["if", "for", "while", "switch", "return"];

/// Structural facts about a single class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Class name (not guaranteed unique across files)
    pub name: String,
    /// Declared parent and interface names, as written
    pub parents: Vec<String>,
    /// Method names in declaration order
    pub methods: Vec<String>,
    /// Property/field names in declaration order
    pub properties: Vec<String>,
    /// Owning file path, relative to the scanned root
    pub file: String,
    /// 1-based source line of the declaration
    pub line: usize,
}

impl ClassInfo {
    pub fn new(name: &str, file: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            parents: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            file: file.to_string(),
            line,
        }
    }

    /// Check if this class declares a given parent, matching either the
    /// plain name or the last segment of a dotted name.
    pub fn has_parent(&self, parent: &str) -> bool {
        self.parents
            .iter()
            .any(|p| p == parent || p.ends_with(&format!(".{}", parent)))
    }
}

/// Capability interface implemented by every language strategy.
pub trait Extract {
    /// Extract the deduplicated set of dependency identifiers.
    fn dependencies(&self, source: &str) -> BTreeSet<String>;

    /// Extract class facts in declaration order. Languages without class
    /// extraction return an empty list.
    fn classes(&self, _source: &str, _file: &str) -> Vec<ClassInfo> {
        Vec::new()
    }
}

/// The full set of language strategies, constructed once per pipeline run.
#[derive(Debug, Clone)]
pub struct Extractors {
    python: PythonExtractor,
    javascript: JavaScriptExtractor,
    java: JavaExtractor,
    c: CExtractor,
    rust: RustExtractor,
    go: GoExtractor,
    php: PhpExtractor,
}

impl Default for Extractors {
    fn default() -> Self {
        Self::with_scan_window(METHOD_SCAN_WINDOW)
    }
}

impl Extractors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a strategy set with a custom forward-scan window.
    pub fn with_scan_window(window: usize) -> Self {
        Self {
            python: PythonExtractor::new(),
            javascript: JavaScriptExtractor::new(window),
            java: JavaExtractor::new(window),
            c: CExtractor,
            rust: RustExtractor,
            go: GoExtractor,
            php: PhpExtractor::new(window),
        }
    }

    /// The strategy for a language, or `None` for non-code languages.
    pub fn for_language(&self, language: Language) -> Option<&dyn Extract> {
        match language {
            Language::Python => Some(&self.python),
            Language::JavaScript | Language::TypeScript => Some(&self.javascript),
            Language::Java => Some(&self.java),
            Language::C | Language::Cpp => Some(&self.c),
            Language::Rust => Some(&self.rust),
            Language::Go => Some(&self.go),
            Language::Php => Some(&self.php),
            Language::Toml
            | Language::Yaml
            | Language::Json
            | Language::Markdown
            | Language::Text => None,
        }
    }

    /// Extract dependency identifiers from `source` for `language`.
    pub fn dependencies(&self, source: &str, language: Language) -> BTreeSet<String> {
        self.for_language(language)
            .map(|e| e.dependencies(source))
            .unwrap_or_default()
    }

    /// Extract class facts from `source` for `language`.
    pub fn classes(&self, source: &str, language: Language, file: &str) -> Vec<ClassInfo> {
        self.for_language(language)
            .map(|e| e.classes(source, file))
            .unwrap_or_default()
    }
}

/// Extract dependency identifiers using the default strategy set.
pub fn extract_dependencies(source: &str, language: Language) -> BTreeSet<String> {
    Extractors::new().dependencies(source, language)
}

/// Extract class facts using the default strategy set.
pub fn extract_classes(source: &str, language: Language, file: &str) -> Vec<ClassInfo> {
    Extractors::new().classes(source, language, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_info_has_parent() {
        let mut info = ClassInfo::new("Child", "a.py", 1);
        info.parents = vec!["Parent".to_string(), "module.Mixin".to_string()];

        assert!(info.has_parent("Parent"));
        assert!(info.has_parent("Mixin"));
        assert!(!info.has_parent("Unknown"));
    }

    #[test]
    fn test_non_code_languages_yield_nothing() {
        let set = Extractors::new();
        for lang in [
            Language::Toml,
            Language::Yaml,
            Language::Json,
            Language::Markdown,
            Language::Text,
        ] {
            assert!(set.for_language(lang).is_none());
            assert!(set.dependencies("import os", lang).is_empty());
            assert!(set.classes("class A:", lang, "x").is_empty());
        }
    }

    #[test]
    fn test_class_only_languages() {
        let set = Extractors::new();
        // import-only languages return no classes
        assert!(set.classes("struct Foo {}", Language::Rust, "lib.rs").is_empty());
        assert!(set.classes("type Foo struct{}", Language::Go, "main.go").is_empty());
        assert!(set.classes("class Foo {};", Language::Cpp, "foo.cpp").is_empty());
    }

    #[test]
    fn test_free_functions_match_dispatch() {
        let source = "import os\n";
        let direct = extract_dependencies(source, Language::Python);
        let via_set = Extractors::new().dependencies(source, Language::Python);
        assert_eq!(direct, via_set);
    }

    #[test]
    fn test_class_info_serialization() {
        let info = ClassInfo::new("Dog", "pets/dog.py", 3);
        let json = serde_json::to_string(&info).unwrap();
        let back: ClassInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
