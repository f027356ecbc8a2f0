// Java extraction, regex-only by design

use crate::parser::{ClassInfo, Extract, METHOD_SCAN_WINDOW, RESERVED_WORDS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

mod patterns {
    use super::*;

    /// Match `import [static] <dotted.package.Name>` at line start
    pub static IMPORT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^import\s+(?:static\s+)?([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)")
            .expect("Invalid Java import regex")
    });

    /// Match class headers with optional extends/implements clauses
    pub static CLASS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?:public\s+)?(?:abstract\s+)?class\s+(\w+)(?:\s+extends\s+(\w+))?(?:\s+implements\s+([^{]+))?",
        )
        .expect("Invalid Java class regex")
    });

    /// Match `modifier type name(` method headers
    pub static METHOD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:public|private|protected)?\s*(?:static\s+)?(?:final\s+)?\w+\s+(\w+)\s*\(")
            .expect("Invalid Java method regex")
    });
}

/// Regex strategy for Java.
#[derive(Debug, Clone)]
pub struct JavaExtractor {
    scan_window: usize,
}

impl JavaExtractor {
    pub fn new(scan_window: usize) -> Self {
        Self { scan_window }
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new(METHOD_SCAN_WINDOW)
    }
}

impl Extract for JavaExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();

        for line in source.lines() {
            if let Some(cap) = patterns::IMPORT.captures(line.trim()) {
                imports.insert(cap[1].to_string());
            }
        }

        imports
    }

    fn classes(&self, source: &str, file: &str) -> Vec<ClassInfo> {
        let lines: Vec<&str> = source.lines().collect();
        let mut classes = Vec::new();

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            let Some(cap) = patterns::CLASS.captures(line) else {
                continue;
            };

            let mut info = ClassInfo::new(&cap[1], file, i + 1);

            if let Some(parent) = cap.get(2) {
                info.parents.push(parent.as_str().to_string());
            }
            // implemented interfaces join the parent list
            if let Some(interfaces) = cap.get(3) {
                info.parents.extend(
                    interfaces
                        .as_str()
                        .split(',')
                        .map(|p| p.trim())
                        .filter(|p| !p.is_empty())
                        .map(|p| p.to_string()),
                );
            }

            for member in lines
                .iter()
                .take((i + self.scan_window).min(lines.len()))
                .skip(i + 1)
            {
                let member = member.trim();
                if member.starts_with("class ") || member.starts_with("interface ") {
                    break;
                }
                let first_word = member.split_whitespace().next().unwrap_or("");
                if RESERVED_WORDS.contains(&first_word) {
                    continue;
                }
                if let Some(method) = patterns::METHOD.captures(member) {
                    let name = &method[1];
                    if !RESERVED_WORDS.contains(&name) {
                        info.methods.push(name.to_string());
                    }
                }
            }

            classes.push(info);
        }

        classes
    }
}
