// PHP extraction, regex-only by design

use crate::parser::{ClassInfo, Extract, METHOD_SCAN_WINDOW, RESERVED_WORDS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

mod patterns {
    use super::*;

    /// Match `use <Namespace\Name>` at line start
    pub static USE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^use\s+([a-zA-Z_\\][a-zA-Z0-9_\\]*)").expect("Invalid PHP use regex")
    });

    /// Match `require`/`require_once` with optional parentheses
    pub static REQUIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"require(?:_once)?\s*\(?['"]([^'"]+)['"]"#).expect("Invalid PHP require regex")
    });

    /// Match `include`/`include_once` with optional parentheses
    pub static INCLUDE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"include(?:_once)?\s*\(?['"]([^'"]+)['"]"#).expect("Invalid PHP include regex")
    });

    /// Match class headers with optional extends/implements clauses
    pub static CLASS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:abstract\s+)?class\s+(\w+)(?:\s+extends\s+(\w+))?(?:\s+implements\s+([^{]+))?")
            .expect("Invalid PHP class regex")
    });

    /// Match `function name(` method headers
    pub static METHOD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:public|private|protected)?\s*function\s+(\w+)\s*\(")
            .expect("Invalid PHP method regex")
    });

    /// Match `$name` property declarations
    pub static PROPERTY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:public|private|protected)?\s*\$(\w+)").expect("Invalid PHP property regex")
    });
}

/// Regex strategy for PHP.
#[derive(Debug, Clone)]
pub struct PhpExtractor {
    scan_window: usize,
}

impl PhpExtractor {
    pub fn new(scan_window: usize) -> Self {
        Self { scan_window }
    }
}

impl Default for PhpExtractor {
    fn default() -> Self {
        Self::new(METHOD_SCAN_WINDOW)
    }
}

impl Extract for PhpExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();

        for line in source.lines() {
            let line = line.trim();
            for pattern in [&patterns::USE, &patterns::REQUIRE, &patterns::INCLUDE] {
                for cap in pattern.captures_iter(line) {
                    imports.insert(cap[1].to_string());
                }
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
                if member.starts_with("class ") {
                    break;
                }
                if let Some(method) = patterns::METHOD.captures(member) {
                    let name = &method[1];
                    if !RESERVED_WORDS.contains(&name) {
                        info.methods.push(name.to_string());
                    }
                    continue;
                }
                if let Some(property) = patterns::PROPERTY.captures(member) {
                    info.properties.push(property[1].to_string());
                }
            }

            classes.push(info);
        }

        classes
    }
}
