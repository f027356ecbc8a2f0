// JavaScript/TypeScript extraction, regex-only by design

use crate::parser::{ClassInfo, Extract, METHOD_SCAN_WINDOW, RESERVED_WORDS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

mod patterns {
    use super::*;

    /// Match `import ... from '<module>'`
    pub static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"^import\s+.*?\s+from\s+['"]([^'"]+)['"]"#)
            .expect("Invalid JS from-import regex")
    });

    /// Match bare `import '<module>'`
    pub static BARE_IMPORT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"^import\s+['"]([^'"]+)['"]"#).expect("Invalid JS bare-import regex")
    });

    /// Match `require('<module>')` anywhere in a line
    pub static REQUIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).expect("Invalid JS require regex")
    });

    /// Match `class Name extends Parent` headers
    pub static CLASS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^class\s+(\w+)(?:\s+extends\s+(\w+))?").expect("Invalid JS class regex")
    });

    /// Match `name(` method headers
    pub static METHOD: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(\w+)\s*\(").expect("Invalid JS method regex"));
}

/// Regex strategy shared by JavaScript and TypeScript.
#[derive(Debug, Clone)]
pub struct JavaScriptExtractor {
    scan_window: usize,
}

impl JavaScriptExtractor {
    pub fn new(scan_window: usize) -> Self {
        Self { scan_window }
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new(METHOD_SCAN_WINDOW)
    }
}

impl Extract for JavaScriptExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();

        // The three forms are matched independently; a single line may
        // contribute more than one identifier.
        for line in source.lines() {
            let line = line.trim();
            for pattern in [
                &patterns::FROM_IMPORT,
                &patterns::BARE_IMPORT,
                &patterns::REQUIRE,
            ] {
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

            for member in lines
                .iter()
                .take((i + self.scan_window).min(lines.len()))
                .skip(i + 1)
            {
                let member = member.trim();
                if member.starts_with("class ") {
                    break;
                }
                if member.starts_with("//") {
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
