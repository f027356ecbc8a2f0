// C/C++ include extraction, regex-only by design

use crate::parser::Extract;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Match `#include <name>` or `#include "name"` at line start
static INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^#include\s*[<"]([^>"]+)[>"]"#).expect("Invalid include regex")
});

/// Regex strategy shared by C and C++. Includes wrapped in macros or
/// continued across lines are missed, as accepted.
#[derive(Debug, Clone, Default)]
pub struct CExtractor;

impl Extract for CExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        let mut includes = BTreeSet::new();

        for line in source.lines() {
            if let Some(cap) = INCLUDE.captures(line.trim()) {
                includes.insert(cap[1].to_string());
            }
        }

        includes
    }
}
