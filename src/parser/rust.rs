// Rust use-declaration extraction, regex-only by design

use crate::parser::Extract;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Match `use <path::segments>` at line start. The capture stops before
/// group syntax, so `use foo::{a, b}` yields `foo`.
static USE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^use\s+([a-zA-Z_][a-zA-Z0-9_]*(?:::[a-zA-Z_][a-zA-Z0-9_]*)*)")
        .expect("Invalid Rust use regex")
});

/// Regex strategy for Rust.
#[derive(Debug, Clone, Default)]
pub struct RustExtractor;

impl Extract for RustExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        let mut uses = BTreeSet::new();

        for line in source.lines() {
            if let Some(cap) = USE.captures(line.trim()) {
                uses.insert(cap[1].to_string());
            }
        }

        uses
    }
}
