// Go import extraction: a stateful line scan rather than a parse
//
// Handles both the parenthesized `import (...)` block and single-line
// `import "path"` statements.

use crate::parser::Extract;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Match the first quoted string on a line
static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("Invalid Go quoted-path regex"));

/// Line-scan strategy for Go.
#[derive(Debug, Clone, Default)]
pub struct GoExtractor;

impl Extract for GoExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        let mut in_import_block = false;

        for line in source.lines() {
            let line = line.trim();

            if line.starts_with("import (") {
                in_import_block = true;
            } else if line == ")" && in_import_block {
                in_import_block = false;
            } else if in_import_block {
                // quoted path, possibly behind an alias
                if let Some(cap) = QUOTED.captures(line) {
                    imports.insert(cap[1].to_string());
                }
            } else if line.starts_with("import ") {
                if let Some(cap) = QUOTED.captures(line) {
                    imports.insert(cap[1].to_string());
                }
            }
        }

        imports
    }
}
