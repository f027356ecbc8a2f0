// Python extraction using tree-sitter, with a regex fallback for files the
// parser rejects

use crate::parser::{ClassInfo, Extract, PYTHON_FALLBACK_SCAN_WINDOW};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tree_sitter::{Node, Parser, Tree};

/// Parse-first strategy for Python source.
#[derive(Debug, Clone, Default)]
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extract for PythonExtractor {
    fn dependencies(&self, source: &str) -> BTreeSet<String> {
        match parse(source) {
            Some(tree) if !tree.root_node().has_error() => {
                let mut imports = BTreeSet::new();
                collect_imports(tree.root_node(), source.as_bytes(), &mut imports);
                imports
            }
            _ => fallback_imports(source),
        }
    }

    fn classes(&self, source: &str, file: &str) -> Vec<ClassInfo> {
        match parse(source) {
            Some(tree) if !tree.root_node().has_error() => {
                let mut classes = Vec::new();
                collect_classes(tree.root_node(), source.as_bytes(), file, &mut classes);
                classes
            }
            _ => fallback_classes(source, file),
        }
    }
}

/// Parse Python source. A parser is constructed per call so extraction can
/// run from any number of concurrent workers.
fn parse(source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::language()).ok()?;
    parser.parse(source, None)
}

/// Collect module names from `import x` and `from x import ...` statements
/// anywhere in the tree, including inside function bodies.
fn collect_imports(node: Node, source: &[u8], imports: &mut BTreeSet<String>) {
    match node.kind() {
        "import_statement" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "dotted_name" => {
                        if let Ok(text) = child.utf8_text(source) {
                            imports.insert(text.to_string());
                        }
                    }
                    "aliased_import" => {
                        if let Some(name) = child.child_by_field_name("name") {
                            if let Ok(text) = name.utf8_text(source) {
                                imports.insert(text.to_string());
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        "import_from_statement" => {
            // The module is `X` in `from X import ...`; imported symbols are
            // not dependency identifiers.
            if let Some(module) = node.child_by_field_name("module_name") {
                match module.kind() {
                    "dotted_name" => {
                        if let Ok(text) = module.utf8_text(source) {
                            imports.insert(text.to_string());
                        }
                    }
                    "relative_import" => {
                        // `from .utils import x` contributes "utils";
                        // `from . import x` names no module and is skipped.
                        let mut cursor = module.walk();
                        for child in module.children(&mut cursor) {
                            if child.kind() == "dotted_name" {
                                if let Ok(text) = child.utf8_text(source) {
                                    imports.insert(text.to_string());
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_imports(child, source, imports);
    }
}

/// Collect class definitions anywhere in the tree.
fn collect_classes(node: Node, source: &[u8], file: &str, classes: &mut Vec<ClassInfo>) {
    if node.kind() == "class_definition" {
        if let Some(info) = parse_class(&node, source, file) {
            classes.push(info);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_classes(child, source, file, classes);
    }
}

fn parse_class(node: &Node, source: &[u8], file: &str) -> Option<ClassInfo> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source)
        .ok()?
        .to_string();

    let mut info = ClassInfo::new(&name, file, node.start_position().row + 1);

    // Base expressions: simple names and dotted attribute access only.
    if let Some(superclasses) = node.child_by_field_name("superclasses") {
        let mut cursor = superclasses.walk();
        for child in superclasses.children(&mut cursor) {
            match child.kind() {
                "identifier" | "attribute" => {
                    if let Ok(text) = child.utf8_text(source) {
                        info.parents.push(text.to_string());
                    }
                }
                _ => {}
            }
        }
    }

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "function_definition" => {
                    if let Some(method) = function_name(&child, source) {
                        info.methods.push(method);
                    }
                }
                "decorated_definition" => {
                    let mut inner_cursor = child.walk();
                    for inner in child.children(&mut inner_cursor) {
                        if inner.kind() == "function_definition" {
                            if let Some(method) = function_name(&inner, source) {
                                info.methods.push(method);
                            }
                        }
                    }
                }
                "expression_statement" => {
                    // Simple name-target assignments directly in the class
                    // body; assignments inside methods never reach here.
                    if let Some(property) = assignment_target(&child, source) {
                        info.properties.push(property);
                    }
                }
                _ => {}
            }
        }
    }

    Some(info)
}

fn function_name(node: &Node, source: &[u8]) -> Option<String> {
    node.child_by_field_name("name")?
        .utf8_text(source)
        .ok()
        .map(|s| s.to_string())
}

fn assignment_target(node: &Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "assignment" {
            if let Some(left) = child.child_by_field_name("left") {
                if left.kind() == "identifier" {
                    return left.utf8_text(source).ok().map(|s| s.to_string());
                }
            }
        }
    }
    None
}

// ============================================================================
// REGEX FALLBACK
// ============================================================================

mod patterns {
    use super::*;

    /// Match `import <dotted-name>` at line start
    pub static IMPORT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^import\s+([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)")
            .expect("Invalid Python import regex")
    });

    /// Match `from <dotted-name> import` at line start
    pub static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^from\s+([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s+import")
            .expect("Invalid Python from-import regex")
    });

    /// Match `class Name(Parents):` headers
    pub static CLASS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^class\s+(\w+)(?:\(([^)]*)\))?\s*:").expect("Invalid Python class regex")
    });

    /// Match `def name` at line start
    pub static DEF: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^def\s+(\w+)").expect("Invalid Python def regex"));
}

fn fallback_imports(source: &str) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();

    for line in source.lines() {
        let line = line.trim();
        for pattern in [&patterns::IMPORT, &patterns::FROM_IMPORT] {
            if let Some(cap) = pattern.captures(line) {
                imports.insert(cap[1].to_string());
            }
        }
    }

    imports
}

fn fallback_classes(source: &str, file: &str) -> Vec<ClassInfo> {
    let lines: Vec<&str> = source.lines().collect();
    let mut classes = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        let Some(cap) = patterns::CLASS.captures(line) else {
            continue;
        };

        let mut info = ClassInfo::new(&cap[1], file, i + 1);

        if let Some(parents) = cap.get(2) {
            info.parents = parents
                .as_str()
                .split(',')
                .map(|p| p.trim())
                .filter(|p| !p.is_empty() && !p.starts_with("object"))
                .map(|p| p.to_string())
                .collect();
        }

        // Bounded forward scan for methods; stops at the next class header.
        for member in lines
            .iter()
            .take((i + PYTHON_FALLBACK_SCAN_WINDOW).min(lines.len()))
            .skip(i + 1)
        {
            let member = member.trim();
            if member.starts_with("def ") {
                if let Some(def) = patterns::DEF.captures(member) {
                    info.methods.push(def[1].to_string());
                }
            } else if member.starts_with("class ") {
                break;
            }
        }

        classes.push(info);
    }

    classes
}
