// Language classification by file extension

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Languages and file types recognized by the scanner.
///
/// This is a closed set: files whose extension maps to none of these
/// variants are not scanned. `classify` falls back to `Text` for callers
/// that need a tag for an arbitrary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Rust,
    Go,
    Php,
    Toml,
    Yaml,
    Json,
    Markdown,
    Text,
}

impl Language {
    /// Look up a language by file extension (without the dot).
    /// Matching is case-insensitive. Returns `None` for unsupported
    /// extensions.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" | "jsx" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "java" => Some(Self::Java),
            "c" | "h" => Some(Self::C),
            "cpp" | "hpp" => Some(Self::Cpp),
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "php" => Some(Self::Php),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "md" => Some(Self::Markdown),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Look up a language for a path. Returns `None` when the extension is
    /// missing or unsupported; the scanner uses this to decide inclusion.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Classify a path, mapping unknown extensions to `Text`.
    pub fn classify(path: &Path) -> Self {
        Self::from_path(path).unwrap_or(Self::Text)
    }

    /// The tag string used in serialized output.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Php => "php",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }

    /// Whether dependency extraction is defined for this language.
    pub fn has_dependencies(&self) -> bool {
        matches!(
            self,
            Self::Python
                | Self::JavaScript
                | Self::TypeScript
                | Self::Java
                | Self::C
                | Self::Cpp
                | Self::Rust
                | Self::Go
                | Self::Php
        )
    }

    /// Whether class extraction is defined for this language.
    pub fn has_classes(&self) -> bool {
        matches!(
            self,
            Self::Python | Self::JavaScript | Self::TypeScript | Self::Java | Self::Php
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
