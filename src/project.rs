// src/project.rs
use crate::lang::Lang;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Directories never descended into, whatever the config says.
pub const PRUNE_DIRS: &[&str] = &["vendor"];

static MODULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"module (.*?)\n").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Everything the walker needs to know about the project being graphed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Logical root name, e.g. the module path from `go.mod`.
    pub name: String,
    pub root: PathBuf,
    /// Maximum recursion depth; negative means unbounded.
    pub max_depth: i64,
    pub skip_dirs: Vec<String>,
}

impl ProjectContext {
    /// Builds a context, resolving the name from the manifest when `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, max_depth: i64) -> Self {
        let root = root.into();
        let mut name = name.into();
        if name.is_empty() {
            name = resolve_project_name(&root);
        }
        let name = name.trim_end_matches('/').to_string();
        Self {
            name,
            root,
            max_depth,
            skip_dirs: PRUNE_DIRS.iter().map(|d| (*d).to_string()).collect(),
        }
    }

    /// Adds extra directory names to skip during the walk.
    #[must_use]
    pub fn with_skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !self.skip_dirs.contains(&dir) {
                self.skip_dirs.push(dir);
            }
        }
        self
    }

    /// Depth limit as walkdir expects it, or `None` when unbounded.
    #[must_use]
    pub fn depth_limit(&self) -> Option<usize> {
        usize::try_from(self.max_depth).ok()
    }
}

/// Reads the module path declared in `root/go.mod`.
///
/// A missing, unreadable or unrecognised file yields an empty string.
#[must_use]
pub fn resolve_project_name(root: &Path) -> String {
    let path = root.join(Lang::Go.manifest());
    let Ok(content) = fs::read_to_string(&path) else {
        tracing::debug!(path = %path.display(), "no module declaration found");
        return String::new();
    };
    parse_module_name(&content)
}

/// Extracts the first `module <name>` line from manifest content.
#[must_use]
pub fn parse_module_name(content: &str) -> String {
    MODULE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r').to_string())
        .unwrap_or_default()
}
