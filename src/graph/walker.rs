// src/graph/walker.rs
use crate::error::Result;
use crate::graph::edges::{Edge, EdgeSet};
use crate::graph::imports::ImportSource;
use crate::project::ProjectContext;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walks the project tree and collects internal package edges.
///
/// Directories are visited depth-first in file name order. Hidden
/// directories and `ctx.skip_dirs` are pruned, as is anything deeper than
/// `ctx.max_depth` when it is non-negative.
///
/// # Errors
/// Returns the first extraction or directory read error; no partial graph
/// is returned.
pub fn build_graph<S: ImportSource + ?Sized>(ctx: &ProjectContext, source: &S) -> Result<EdgeSet> {
    let mut edges = EdgeSet::new();
    walk(ctx, source, &mut edges)?;
    Ok(edges)
}

/// Same as [`build_graph`] but folds edges into an existing set.
///
/// # Errors
/// Returns the first extraction or directory read error.
pub fn walk<S: ImportSource + ?Sized>(
    ctx: &ProjectContext,
    source: &S,
    edges: &mut EdgeSet,
) -> Result<()> {
    if ctx.name.is_empty() {
        tracing::warn!(
            root = %ctx.root.display(),
            "project name is empty; no import will be treated as internal"
        );
    }

    let mut walker = WalkDir::new(&ctx.root)
        .follow_links(false)
        .sort_by_file_name();
    if let Some(depth) = ctx.depth_limit() {
        walker = walker.max_depth(depth);
    }

    let mut visited = 0usize;
    let entries = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || is_package_dir(e, &ctx.skip_dirs));
    for entry in entries {
        let entry = entry?;
        let logical = logical_path(&ctx.name, &ctx.root, entry.path());
        tracing::debug!(dir = %entry.path().display(), package = %logical, "visiting");

        visit(ctx, &logical, &source.imports_in(entry.path())?, edges);
        visited += 1;
    }

    tracing::info!(directories = visited, edges = edges.len(), "graph built");
    Ok(())
}

fn visit(ctx: &ProjectContext, logical: &str, imports: &[String], edges: &mut EdgeSet) {
    for import in imports {
        let Some(to) = strip_root(&ctx.name, import) else {
            continue;
        };
        let edge = Edge::new(trim(logical, &ctx.name), to);
        tracing::trace!(edge = %edge.key(), "edge");
        edges.insert(edge);
    }
}

fn is_package_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && !skip_dirs.iter().any(|d| d.as_str() == &*name)
}

/// Joins the root name with the directory's path relative to the project root.
fn logical_path(name: &str, root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let mut logical = name.to_string();
    for part in rel.components() {
        let part = part.as_os_str().to_string_lossy();
        if !logical.is_empty() {
            logical.push('/');
        }
        logical.push_str(&part);
    }
    logical
}

/// Returns `path` relative to `root` when it names the root package or one
/// of its descendants.
///
/// An empty root matches nothing, and `foo` does not match `foobar`.
#[must_use]
pub fn strip_root<'a>(root: &str, path: &'a str) -> Option<&'a str> {
    if root.is_empty() {
        return None;
    }
    let rest = path.strip_prefix(root)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('/')
}

/// Removes the root prefix and one leading separator.
#[must_use]
pub fn trim<'a>(path: &'a str, root: &str) -> &'a str {
    let rest = path.strip_prefix(root).unwrap_or(path);
    rest.strip_prefix('/').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_root() {
        assert_eq!(strip_root("example.com/app", "example.com/app/a/b"), Some("a/b"));
        assert_eq!(strip_root("example.com/app", "example.com/app"), Some(""));
        assert_eq!(strip_root("example.com/app", "fmt"), None);
    }

    #[test]
    fn test_strip_root_requires_boundary() {
        assert_eq!(strip_root("foo", "foobar/x"), None);
        assert_eq!(strip_root("foo", "foo/x"), Some("x"));
    }

    #[test]
    fn test_empty_root_matches_nothing() {
        assert_eq!(strip_root("", "fmt"), None);
        assert_eq!(strip_root("", ""), None);
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("example.com/app/foo", "example.com/app"), "foo");
        assert_eq!(trim("example.com/app", "example.com/app"), "");
        assert_eq!(trim("foo/bar", ""), "foo/bar");
    }

    #[test]
    fn test_logical_path() {
        let root = Path::new("/src/app");
        assert_eq!(logical_path("m", root, Path::new("/src/app")), "m");
        assert_eq!(logical_path("m", root, Path::new("/src/app/a/b")), "m/a/b");
        assert_eq!(logical_path("", root, Path::new("/src/app/a")), "a");
    }
}
