// src/graph/imports.rs
use crate::error::{Error, Result};
use crate::lang::Lang;
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Query, QueryCursor, StreamingIterator};

/// Anything that can list the raw import paths declared in one directory.
///
/// The walker only depends on this trait, so another ecosystem can be
/// graphed by plugging in a different implementation.
pub trait ImportSource {
    /// Returns every import path declared by the source files directly in `dir`.
    ///
    /// # Errors
    /// Returns error if the directory or a file cannot be read, or a file
    /// does not parse.
    fn imports_in(&self, dir: &Path) -> Result<Vec<String>>;
}

/// Tree-sitter backed extractor for Go packages.
pub struct GoImports {
    lang: Lang,
    query: Query,
}

impl GoImports {
    /// Compiles the import query for the Go grammar.
    ///
    /// # Errors
    /// Returns error if the query does not compile against the grammar.
    pub fn new() -> Result<Self> {
        let lang = Lang::Go;
        let query = Query::new(&lang.grammar(), lang.q_imports())
            .map_err(|e| Error::Query(format!("{e:?}")))?;
        Ok(Self { lang, query })
    }

    /// Extracts unquoted import paths from one file's content.
    ///
    /// # Errors
    /// Returns `Error::Parse` if the content contains a syntax error.
    pub fn extract(&self, path: &Path, content: &str) -> Result<Vec<String>> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.lang.grammar())
            .map_err(|e| Error::Grammar(format!("{e:?}")))?;

        let Some(tree) = parser.parse(content, None) else {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: 1,
                column: 1,
            });
        };

        let root = tree.root_node();
        if root.has_error() {
            let bad = first_error(root).unwrap_or(root);
            let pos = bad.start_position();
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }

        let mut cursor = QueryCursor::new();
        let mut imports = Vec::new();
        let mut matches = cursor.matches(&self.query, root, content.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Ok(text) = capture.node.utf8_text(content.as_bytes()) {
                    imports.push(unquote(text));
                }
            }
        }
        Ok(imports)
    }

    fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let name = entry.file_name();
            if self.lang.is_source_file(&name.to_string_lossy()) && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl ImportSource for GoImports {
    fn imports_in(&self, dir: &Path) -> Result<Vec<String>> {
        let mut imports = Vec::new();
        for file in self.source_files(dir)? {
            let content = fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;
            imports.extend(self.extract(&file, &content)?);
        }
        Ok(imports)
    }
}

/// Strips the surrounding double quotes of an import literal.
///
/// Anything that is not a `"`-delimited literal becomes the empty string.
#[must_use]
pub fn unquote(text: &str) -> String {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(str::to_string)
        .unwrap_or_default()
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
