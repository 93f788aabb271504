// src/render.rs
//! Text serializations of an edge set.

use crate::graph::EdgeSet;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<from> <to>` line per edge.
    #[default]
    Plain,
    /// A Graphviz `digraph` document.
    Graphviz,
}

impl OutputFormat {
    #[must_use]
    pub fn from_dot_flag(dot: bool) -> Self {
        if dot {
            Self::Graphviz
        } else {
            Self::Plain
        }
    }
}

/// Renders `edges` in the requested format.
#[must_use]
pub fn render(edges: &EdgeSet, project_name: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => render_plain(edges),
        OutputFormat::Graphviz => render_dot(edges, project_name),
    }
}

fn render_plain(edges: &EdgeSet) -> String {
    let mut out = String::new();
    for edge in edges {
        let _ = writeln!(out, "{} {}", edge.from, edge.to);
    }
    out
}

fn render_dot(edges: &EdgeSet, project_name: &str) -> String {
    let name = escape(project_name);
    let mut out = String::new();
    let _ = writeln!(out, "digraph \"{name}\" {{");
    let _ = writeln!(out, "\tlabel=\"{name}\";");
    out.push_str("\trankdir=RL;\n");
    out.push_str("\tnode [shape=Mrecord, style=solid];\n");
    for edge in edges {
        let _ = writeln!(out, "\t\"{}\" -> \"{}\";", escape(&edge.from), escape(&edge.to));
    }
    out.push_str("}\n");
    out
}

/// Escapes a string for use inside a quoted dot identifier.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
