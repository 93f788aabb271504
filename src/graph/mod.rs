// src/graph/mod.rs
pub mod edges;
pub mod imports;
pub mod walker;

pub use edges::{Edge, EdgeSet};
pub use imports::{GoImports, ImportSource};
pub use walker::build_graph;
