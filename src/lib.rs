pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod lang;
pub mod logger;
pub mod project;
pub mod render;
