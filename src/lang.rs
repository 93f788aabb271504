use tree_sitter::Language;

/// Source languages the import extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Go,
}

impl Lang {
    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Go => tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Tree-sitter query capturing the raw path literal of every import.
    #[must_use]
    pub fn q_imports(self) -> &'static str {
        match self {
            Self::Go => "(import_spec path: (_) @path)",
        }
    }

    /// File that declares the module path at the project root.
    #[must_use]
    pub fn manifest(self) -> &'static str {
        match self {
            Self::Go => "go.mod",
        }
    }

    /// Returns true for files the extractor should parse: right extension,
    /// not a test file.
    #[must_use]
    pub fn is_source_file(self, file_name: &str) -> bool {
        match self {
            Self::Go => file_name.ends_with(".go") && !file_name.ends_with("_test.go"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest() {
        assert_eq!(Lang::Go.manifest(), "go.mod");
    }

    #[test]
    fn test_source_file_filter() {
        assert!(Lang::Go.is_source_file("main.go"));
        assert!(!Lang::Go.is_source_file("main_test.go"));
        assert!(!Lang::Go.is_source_file("go.mod"));
        assert!(!Lang::Go.is_source_file("README.md"));
    }
}
