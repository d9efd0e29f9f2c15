//! Tree-sitter backed suite discovery
//!
//! Walks the top level of each Rust source file in a directory: a module
//! whose body declares `#[test]` functions becomes a suite symbol, any other
//! top-level module a support symbol, and a file with `#[test]` functions
//! outside any module becomes a suite named after the file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

use crate::error::{Error, Result};
use crate::interfaces::SymbolRepository;
use crate::types::{Symbol, SymbolKind, TestSize};

#[derive(Debug, Clone, Default)]
pub struct TreeSitterSuiteRepository;

impl TreeSitterSuiteRepository {
    pub fn new() -> Self {
        Self
    }

    fn parser() -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_rust::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(parser)
    }

    fn symbols_in_file(parser: &mut Parser, path: &Path) -> Result<Vec<Symbol>> {
        let source = std::fs::read_to_string(path)?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| Error::ParseError(format!("Failed to parse {}", path.display())))?;
        let directory = path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf();
        let stem = path.file_stem().and_then(|s| s.to_str());

        let mut symbols = Vec::new();
        let mut file_level_tests = false;
        let root = tree.root_node();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "mod_item" => {
                    let Some(name) = module_name(&child, &source) else {
                        continue;
                    };
                    let kind = if module_declares_tests(&child, &source) {
                        SymbolKind::Suite
                    } else {
                        SymbolKind::Support
                    };
                    symbols.push(Symbol {
                        name: Some(qualified_name(stem, &name)),
                        kind,
                        is_abstract: false,
                        directory: directory.clone(),
                        size: TestSize::Unspecified,
                    });
                }
                "function_item" => {
                    if has_test_attribute(&child, &source) {
                        file_level_tests = true;
                    }
                }
                _ => {}
            }
        }
        if file_level_tests {
            symbols.push(Symbol {
                name: stem.map(str::to_string),
                kind: SymbolKind::Suite,
                is_abstract: false,
                directory,
                size: TestSize::Unspecified,
            });
        }
        Ok(symbols)
    }
}

impl SymbolRepository for TreeSitterSuiteRepository {
    fn direct_symbols_of(&self, dir: &Path) -> Vec<Symbol> {
        let mut parser = match Self::parser() {
            Ok(parser) => parser,
            Err(e) => {
                warn!("suite discovery unavailable: {e}");
                return Vec::new();
            }
        };
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("cannot read {}: {e}", dir.display());
                return Vec::new();
            }
        };

        let mut symbols = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("rs") {
                continue;
            }
            match Self::symbols_in_file(&mut parser, &path) {
                Ok(found) => symbols.extend(found),
                Err(e) => debug!("skipping {}: {e}", path.display()),
            }
        }
        symbols
    }

    fn child_directories(&self, dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name != "target" && !name.starts_with('.'))
                    .unwrap_or(false)
            })
            .collect()
    }
}

/// `foo::tests` for a module in foo.rs; crate-root files keep the bare
/// module name.
fn qualified_name(stem: Option<&str>, module: &str) -> String {
    match stem {
        Some(stem) if stem != "lib" && stem != "main" && stem != "mod" => {
            format!("{stem}::{module}")
        }
        _ => module.to_string(),
    }
}

fn module_name(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| name.utf8_text(source.as_bytes()).ok())
        .map(str::to_string)
}

fn module_declares_tests(node: &Node, source: &str) -> bool {
    let Some(body) = node.child_by_field_name("body") else {
        return false;
    };
    let mut cursor = body.walk();
    body.children(&mut cursor)
        .any(|item| item.kind() == "function_item" && has_test_attribute(&item, source))
}

fn has_test_attribute(node: &Node, source: &str) -> bool {
    // Check for attribute items before the function
    let mut sibling = node.prev_sibling();

    while let Some(s) = sibling {
        if s.kind() == "attribute_item" {
            if let Ok(text) = s.utf8_text(source.as_bytes()) {
                if text.contains("#[test]") || text.contains("#[tokio::test]") {
                    return true;
                }
            }
        } else if s.kind() != "line_comment" && s.kind() != "block_comment" {
            // Stop if we hit something that's not an attribute or comment
            break;
        }
        sibling = s.prev_sibling();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SUITE_SOURCE: &str = r#"
pub fn add(a: u32, b: u32) -> u32 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(1, 2), 3);
    }
}
"#;

    const PLAIN_SOURCE: &str = r#"
mod inner {
    pub fn noop() {}
}
"#;

    const FILE_LEVEL_SOURCE: &str = r#"
#[test]
fn smoke() {
    assert!(true);
}
"#;

    #[test]
    fn test_test_module_becomes_a_suite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("math.rs"), SUITE_SOURCE).unwrap();

        let repository = TreeSitterSuiteRepository::new();
        let symbols = repository.direct_symbols_of(temp.path());
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name.as_deref(), Some("math::tests"));
        assert!(symbols[0].is_concrete_suite());
    }

    #[test]
    fn test_plain_module_is_support_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("util.rs"), PLAIN_SOURCE).unwrap();

        let repository = TreeSitterSuiteRepository::new();
        let symbols = repository.direct_symbols_of(temp.path());
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].kind, SymbolKind::Support);
    }

    #[test]
    fn test_file_level_tests_name_the_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("smoke_test.rs"), FILE_LEVEL_SOURCE).unwrap();

        let repository = TreeSitterSuiteRepository::new();
        let symbols = repository.direct_symbols_of(temp.path());
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name.as_deref(), Some("smoke_test"));
        assert!(symbols[0].is_concrete_suite());
    }

    #[test]
    fn test_lookup_is_one_level_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/math.rs"), SUITE_SOURCE).unwrap();

        let repository = TreeSitterSuiteRepository::new();
        assert!(repository.direct_symbols_of(temp.path()).is_empty());
        assert_eq!(
            repository.child_directories(temp.path()),
            vec![temp.path().join("nested")]
        );
    }

    #[test]
    fn test_hidden_and_target_directories_are_not_children() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("target")).unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::create_dir(temp.path().join("api")).unwrap();

        let repository = TreeSitterSuiteRepository::new();
        assert_eq!(
            repository.child_directories(temp.path()),
            vec![temp.path().join("api")]
        );
    }
}
