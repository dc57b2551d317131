//! Check command implementation

use std::fs;
use std::path::{Path, PathBuf};

use a11ylint_ast::parse_tree;
use a11ylint_core::{Configuration, Linter, LinterError, SourceDocument};
use miette::{IntoDiagnostic, Result};
use tracing::{info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

pub fn run_check(cli: &Cli, files: &[PathBuf], format: OutputFormat, summary: bool) -> Result<bool> {
    let config = match cli.config {
        Some(ref path) => Configuration::from_file(path).into_diagnostic()?,
        None => find_config()?,
    };
    let linter = Linter::new(config).into_diagnostic()?;

    let mut sources = Vec::with_capacity(files.len());
    let mut failures = Vec::new();
    for path in files {
        match load_document(path) {
            Ok(source) => sources.push(source),
            Err(error) => {
                warn!("Failed to load {}: {}", path.display(), error);
                failures.push((path.clone(), error));
            }
        }
    }

    let results = linter.lint_documents(&sources).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to load:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_errors = output_results(&results, format, summary)?;

    Ok(has_errors || !failures.is_empty())
}

/// Reads one document in the JSON tree format.
pub fn load_document(path: &Path) -> Result<SourceDocument, LinterError> {
    let content = fs::read_to_string(path)
        .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;
    let tree = parse_tree(&content)?;
    Ok(SourceDocument::from_tree(path, tree))
}

pub fn find_config() -> Result<Configuration> {
    if let Some(path) = Configuration::discover(".") {
        info!("Using config: {}", path.display());
        return Configuration::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(Configuration::defaults())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_document_reports_missing_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LinterError::File(_)));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_document_reads_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.json");
        fs::write(&path, r#"{"title": "Home", "nodes": [{"type": "element", "name": "p"}]}"#)
            .unwrap();

        let source = load_document(&path).unwrap();
        assert_eq!(source.title, "Home");
    }
}
