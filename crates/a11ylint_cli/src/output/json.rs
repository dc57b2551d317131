//! JSON output formatter

use a11ylint_core::Summary;
use miette::{IntoDiagnostic, Result};

pub fn output_json(results: &Summary, summary: bool) -> Result<()> {
    let output = if summary {
        serde_json::to_value(results).into_diagnostic()?
    } else {
        let documents: Vec<_> = results
            .documents
            .iter()
            .map(|r| {
                serde_json::json!({
                    "title": r.title,
                    "path": r.path.display().to_string(),
                    "diagnostics": r.diagnostics,
                })
            })
            .collect();
        serde_json::Value::Array(documents)
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
