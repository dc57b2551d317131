//! Output formatting module

mod json;
mod text;

use a11ylint_core::Summary;
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_results(results: &Summary, format: OutputFormat, summary: bool) -> Result<bool> {
    let has_errors = results.has_errors();

    match format {
        OutputFormat::Json => json::output_json(results, summary)?,
        OutputFormat::Text => text::output_text(results, summary),
    }

    Ok(has_errors)
}
