//! Text output formatter

use a11ylint_core::{Principle, Statistics, Summary};

pub fn output_text(results: &Summary, summary: bool) {
    for report in &results.documents {
        if report.diagnostics.is_empty() {
            continue;
        }

        println!("\n{} ({}):", report.title, report.path.display());
        for diag in &report.diagnostics {
            let start = diag.range.start;
            if diag.code.is_empty() {
                println!(
                    "  {}:{} {}: {}",
                    start.line, start.column, diag.severity, diag.message
                );
            } else {
                println!(
                    "  {}:{} {} [{}]: {}",
                    start.line, start.column, diag.severity, diag.code, diag.message
                );
            }
        }
    }

    println!();
    println!(
        "Checked {} documents, found {} issues",
        results.documents.len(),
        results.diagnostic_count()
    );

    if summary {
        output_statistics(&results.overall);
    }
}

fn output_statistics(stats: &Statistics) {
    println!("\nBy principle:");
    for principle in Principle::ALL {
        println!("  {:<15} {}", principle.label(), stats.tally(principle));
    }

    if !stats.guidelines.is_empty() {
        println!("\nBy success criterion:");
        for (code, amount) in stats.entries() {
            let message = stats.message_for(code).unwrap_or_default();
            println!("  {:<7} {:>4}  {}", code, amount, message);
        }
    }

    if stats.uncoded > 0 {
        println!("\nWithout success criterion: {}", stats.uncoded);
    }
}
