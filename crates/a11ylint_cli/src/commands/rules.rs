//! Rules command implementation

use a11ylint_core::rules::builtin_rules;
use miette::{IntoDiagnostic, Result};

pub fn run_rules(json: bool) -> Result<()> {
    let rules = builtin_rules();

    if json {
        let catalog: Vec<_> = rules
            .iter()
            .map(|rule| {
                let meta = rule.meta();
                serde_json::json!({
                    "category": meta.key.category,
                    "group": meta.key.group,
                    "name": meta.key.name,
                    "code": meta.code,
                    "severity": meta.severity,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&catalog).into_diagnostic()?
        );
        return Ok(());
    }

    let mut group = None;
    for rule in &rules {
        let meta = rule.meta();
        let path = (meta.key.category, meta.key.group);
        if group != Some(path) {
            println!("\n{}.{}:", path.0, path.1);
            group = Some(path);
        }
        let code = if meta.code.is_empty() { "-" } else { meta.code };
        println!("  {:<6} {:<8} {}", code, meta.severity, meta.key.name);
    }
    println!("\n{} rules", rules.len());

    Ok(())
}
