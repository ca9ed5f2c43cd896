use std::path::Path;

use anyhow::{Context, Result};
use asset_forms::{FormsConfig, BUILTIN_FORMS};
use colored::Colorize;

pub fn execute(config_path: &Path) -> Result<()> {
    let config = FormsConfig::load(config_path)?;
    let configured = config
        .schemas()
        .with_context(|| format!("Invalid form definitions in {:?}", config_path))?;

    println!("{}", "Built-in forms:".green().bold());
    for name in BUILTIN_FORMS {
        let overridden = configured
            .iter()
            .any(|(configured_name, _)| configured_name.as_str() == *name);
        if overridden {
            println!("  {} {}", name, "(overridden by config)".yellow());
        } else {
            println!("  {}", name);
        }
    }

    if !configured.is_empty() {
        println!();
        println!("{}", format!("Configured in {}:", config_path.display()).green().bold());
        for (name, schema) in &configured {
            println!("  {} ({} fields)", name.cyan(), schema.len());
        }
    }

    Ok(())
}
