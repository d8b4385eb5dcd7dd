//! Validate command handler

use anyhow::{Context, Result};
use easyammo::{config, Configuration, PenetrationTable};
use std::fmt::Write;
use std::path::Path;

/// Human-readable summary of a configuration
pub fn summarize(config: &Configuration) -> String {
    let mut out = String::new();
    let general = &config.general;
    let _ = writeln!(
        out,
        "enabled: {}  debug: {}  useColorConverter: {}",
        general.enabled, general.debug, general.use_color_converter
    );

    match &config.penetration {
        PenetrationTable::Thresholds(entries) => {
            let _ = writeln!(out, "{} thresholds (first match wins):", entries.len());
            for entry in entries {
                let _ = writeln!(out, "  >= {:<4} {}", entry.min_penetration, entry.background_color);
            }
        }
        PenetrationTable::Ranges(entries) => {
            let _ = writeln!(out, "{} ranges (first match wins):", entries.len());
            for entry in entries {
                let _ = writeln!(
                    out,
                    "  {:>4}..={:<4} {} -> {}",
                    entry.range.min, entry.range.max, entry.colour.start, entry.colour.end
                );
            }
        }
    }

    out
}

/// Handle the validate command
pub fn handle(config_path: &Path, json: bool) -> Result<()> {
    let config = config::load(config_path)
        .with_context(|| format!("Invalid configuration: {}", config_path.display()))?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{}", rendered);
    } else {
        println!("{} is valid", config_path.display());
        print!("{}", summarize(&config));
    }

    Ok(())
}
