//! Resolve command handler
//!
//! Shows which colour a set of penetration values would get, without
//! touching any item table.

use anyhow::{Context, Result};
use easyammo::{config, resolve_color, Color, ColorError, PenetrationTable};
use std::path::Path;

/// Resolve every value against the table, keeping per-value failures
pub fn resolve_all(
    table: &PenetrationTable,
    penetrations: &[i64],
    can_interpolate: bool,
) -> Vec<(i64, Result<Color, ColorError>)> {
    penetrations
        .iter()
        .map(|&p| (p, resolve_color(p, table, can_interpolate)))
        .collect()
}

/// Handle the resolve command
pub fn handle(config_path: &Path, penetrations: &[i64], can_interpolate: bool) -> Result<()> {
    let config = config::load(config_path)
        .with_context(|| format!("Invalid configuration: {}", config_path.display()))?;

    for (penetration, resolved) in resolve_all(&config.penetration, penetrations, can_interpolate)
    {
        match resolved {
            Ok(color) => println!("{:>4}  {}", penetration, color),
            Err(e) => println!("{:>4}  error: {}", penetration, e),
        }
    }

    Ok(())
}
