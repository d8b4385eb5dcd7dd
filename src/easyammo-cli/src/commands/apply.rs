//! Apply command handler
//!
//! Loads the configuration and the item table, runs the activation and the
//! adjustment pass, and writes the adjusted table back out.

use anyhow::{bail, Context, Result};
use easyammo::{
    config, default_plugin_dir, is_color_converter_installed, Activation, AdjustResult, ItemTable,
    TracingLogger,
};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging;

/// Where the colour converter capability comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConverterSource {
    /// Assume it is installed
    Forced,
    /// Look for the plugin in this directory
    PluginDir(PathBuf),
    /// No plugin directory known
    Unknown,
}

impl ConverterSource {
    pub fn from_args(
        plugins_dir: Option<PathBuf>,
        mod_dir: Option<PathBuf>,
        color_converter: bool,
    ) -> Self {
        if color_converter {
            return Self::Forced;
        }
        match (plugins_dir, mod_dir) {
            (Some(dir), _) => Self::PluginDir(dir),
            (None, Some(mod_dir)) => Self::PluginDir(default_plugin_dir(&mod_dir)),
            (None, None) => Self::Unknown,
        }
    }

    pub fn is_installed(&self) -> bool {
        match self {
            Self::Forced => true,
            Self::PluginDir(dir) => is_color_converter_installed(dir),
            Self::Unknown => false,
        }
    }
}

/// Read an item table from a JSON file
pub fn load_items(path: &Path) -> Result<ItemTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read item table: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse item table: {}", path.display()))
}

/// Write an item table as pretty JSON, to a file or stdout
pub fn write_items(items: &ItemTable, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(items).context("Failed to serialize item table")?;

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write item table to {}", path.display())),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

/// Handle the apply command
///
/// A configuration with `enabled: false` passes the table through unchanged.
/// A configuration that fails to load is an error and nothing is written.
pub fn handle(
    config_path: &Path,
    items_path: &Path,
    output: Option<&Path>,
    converter: &ConverterSource,
    verbose: bool,
) -> Result<AdjustResult> {
    let loaded = config::load(config_path);
    let debug = verbose || loaded.as_ref().is_ok_and(|c| c.general.debug);
    logging::init(debug);

    let disabled = loaded.as_ref().is_ok_and(|c| !c.general.enabled);

    let logger = TracingLogger;
    let Some(activation) = Activation::prepare(loaded, || converter.is_installed(), &logger)
    else {
        if disabled {
            let items = load_items(items_path)?;
            write_items(&items, output)?;
            return Ok(AdjustResult::default());
        }
        bail!("Ammunition was not adjusted; see the log above");
    };

    let mut items = load_items(items_path)?;
    let result = activation.apply(&mut items, &logger);
    write_items(&items, output)?;

    if let Some(path) = output {
        eprintln!(
            "Wrote {} items ({} recoloured, {} failed) to {}",
            items.len(),
            result.changed,
            result.failed,
            path.display()
        );
    }

    Ok(result)
}
