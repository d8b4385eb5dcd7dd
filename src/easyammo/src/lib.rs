//! # easyammo
//!
//! Recolours ammunition items by penetration power.
//!
//! This library provides:
//! - A penetration to background colour resolver, with threshold tables and
//!   gradient range tables
//! - Hex/RGB colour math for gradients
//! - Configuration validation and loading (JSON, JSON5, YAML, TOML)
//! - An adjustment pass over a host-owned item table
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use easyammo::{Activation, ItemTable, TracingLogger};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = TracingLogger;
//! let mut items: ItemTable = serde_json::from_str(&std::fs::read_to_string("items.json")?)?;
//!
//! let loaded = easyammo::config::load(Path::new("config/config.json"));
//! let plugins = Path::new("BepInEx/plugins");
//! if let Some(activation) = Activation::prepare(
//!     loaded,
//!     || easyammo::is_color_converter_installed(plugins),
//!     &logger,
//! ) {
//!     let result = activation.apply(&mut items, &logger);
//!     println!("changed {}", result.changed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod adjust;
pub mod color;
pub mod config;
pub mod converter;
pub mod items;
pub mod logger;
pub mod reference;
pub mod resolve;

#[doc(inline)]
pub use activation::Activation;
#[doc(inline)]
pub use adjust::{adjust_ammunition, AdjustResult};
#[doc(inline)]
pub use color::{is_hex_color, Color, ColorError, HexColor, Rgb};
#[doc(inline)]
pub use config::{
    ConfigError, Configuration, GeneralSettings, Gradient, PenetrationRange, PenetrationTable,
    RangeEntry, ThresholdEntry,
};
#[doc(inline)]
pub use converter::{default_plugin_dir, is_color_converter_installed, COLOR_CONVERTER_PLUGIN};
#[doc(inline)]
pub use items::{ItemProps, ItemTable, TemplateItem};
#[doc(inline)]
pub use logger::{HostLogger, LogColour, MemoryLogger, TracingLogger};
#[doc(inline)]
pub use reference::{vanilla_by_name, vanilla_hex, VanillaColor, VANILLA_COLORS};
#[doc(inline)]
pub use resolve::resolve_color;
