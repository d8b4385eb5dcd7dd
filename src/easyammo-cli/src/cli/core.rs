//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "easyammo")]
#[command(about = "Recolour ammunition by penetration power", long_about = None)]
pub struct Cli {
    /// Show debug output (same as `general.debug` in the config)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Adjust the background colour of every ammunition item in an item table
    ///
    /// With `enabled: false` in the configuration the table is written out
    /// unchanged. A configuration that fails validation exits non-zero and
    /// writes nothing.
    #[command(visible_alias = "a")]
    Apply {
        /// Mod configuration file (.json, .json5, .yaml, .toml)
        #[arg(short, long, env = "EASYAMMO_CONFIG")]
        config: PathBuf,

        /// Item templates JSON (id -> item)
        #[arg(short, long)]
        items: PathBuf,

        /// Where to write the adjusted table (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Client plugin directory to look for the colour converter in
        #[arg(long, conflicts_with_all = ["mod_dir", "color_converter"])]
        plugins_dir: Option<PathBuf>,

        /// Server mod directory; plugins are looked up relative to it
        #[arg(long, conflicts_with = "color_converter")]
        mod_dir: Option<PathBuf>,

        /// Treat the colour converter as installed
        #[arg(long)]
        color_converter: bool,
    },

    /// Resolve background colours for penetration values
    #[command(visible_alias = "r")]
    Resolve {
        /// Mod configuration file
        #[arg(short, long, env = "EASYAMMO_CONFIG")]
        config: PathBuf,

        /// Allow hex colours and gradients
        #[arg(long)]
        color_converter: bool,

        /// Penetration values
        #[arg(required = true, allow_negative_numbers = true)]
        penetration: Vec<i64>,
    },

    /// Validate a configuration file and show the parsed table
    #[command(visible_alias = "v")]
    Validate {
        /// Mod configuration file
        #[arg(short, long, env = "EASYAMMO_CONFIG")]
        config: PathBuf,

        /// Print the normalised configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the vanilla background colours
    Colors,
}
