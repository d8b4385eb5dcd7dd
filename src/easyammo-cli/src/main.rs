mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::*;
use commands::apply::ConverterSource;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            config,
            items,
            output,
            plugins_dir,
            mod_dir,
            color_converter,
        } => {
            let converter = ConverterSource::from_args(plugins_dir, mod_dir, color_converter);
            commands::apply::handle(&config, &items, output.as_deref(), &converter, cli.verbose)?;
        }

        Commands::Resolve {
            config,
            color_converter,
            penetration,
        } => {
            logging::init(cli.verbose);
            commands::resolve::handle(&config, &penetration, color_converter)?;
        }

        Commands::Validate { config, json } => {
            logging::init(cli.verbose);
            commands::validate::handle(&config, json)?;
        }

        Commands::Colors => {
            commands::colors::handle();
        }
    }

    Ok(())
}
