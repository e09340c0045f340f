use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use submitfmt::cli::{Cli, Commands};
use submitfmt::commands::{self, FormatConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(commands::exit_status(&err))
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Format {
            filenames,
            predictions,
            output_name,
            output_dir,
            config,
            id_strategy,
            id_offset,
            precision,
            create_dir,
        } => {
            let format_config = FormatConfig {
                filenames,
                predictions,
                output_name,
                output_dir,
                config,
                id_strategy,
                id_offset,
                precision,
                create_dir,
            };
            commands::run_format(format_config)?;
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
        }
    }

    Ok(())
}

// RUST_LOG wins over -v when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
