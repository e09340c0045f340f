use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::IdStrategyKind;

#[derive(Parser, Debug)]
#[command(name = "submitfmt")]
#[command(about = "Format classifier predictions into a competition submission file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sorted, clipped `id,label` submission file
    Format {
        /// Test-set filenames, one per line, in prediction order
        #[arg(long)]
        filenames: PathBuf,

        /// Two-column prediction table; column 2 is the positive-class probability
        #[arg(long)]
        predictions: PathBuf,

        /// Leaf name of the submission file [default: subm_full.csv]
        #[arg(short = 'o', long = "output-name")]
        output_name: Option<String>,

        /// Directory the submission is written to [default: data]
        #[arg(long = "output-dir", env = "SUBMITFMT_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .submitfmt.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// How ids are read from filenames
        #[arg(long = "id-strategy", value_enum)]
        id_strategy: Option<IdStrategyKind>,

        /// Character offset used by the fixed-offset strategy
        #[arg(long = "id-offset")]
        id_offset: Option<usize>,

        /// Fractional digits per label
        #[arg(long)]
        precision: Option<usize>,

        /// Create the output directory when missing
        #[arg(long = "create-dir")]
        create_dir: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format_command() {
        let cli = Cli::try_parse_from([
            "submitfmt",
            "format",
            "--filenames",
            "files.txt",
            "--predictions",
            "preds.csv",
            "--id-strategy",
            "fixed-offset",
            "--id-offset",
            "8",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Format {
                id_strategy,
                id_offset,
                output_name,
                create_dir,
                ..
            } => {
                assert_eq!(id_strategy, Some(IdStrategyKind::FixedOffset));
                assert_eq!(id_offset, Some(8));
                assert_eq!(output_name, None);
                assert!(!create_dir);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_requires_inputs() {
        assert!(Cli::try_parse_from(["submitfmt", "format", "--filenames", "f.txt"]).is_err());
    }
}
