use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{self, IdStrategyKind, SubmitConfig};
use crate::io;
use crate::submission::{self, FormatOptions, IdStrategy, SubmissionReport, DEFAULT_ID_OFFSET};

/// Inputs and overrides collected from the `format` subcommand.
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    pub filenames: PathBuf,
    pub predictions: PathBuf,
    pub output_name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub id_strategy: Option<IdStrategyKind>,
    pub id_offset: Option<usize>,
    pub precision: Option<usize>,
    pub create_dir: bool,
}

impl FormatConfig {
    /// Layer CLI overrides on top of the file configuration.
    pub fn resolve_options(&self, file_config: &SubmitConfig) -> FormatOptions {
        let mut options = file_config.to_options();

        if let Some(name) = &self.output_name {
            options.file_name = name.clone();
        }
        if let Some(dir) = &self.output_dir {
            options.output_dir = dir.clone();
        }
        if let Some(precision) = self.precision {
            options.precision = precision;
        }
        if self.create_dir {
            options.create_dir = true;
        }
        options.ids = resolve_id_strategy(options.ids, self.id_strategy, self.id_offset);
        options
    }
}

fn resolve_id_strategy(
    configured: IdStrategy,
    kind: Option<IdStrategyKind>,
    offset: Option<usize>,
) -> IdStrategy {
    let configured_offset = match configured {
        IdStrategy::FixedOffset { offset } => offset,
        IdStrategy::Basename => DEFAULT_ID_OFFSET,
    };
    let kind = kind.unwrap_or(match configured {
        IdStrategy::Basename => IdStrategyKind::Basename,
        IdStrategy::FixedOffset { .. } => IdStrategyKind::FixedOffset,
    });

    match kind {
        IdStrategyKind::Basename => {
            if offset.is_some() {
                log::warn!("--id-offset has no effect with the basename id strategy");
            }
            IdStrategy::Basename
        }
        IdStrategyKind::FixedOffset => IdStrategy::FixedOffset {
            offset: offset.unwrap_or(configured_offset),
        },
    }
}

pub fn run_format(format_config: FormatConfig) -> Result<SubmissionReport> {
    let file_config = match &format_config.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load_config(),
    };
    let options = format_config.resolve_options(&file_config);

    let filenames = io::read_filenames(&format_config.filenames)?;
    let predictions = io::read_predictions(&format_config.predictions)?;

    let report = submission::format_submission(&filenames, &predictions, &options)
        .with_context(|| format!("Failed to write {}", options.output_path().display()))?;

    println!("{}", report.to_string().green());
    Ok(report)
}
