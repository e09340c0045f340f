use serde::Deserialize;
use std::path::PathBuf;

use crate::submission::{ClipBounds, FormatOptions, IdStrategy, DEFAULT_ID_OFFSET};

/// Root configuration structure for submitfmt
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SubmitConfig {
    /// Where and how the submission file is written
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Probability clipping bounds
    #[serde(default)]
    pub clip: Option<ClipBounds>,

    /// Identifier extraction from filenames
    #[serde(default)]
    pub ids: Option<IdsConfig>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Directory the submission is written to (default: `data`)
    pub dir: Option<PathBuf>,
    /// Leaf file name (default: `subm_full.csv`)
    pub file_name: Option<String>,
    /// Fractional digits per label (default: 5)
    pub precision: Option<usize>,
    /// Create the output directory when missing (default: false)
    pub create_dir: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategyKind {
    /// Parse the file name without directories or extension
    #[default]
    Basename,
    /// Parse from a fixed character offset up to the first '.'
    FixedOffset,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct IdsConfig {
    #[serde(default)]
    pub strategy: IdStrategyKind,
    /// Character offset for `fixed-offset` (default: 10)
    pub offset: Option<usize>,
}

impl IdsConfig {
    pub fn to_strategy(&self) -> IdStrategy {
        match self.strategy {
            IdStrategyKind::Basename => IdStrategy::Basename,
            IdStrategyKind::FixedOffset => IdStrategy::FixedOffset {
                offset: self.offset.unwrap_or(DEFAULT_ID_OFFSET),
            },
        }
    }
}

impl SubmitConfig {
    /// Resolve into formatter options, filling gaps with defaults.
    pub fn to_options(&self) -> FormatOptions {
        let defaults = FormatOptions::default();
        let output = self.output.clone().unwrap_or_default();

        FormatOptions {
            output_dir: output.dir.unwrap_or(defaults.output_dir),
            file_name: output.file_name.unwrap_or(defaults.file_name),
            clip: self.clip.unwrap_or(defaults.clip),
            ids: self
                .ids
                .as_ref()
                .map(IdsConfig::to_strategy)
                .unwrap_or(defaults.ids),
            precision: output.precision.unwrap_or(defaults.precision),
            create_dir: output.create_dir.unwrap_or(defaults.create_dir),
        }
    }

    pub fn validate(&self) -> crate::errors::Result<()> {
        self.to_options().validate()
    }
}
