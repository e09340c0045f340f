//! Configuration loaded from `.submitfmt.toml`.
//!
//! The file is looked up in the working directory and its ancestors; the
//! first one found wins. Every value is optional and CLI flags override it.
//!
//! ```toml
//! [output]
//! dir = "data"
//! file_name = "subm_full.csv"
//! precision = 5
//! create_dir = false
//!
//! [clip]
//! lower = 0.02
//! upper = 0.98
//!
//! [ids]
//! strategy = "basename"   # or "fixed-offset"
//! offset = 10
//! ```

mod core;
mod loader;

pub use self::core::{IdStrategyKind, IdsConfig, OutputConfig, SubmitConfig};
pub use loader::{
    directory_ancestors, find_config, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

/// Commented default configuration written by `submitfmt init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# submitfmt configuration

[output]
# Directory the submission file is written to
dir = "data"
file_name = "subm_full.csv"
# Fractional digits per label
precision = 5
# Create the output directory when missing
create_dir = false

[clip]
# Probabilities are clipped into [lower, upper]
lower = 0.02
upper = 0.98

[ids]
# "basename": id is the file name before its first '.'
# "fixed-offset": id starts at character `offset` of the full name
strategy = "basename"
offset = 10
"#;
