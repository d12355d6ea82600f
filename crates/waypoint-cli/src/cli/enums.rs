use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report format written to stdout
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    #[value(name = "table")]
    Table,

    /// One JSON document (pretty-printed)
    #[value(name = "json")]
    Json,
}
