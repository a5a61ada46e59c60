//! Command-line inspection of plain-text edge lists.

pub mod commands;
pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list, WEIGHT_PROPERTY};

/// Output format of the `iadj` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}
