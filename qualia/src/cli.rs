// qualia/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qualia")]
#[command(about = "Catalog Quality Scoring & Dynamic Pivot Engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Scores every asset of a snapshot along the five quality dimensions
    Score {
        /// Asset snapshot (JSON export of the catalog browse API)
        snapshot: PathBuf,

        /// Directory holding scoring-weights.yaml (built-in defaults if absent)
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,

        /// Scoring profile to apply (ex: "regulatory")
        #[arg(long)]
        profile: Option<String>,

        /// Maximum rows to display (worst scores first)
        #[arg(long, default_value = "25")]
        limit: usize,

        /// Output format: table | json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 🧮 Pivots a snapshot by dimensions and computes measures per group
    Pivot {
        /// Asset snapshot (JSON export of the catalog browse API)
        snapshot: PathBuf,

        /// Dimensions to group by, in order (ex: connection,assetType)
        #[arg(long, value_delimiter = ',', default_value = "connection")]
        by: Vec<String>,

        /// Measures to compute per group (ex: assetCount,overall)
        #[arg(long, value_delimiter = ',', default_value = "assetCount,overall")]
        measures: Vec<String>,

        /// Render the hierarchical rollup instead of the flat table
        #[arg(long)]
        nested: bool,

        /// Directory holding scoring-weights.yaml (built-in defaults if absent)
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,

        /// Scoring profile to apply (ex: "regulatory")
        #[arg(long)]
        profile: Option<String>,

        /// Output format: table | json
        #[arg(long, default_value = "table")]
        format: String,
    },
}
