// qualia/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug qualia pivot ... pour voir les détails
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: PER-ASSET SCORES ---
        Commands::Score {
            snapshot,
            config_dir,
            profile,
            limit,
            format,
        } => {
            if let Err(e) = commands::score::execute(
                &snapshot,
                &config_dir,
                profile.as_deref(),
                limit,
                &format,
            ) {
                eprintln!("❌ Score failed: {e:#}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: DYNAMIC PIVOT / ROLLUP ---
        Commands::Pivot {
            snapshot,
            by,
            measures,
            nested,
            config_dir,
            profile,
            format,
        } => {
            if let Err(e) = commands::pivot::execute(
                &snapshot,
                &by,
                &measures,
                nested,
                &config_dir,
                profile.as_deref(),
                &format,
            ) {
                eprintln!("❌ Pivot failed: {e:#}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
