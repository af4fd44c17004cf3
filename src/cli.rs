use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "weekly-qfq")]
#[command(about = "Weekly adjusted stock dataset builder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the dataset and print a preview of the first entries
    Preview {
        /// Path to the SQLite store (defaults to stock-data.sqlite two
        /// directories above the executable)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { database } => {
            commands::preview::run(database);
        }
    }
}
