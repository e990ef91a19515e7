use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "notedown")]
#[command(about = "Export notes from a hosted note service to Markdown")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notebooks available on the note service
    Notebooks,
    /// Export every note in a notebook to Markdown files
    Export {
        /// Notebook name (case-insensitive exact match)
        notebook: String,
        /// Output directory; a notebook-named subdirectory is created inside
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
    },
    /// Render a single note to stdout
    Note {
        /// Note identifier (GUID)
        guid: String,
    },
}
