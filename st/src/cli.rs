//! CLI argument parsing for stencil

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "st")]
#[command(author, version, about = "Generate source files from token-substituted templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new source file from a template
    New {
        /// Type name, also the output file stem
        #[arg(required = true)]
        name: String,

        /// Template kind (see `st kinds`)
        #[arg(short, long)]
        kind: Option<String>,

        /// Description for the file header
        #[arg(short, long)]
        description: Option<String>,

        /// Author for the file header
        #[arg(short, long)]
        author: Option<String>,

        /// Namespace for the generated type
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output file extension, without the dot
        #[arg(short, long)]
        ext: Option<String>,

        /// Directory to write into (default: current directory)
        #[arg(short = 'o', long)]
        dir: Option<PathBuf>,
    },

    /// Render a template to stdout without writing anything
    Preview {
        /// Type name used in the rendered text
        #[arg(required = true)]
        name: String,

        /// Template kind (see `st kinds`)
        #[arg(short, long)]
        kind: Option<String>,

        /// Description for the file header
        #[arg(short, long)]
        description: Option<String>,

        /// Author for the file header
        #[arg(short, long)]
        author: Option<String>,

        /// Namespace for the generated type
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output file extension, without the dot
        #[arg(short, long)]
        ext: Option<String>,
    },

    /// List the available template kinds
    Kinds,

    /// Write the built-in default templates into the templates directory
    Init {
        /// Overwrite template files that already exist
        #[arg(short, long)]
        force: bool,
    },
}
