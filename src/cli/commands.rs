//! CLI commands and argument parsing

use crate::representer::LinkFormat;
use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagelinks CLI
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decorate a JSON page with its total count and page links
    Render {
        /// Representer config file (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Page file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Key holding the page's items
        #[arg(long, default_value = "items")]
        items_key: String,

        /// Override the configured link format
        #[arg(long)]
        link_format: Option<LinkFormat>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the pagination state resolved from a JSON page
    Inspect {
        /// Page file (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show the collection field name derived from a representer type name
    Name {
        /// Representer type name, e.g. TopSongsRepresenter
        type_name: String,
    },
}
