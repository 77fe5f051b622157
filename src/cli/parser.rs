use crate::core::projection::{SortSpec, ViewQuery};
use crate::export::ExportFormat;
use crate::models::{EmailStatus, RecordField};
use crate::config::Config;
use crate::utils::path::expand_tilde;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for leadgrid
/// Spreadsheet-style prospect list with AI-assisted company enrichment
#[derive(Parser)]
#[command(
    name = "leadgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "A prospect grid for the terminal: search, sort, edit and enrich company leads",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--config FILE` when given, else `~/.leadgrid/leadgrid.conf`.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        }
    }
}

/// Search / filter / sort options shared by every command that shows rows.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Case-insensitive search over imported data, name, website and LinkedIn
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep only rows with this email status (repeatable)
    #[arg(long = "status", value_enum)]
    pub status: Vec<EmailStatus>,

    /// Sort by column
    #[arg(long, value_enum)]
    pub sort: Option<RecordField>,

    /// Sort descending (with --sort)
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

impl ViewArgs {
    pub fn to_query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.clone().unwrap_or_default(),
            filters: self.status.iter().copied().collect(),
            sort: self.sort.map(|field| {
                if self.desc {
                    SortSpec::desc(field)
                } else {
                    SortSpec::asc(field)
                }
            }),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the prospect grid of a CSV/JSON file
    List {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Enrich rows with company details from the configured provider
    Enrich {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[command(flatten)]
        view: ViewArgs,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Row ids to enrich (default: every visible row)"
        )]
        ids: Vec<u64>,

        #[arg(long, value_name = "FILE", help = "Answer from a JSON fixture file instead of the API")]
        fixtures: Option<String>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Write the enriched rows to FILE")]
        output: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the (optionally filtered) grid
    Export {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        view: ViewArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Count potential duplicate companies
    Dedupe {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,
    },

    /// Interactive session over the grid
    Shell {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<String>,

        #[arg(long, value_name = "FILE", help = "Answer from a JSON fixture file instead of the API")]
        fixtures: Option<String>,
    },
}
