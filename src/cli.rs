//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;



/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "doc-site-conf",
    author,
    about = "Loads the documentation site configuration and hands it to the documentation generator.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./docs/configuration.toml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        global = true,
        help = "Path to the configuration file to use. Defaults to ./docs/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        long = "log-level",
        global = true,
        default_value = "info",
        help = "Console log level filter, in tracing's EnvFilter syntax."
    )]
    pub log_level: String,

    #[arg(
        long = "log-file-directory",
        global = true,
        help = "If specified, logs are additionally written to doc-site-conf.log in this directory."
    )]
    pub log_file_directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CLICommand,
}


#[derive(Subcommand, Debug)]
pub enum CLICommand {
    /// Print a human-readable summary of the configuration.
    Show {
        #[arg(
            long = "generation-root",
            help = "Also print the favicon path with the generation root placeholder substituted."
        )]
        generation_root: Option<PathBuf>,
    },

    /// Export the configuration for the documentation generator.
    Export {
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        #[arg(
            short = 'o',
            long = "output-file-path",
            help = "File to write the export to. Prints to stdout if unspecified."
        )]
        output_file_path: Option<PathBuf>,
    },

    /// Report structural issues (empty targets, duplicate stylesheets, ...).
    Check,
}
