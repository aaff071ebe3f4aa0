use std::fs;
use std::path::Path;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::{info, warn};

use crate::{
    check::structural_issues,
    cli::{CLIArgs, CLICommand},
    configuration::Configuration,
    export::{render, ExportFormat},
    logging::{initialize_tracing, parse_level_filter},
};

mod check;
mod cli;
mod configuration;
mod export;
mod logging;


pub const LOG_FILE_NAME: &str = "doc-site-conf.log";


fn show_configuration(configuration: &Configuration, generation_root: Option<&Path>) {
    println!("Configuration: {}", configuration.file_path.display());
    println!("Doxyfile:      {}", configuration.doc_file);
    println!("Project URL:   {}", configuration.project_url);

    println!("Favicon:       {}", configuration.favicon_path.as_authored());
    if let Some(generation_root) = generation_root {
        if configuration.favicon_path.contains_generation_root_placeholder() {
            println!(
                "               -> {}",
                configuration
                    .favicon_path
                    .resolve_against(generation_root)
                    .display()
            );
        }
    }

    for (title, groups) in [
        ("Navbar", &configuration.navbar),
        ("Secondary navbar", &configuration.secondary_navbar),
    ] {
        println!();
        println!("{title}:");

        if groups.is_empty() {
            println!("  (empty)");
        }

        for group in groups {
            println!("  {} -> {}", group.display_label(), group.target);
            for link in &group.links {
                println!("    {} -> {}", link.display_label(), link.target);
            }
        }
    }

    println!();
    println!("Stylesheets (in load order):");
    for (index, stylesheet) in configuration.stylesheets.iter().enumerate() {
        let location = if stylesheet.is_remote() {
            "remote"
        } else {
            "local"
        };

        println!("  {}. [{location}] {stylesheet}", index + 1);
    }
}

fn export_configuration(
    configuration: &Configuration,
    format: ExportFormat,
    output_file_path: Option<&Path>,
) -> Result<()> {
    let rendered = render(configuration, format)?;

    match output_file_path {
        Some(output_file_path) => {
            if output_file_path.extension().and_then(|extension| extension.to_str())
                != Some(format.file_extension())
            {
                warn!(
                    "Output file {} does not have the usual .{} extension.",
                    output_file_path.display(),
                    format.file_extension()
                );
            }

            fs::write(output_file_path, rendered)
                .into_diagnostic()
                .wrap_err_with(|| {
                    miette!(
                        "Failed to write export to {}.",
                        output_file_path.display()
                    )
                })?;

            info!(
                "Exported configuration as {format:?} to {}.",
                output_file_path.display()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn check_configuration(configuration: &Configuration) -> Result<()> {
    let issues = structural_issues(configuration);

    if issues.is_empty() {
        info!("No structural issues found.");
        return Ok(());
    }

    for issue in &issues {
        warn!("{issue}");
    }

    Err(miette!(
        "Found {} structural issue(s) in {}.",
        issues.len(),
        configuration.file_path.display()
    ))
}


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let logging_raii_guard = initialize_tracing(
        parse_level_filter(&cli_args.log_level)?,
        cli_args.log_file_directory.as_deref(),
        LOG_FILE_NAME,
    )
    .wrap_err("Failed to initialize tracing.")?;

    // Load configuration.
    let configuration = match cli_args.configuration_file_path.as_ref() {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            info!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .wrap_err("Failed to load configuration file.")?;

    info!(
        navbar_groups = configuration.all_navbar_groups().count(),
        stylesheets = configuration.stylesheets.len(),
        "Configuration loaded: {}.",
        configuration.file_path.display()
    );


    let result = match &cli_args.command {
        CLICommand::Show { generation_root } => {
            show_configuration(&configuration, generation_root.as_deref());
            Ok(())
        }
        CLICommand::Export {
            format,
            output_file_path,
        } => export_configuration(&configuration, *format, output_file_path.as_deref()),
        CLICommand::Check => check_configuration(&configuration),
    };


    drop(logging_raii_guard);
    result
}
