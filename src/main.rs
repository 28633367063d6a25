//! CLI entry point for course-builder

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use course_builder::CourseBuilder;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "course-builder")]
#[command(version)]
#[command(about = "Builds the course website content JSON from daily Markdown lessons", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Config file to use instead of course.yml in the base directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the course JSON (default)
    #[command(alias = "b")]
    Build {
        /// Lesson directory
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List expected lesson files and their status
    List,

    /// Delete the generated JSON file
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "course_builder=debug,info"
    } else {
        "course_builder=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let command = cli.command.unwrap_or(Commands::Build {
        input: None,
        output: None,
    });

    let config = cli.config.as_deref();

    match command {
        Commands::Build { input, output } => {
            let mut builder = load_builder(&base_dir, config)?;
            if let Some(input) = input {
                builder = builder.with_source_dir(input);
            }
            if let Some(output) = output {
                builder = builder.with_output_file(output);
            }

            let summary = builder.build()?;
            println!();
            println!("✅ Complete! Saved to: {}", summary.output.display());
            println!("Total days: {}", summary.day_count);
            println!("Total topics: {}", summary.topic_count);
        }

        Commands::List => {
            let builder = load_builder(&base_dir, config)?;
            course_builder::commands::list::run(&builder);
        }

        Commands::Clean => {
            let builder = load_builder(&base_dir, config)?;
            tracing::info!("Cleaning generated content...");
            builder.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("course-builder version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_builder(base_dir: &Path, config: Option<&Path>) -> Result<CourseBuilder> {
    let builder = match config {
        Some(config) => CourseBuilder::with_config_file(base_dir, config)?,
        None => CourseBuilder::new(base_dir)?,
    };
    Ok(builder)
}
