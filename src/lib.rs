//! course-builder: turns a week of Markdown lessons into course JSON
//!
//! The lesson directory holds files named `day{NN}-topic{NN}.md`. Each one is
//! parsed for its title and learning goals, grouped into days, and written as
//! one JSON document consumed by the course website.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;

pub use error::{BuildError, Result};

use std::path::{Path, PathBuf};

/// Name of the optional config file in the base directory
pub const CONFIG_FILE: &str = "course.yml";

/// The main builder application
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    /// Course configuration
    pub config: config::CourseConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the lesson files
    pub source_dir: PathBuf,
    /// JSON file to write
    pub output_file: PathBuf,
}

impl CourseBuilder {
    /// Create a builder from a base directory, reading `course.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::CourseConfig::load(&config_path)?
        } else {
            config::CourseConfig::default()
        };

        Ok(Self::from_config(base_dir, config))
    }

    /// Create a builder from an explicit config file
    pub fn with_config_file<P: AsRef<Path>, C: AsRef<Path>>(base_dir: P, config: C) -> Result<Self> {
        let config = config::CourseConfig::load(config)?;
        Ok(Self::from_config(base_dir.as_ref().to_path_buf(), config))
    }

    /// Create a builder with default course data and explicit paths
    pub fn with_paths<S: AsRef<Path>, O: AsRef<Path>>(source_dir: S, output_file: O) -> Self {
        let source_dir = source_dir.as_ref().to_path_buf();
        Self {
            config: config::CourseConfig::default(),
            base_dir: source_dir.clone(),
            source_dir,
            output_file: output_file.as_ref().to_path_buf(),
        }
    }

    fn from_config(base_dir: PathBuf, config: config::CourseConfig) -> Self {
        let source_dir = base_dir.join(&config.source_dir);
        let output_file = base_dir.join(&config.output_file);

        Self {
            config,
            base_dir,
            source_dir,
            output_file,
        }
    }

    /// Override the lesson directory
    pub fn with_source_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.source_dir = self.base_dir.join(dir);
        self
    }

    /// Override the output file
    pub fn with_output_file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.output_file = self.base_dir.join(file);
        self
    }

    /// Build the course JSON
    pub fn build(&self) -> Result<commands::build::BuildSummary> {
        commands::build::run(self)
    }

    /// Remove the generated JSON
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
