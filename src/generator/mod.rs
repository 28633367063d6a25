//! JSON generation for the course document

use std::fs;
use std::path::Path;

use crate::content::Course;
use crate::error::{BuildError, Result};

/// Render the course as indented JSON
///
/// Non-ASCII text is written as-is, never `\u` escaped.
pub fn render_course(course: &Course) -> Result<String> {
    Ok(serde_json::to_string_pretty(course)?)
}

/// Write the course JSON to `output`, replacing any existing file
///
/// The parent directory must already exist.
pub fn write_course(course: &Course, output: &Path) -> Result<()> {
    let json = render_course(course)?;
    fs::write(output, json).map_err(|source| BuildError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {:?}", output);
    Ok(())
}
