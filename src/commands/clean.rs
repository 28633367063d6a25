//! Remove the generated course JSON

use std::fs;

use crate::error::{BuildError, Result};
use crate::CourseBuilder;

/// Delete the output file if it exists
pub fn run(builder: &CourseBuilder) -> Result<()> {
    let output = &builder.output_file;
    if output.exists() {
        fs::remove_file(output).map_err(|source| BuildError::Remove {
            path: output.clone(),
            source,
        })?;
        tracing::info!("Deleted: {:?}", output);
    }

    Ok(())
}
