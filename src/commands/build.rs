//! Build the course JSON

use std::path::PathBuf;

use crate::content::loader::CourseLoader;
use crate::error::Result;
use crate::generator;
use crate::CourseBuilder;

/// Counts reported after a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub day_count: usize,
    pub topic_count: usize,
}

/// Load every lesson and write the course JSON
pub fn run(builder: &CourseBuilder) -> Result<BuildSummary> {
    let start = std::time::Instant::now();
    tracing::debug!("Reading lessons from {:?}", builder.source_dir);

    let course = CourseLoader::new(builder).load_course();
    generator::write_course(&course, &builder.output_file)?;

    let summary = BuildSummary {
        output: builder.output_file.clone(),
        day_count: course.days.len(),
        topic_count: course.topic_count(),
    };

    let duration = start.elapsed();
    tracing::info!(
        "Built {} topics in {:.2}s",
        summary.topic_count,
        duration.as_secs_f64()
    );

    Ok(summary)
}
