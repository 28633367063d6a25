//! Content module - lesson parsing and the course model

mod course;
pub mod loader;
mod markdown;

pub use course::{day_id, topic_filename, topic_id, Course, Day, Topic};
pub use markdown::{
    extract_title, parse_markdown, read_markdown_file, GoalScanner, GoalState, ParsedMarkdown,
    GOALS_MARKER, MAX_LEARNING_GOALS,
};
