//! Configuration module

mod course;

pub use course::CourseConfig;
pub use course::CourseInfo;
pub use course::DayMeta;
