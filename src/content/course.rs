//! Course, Day and Topic models

use serde::{Deserialize, Serialize};

use super::ParsedMarkdown;
use crate::config::{CourseInfo, DayMeta};

/// The whole course document written to the output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Static course information
    pub course: CourseInfo,

    /// Days in order, always `day01` to `day07`
    pub days: Vec<Day>,
}

impl Course {
    /// Number of topics actually loaded across all days
    pub fn topic_count(&self) -> usize {
        self.days.iter().map(|day| day.topics.len()).sum()
    }
}

/// One day of the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub topics: Vec<Topic>,
}

impl Day {
    pub fn new(day_num: u32, meta: DayMeta, topics: Vec<Topic>) -> Self {
        Self {
            id: day_id(day_num),
            title: meta.title,
            subtitle: meta.subtitle,
            icon: meta.icon,
            topics,
        }
    }
}

/// One lesson of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// `<dayId>-topic<NN>`
    pub id: String,

    /// Lesson title, `Topic N` when the source has no heading
    pub title: String,

    /// Raw markdown source
    pub content: String,

    pub learning_goals: Vec<String>,
}

impl Topic {
    /// Build a topic from a parsed lesson
    pub fn from_parsed(day_num: u32, topic_num: u32, parsed: ParsedMarkdown) -> Self {
        let title = if parsed.title.is_empty() {
            format!("Topic {}", topic_num)
        } else {
            parsed.title
        };

        Self {
            id: topic_id(day_num, topic_num),
            title,
            content: parsed.content,
            learning_goals: parsed.learning_goals,
        }
    }
}

/// `day01` style identifier
pub fn day_id(day_num: u32) -> String {
    format!("day{:02}", day_num)
}

/// `day01-topic01` style identifier, also the source file stem
pub fn topic_id(day_num: u32, topic_num: u32) -> String {
    format!("{}-topic{:02}", day_id(day_num), topic_num)
}

/// Source file name for a topic slot
pub fn topic_filename(day_num: u32, topic_num: u32) -> String {
    format!("{}.md", topic_id(day_num, topic_num))
}
