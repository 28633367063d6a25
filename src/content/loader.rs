//! Course loader - assembles the course from the lesson directory

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::course::{topic_filename, Course, Day, Topic};
use super::markdown::{parse_markdown, read_markdown_file};
use crate::CourseBuilder;

/// Number of days in the course
pub const DAY_COUNT: u32 = 7;

/// Topic slots per day
pub const TOPICS_PER_DAY: u32 = 5;

lazy_static! {
    static ref TOPIC_FILE_RE: Regex = Regex::new(r"^day0[1-7]-topic0[1-5]\.md$").unwrap();
}

/// Status of one expected topic file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSlot {
    pub day_num: u32,
    pub topic_num: u32,
    pub filename: String,
    pub path: PathBuf,
    pub exists: bool,
}

/// Loads lessons from the source directory
pub struct CourseLoader<'a> {
    builder: &'a CourseBuilder,
}

impl<'a> CourseLoader<'a> {
    /// Create a new course loader
    pub fn new(builder: &'a CourseBuilder) -> Self {
        Self { builder }
    }

    /// Every expected topic slot, day by day
    pub fn slots(&self) -> Vec<TopicSlot> {
        let mut slots = Vec::new();
        for day_num in 1..=DAY_COUNT {
            for topic_num in 1..=TOPICS_PER_DAY {
                let filename = topic_filename(day_num, topic_num);
                let path = self.builder.source_dir.join(&filename);
                let exists = path.exists();
                slots.push(TopicSlot {
                    day_num,
                    topic_num,
                    filename,
                    path,
                    exists,
                });
            }
        }
        slots
    }

    /// Load the full course, skipping missing topic files
    pub fn load_course(&self) -> Course {
        let mut days = Vec::with_capacity(DAY_COUNT as usize);

        for day_num in 1..=DAY_COUNT {
            let mut topics = Vec::new();

            for topic_num in 1..=TOPICS_PER_DAY {
                let filename = topic_filename(day_num, topic_num);
                let path = self.builder.source_dir.join(&filename);

                if path.exists() {
                    topics.push(load_topic(&path, day_num, topic_num));
                    println!("✅ Loaded: {}", filename);
                } else {
                    tracing::debug!("No lesson at {:?}", path);
                    println!("⚠️ Missing: {}", filename);
                }
            }

            let meta = self.builder.config.day_meta(day_num);
            days.push(Day::new(day_num, meta, topics));
        }

        Course {
            course: self.builder.config.course.clone(),
            days,
        }
    }

    /// Markdown files in the source directory that fit no topic slot
    pub fn stray_files(&self) -> Vec<PathBuf> {
        let source_dir = &self.builder.source_dir;
        if !source_dir.exists() {
            return Vec::new();
        }

        let mut strays: Vec<PathBuf> = WalkDir::new(source_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|path| path.is_file() && is_markdown_file(path))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| !TOPIC_FILE_RE.is_match(n))
                    .unwrap_or(true)
            })
            .collect();

        strays.sort();
        strays
    }
}

/// Read and parse a single topic file
fn load_topic(path: &Path, day_num: u32, topic_num: u32) -> Topic {
    let content = read_markdown_file(path);
    let parsed = parse_markdown(&content);
    Topic::from_parsed(day_num, topic_num, parsed)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn builder_for(dir: &TempDir) -> CourseBuilder {
        CourseBuilder::with_paths(dir.path(), dir.path().join("content.json"))
    }

    #[test]
    fn test_load_course_skips_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("day01-topic01.md"),
            "# 安装技能\n## 学习目标\n- 会安装\n## 步骤\n",
        )
        .unwrap();
        fs::write(dir.path().join("day01-topic03.md"), "no heading").unwrap();
        fs::write(dir.path().join("day07-topic05.md"), "# Last").unwrap();

        let builder = builder_for(&dir);
        let course = CourseLoader::new(&builder).load_course();

        assert_eq!(course.days.len(), 7);
        assert_eq!(course.topic_count(), 3);

        let day1 = &course.days[0];
        assert_eq!(day1.id, "day01");
        assert_eq!(day1.title, "Day 1：技能市场入门");
        assert_eq!(day1.icon, "🚀");
        let ids: Vec<_> = day1.topics.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["day01-topic01", "day01-topic03"]);
        assert_eq!(day1.topics[0].title, "安装技能");
        assert_eq!(day1.topics[0].learning_goals, vec!["- 会安装"]);
        assert_eq!(day1.topics[1].title, "Topic 3");

        assert!(course.days[1].topics.is_empty());
        assert_eq!(course.days[6].topics[0].id, "day07-topic05");
    }

    #[test]
    fn test_day_ids_without_any_files() {
        let dir = TempDir::new().unwrap();
        let builder = builder_for(&dir);
        let course = CourseLoader::new(&builder).load_course();

        let ids: Vec<_> = course.days.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["day01", "day02", "day03", "day04", "day05", "day06", "day07"]
        );
        assert_eq!(course.topic_count(), 0);
        assert_eq!(course.course.total_docs, 35);
    }

    #[test]
    fn test_unreadable_topic_uses_fallback_title() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day02-topic02.md"), [0xff, 0xfe, 0x80]).unwrap();

        let builder = builder_for(&dir);
        let course = CourseLoader::new(&builder).load_course();

        let topic = &course.days[1].topics[0];
        assert_eq!(topic.id, "day02-topic02");
        assert_eq!(topic.title, "Topic 2");
        assert_eq!(topic.content, "");
        assert!(topic.learning_goals.is_empty());
    }

    #[test]
    fn test_slots() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day03-topic02.md"), "# x").unwrap();

        let builder = builder_for(&dir);
        let slots = CourseLoader::new(&builder).slots();

        assert_eq!(slots.len(), 35);
        assert_eq!(slots[0].filename, "day01-topic01.md");
        assert_eq!(slots[34].filename, "day07-topic05.md");
        let found: Vec<_> = slots.iter().filter(|s| s.exists).collect();
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].day_num, found[0].topic_num), (3, 2));
    }

    #[test]
    fn test_stray_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day01-topic01.md"), "# ok").unwrap();
        fs::write(dir.path().join("day08-topic01.md"), "# extra day").unwrap();
        fs::write(dir.path().join("day1-topic1.md"), "# unpadded").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts").join("day01-topic02.md"), "# nested").unwrap();

        let builder = builder_for(&dir);
        let strays = CourseLoader::new(&builder).stray_files();

        let names: Vec<_> = strays
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["day08-topic01.md", "day1-topic1.md"]);
    }
}
