//! Course configuration (course.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BuildError, Result};

/// Main course configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    // Directory
    pub source_dir: String,
    pub output_file: String,

    // Course
    #[serde(default)]
    pub course: CourseInfo,

    // Day metadata, keyed by day number
    #[serde(default = "default_days")]
    pub days: IndexMap<u32, DayMeta>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            source_dir: "openclaw101-learning".to_string(),
            output_file: "openclaw101-website/data/content-full.json".to_string(),
            course: CourseInfo::default(),
            days: default_days(),
        }
    }
}

impl CourseConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BuildError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CourseConfig =
            serde_yaml::from_str(&content).map_err(|source| BuildError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }

    /// Look up the metadata for a day, falling back to a generic label
    pub fn day_meta(&self, day_num: u32) -> DayMeta {
        self.days
            .get(&day_num)
            .cloned()
            .unwrap_or_else(|| DayMeta::fallback(day_num))
    }
}

/// Static course information, serialized as the `course` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseInfo {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub duration: String,
    #[serde(rename = "dailyTime", alias = "daily_time")]
    pub daily_time: String,
    /// Advertised document count. Not derived from the files actually found.
    #[serde(rename = "totalDocs", alias = "total_docs")]
    pub total_docs: u32,
}

impl Default for CourseInfo {
    fn default() -> Self {
        Self {
            title: "OpenClaw 101".to_string(),
            subtitle: "系统学习指南".to_string(),
            description: r#"专为已部署 OpenClaw 并连接飞书的数学老师设计，帮助你从"部署完成但不会用"进阶到"打造专属教研 AI 助手""#
                .to_string(),
            duration: "7天".to_string(),
            daily_time: "1-2小时".to_string(),
            total_docs: 35,
        }
    }
}

/// Title, subtitle and icon shown for a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeta {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

impl DayMeta {
    fn new(title: &str, subtitle: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Generic metadata for a day missing from the table
    pub fn fallback(day_num: u32) -> Self {
        Self {
            title: format!("Day {}", day_num),
            subtitle: String::new(),
            icon: default_icon(),
        }
    }
}

fn default_icon() -> String {
    "📚".to_string()
}

fn default_days() -> IndexMap<u32, DayMeta> {
    let mut days = IndexMap::new();
    days.insert(1, DayMeta::new("Day 1：技能市场入门", r#"让机器人"有用""#, "🚀"));
    days.insert(
        2,
        DayMeta::new(
            "Day 2：飞书场景深度整合",
            r#"飞书群里的机器人真正"智能"起来"#,
            "💬",
        ),
    );
    days.insert(3, DayMeta::new("Day 3：数学老师专属", "教研辅助技能", "📐"));
    days.insert(4, DayMeta::new("Day 4：记忆系统", r#"让机器人"记得住""#, "🧠"));
    days.insert(5, DayMeta::new("Day 5：自动化工作流", "真正省时间", "⚡"));
    days.insert(6, DayMeta::new("Day 6：高级玩法探索", "进阶技巧", "🚀"));
    days.insert(7, DayMeta::new("Day 7：打造专属教研AI助手", "完整工作流", "🎯"));
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CourseConfig::default();
        assert_eq!(config.source_dir, "openclaw101-learning");
        assert_eq!(config.course.title, "OpenClaw 101");
        assert_eq!(config.course.total_docs, 35);
        assert_eq!(config.days.len(), 7);
    }

    #[test]
    fn test_day_meta_lookup() {
        let config = CourseConfig::default();
        let day1 = config.day_meta(1);
        assert_eq!(day1.title, "Day 1：技能市场入门");
        assert_eq!(day1.icon, "🚀");

        let day7 = config.day_meta(7);
        assert_eq!(day7.subtitle, "完整工作流");
        assert_eq!(day7.icon, "🎯");
    }

    #[test]
    fn test_day_meta_fallback() {
        let config = CourseConfig::default();
        let day9 = config.day_meta(9);
        assert_eq!(day9.title, "Day 9");
        assert_eq!(day9.subtitle, "");
        assert_eq!(day9.icon, "📚");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
source_dir: lessons
output_file: out/content.json
course:
  title: Rust 101
  dailyTime: 30 min
days:
  1:
    title: Ownership
"#;
        let config: CourseConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source_dir, "lessons");
        assert_eq!(config.output_file, "out/content.json");
        assert_eq!(config.course.title, "Rust 101");
        assert_eq!(config.course.daily_time, "30 min");
        assert_eq!(config.course.total_docs, 35);

        let day1 = config.day_meta(1);
        assert_eq!(day1.title, "Ownership");
        assert_eq!(day1.icon, "📚");
        assert_eq!(config.day_meta(2).title, "Day 2");
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("course.yml");
        fs::write(&path, "days: [not, a, map").unwrap();
        let err = CourseConfig::load(&path).unwrap_err();
        assert!(matches!(err, BuildError::ConfigParse { .. }));
    }
}
