//! Markdown reading and lesson parsing

use std::fs;
use std::path::Path;

/// Marker that opens the learning goals section
pub const GOALS_MARKER: &str = "学习目标";

/// Maximum number of learning goals kept per topic
pub const MAX_LEARNING_GOALS: usize = 5;

/// Read a markdown file, returning an empty string on failure
pub fn read_markdown_file<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Error reading {:?}: {}", path, e);
            String::new()
        }
    }
}

/// Title, goals and raw content extracted from a lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarkdown {
    /// First top-level heading, empty if there is none
    pub title: String,
    /// The unmodified source text
    pub content: String,
    /// At most `MAX_LEARNING_GOALS` goal lines
    pub learning_goals: Vec<String>,
}

/// Parse a lesson into its title and learning goals
pub fn parse_markdown(content: &str) -> ParsedMarkdown {
    let mut learning_goals = GoalScanner::new().scan(content);
    learning_goals.truncate(MAX_LEARNING_GOALS);

    ParsedMarkdown {
        title: extract_title(content),
        content: content.to_string(),
        learning_goals,
    }
}

/// Extract the text of the first `# ` heading
pub fn extract_title(content: &str) -> String {
    content
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_default()
}

/// Scanner state for the learning goals section
///
/// Every line containing the marker is consumed as a section heading, so only
/// a `## ` line without the marker ends collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalState {
    /// No marker line seen yet
    BeforeGoals,
    /// Marker seen; collecting until the next `## ` heading
    CollectingGoals,
    /// Section closed; later markers are ignored
    Done,
}

/// Line scanner collecting the lines after the first goals marker
#[derive(Debug)]
pub struct GoalScanner {
    state: GoalState,
    goals: Vec<String>,
}

impl GoalScanner {
    pub fn new() -> Self {
        Self {
            state: GoalState::BeforeGoals,
            goals: Vec::new(),
        }
    }

    pub fn state(&self) -> GoalState {
        self.state
    }

    /// Feed one line to the scanner
    pub fn feed(&mut self, line: &str) {
        let is_marker = line.contains(GOALS_MARKER);
        match self.state {
            GoalState::BeforeGoals if is_marker => self.state = GoalState::CollectingGoals,
            GoalState::CollectingGoals if is_marker => {}
            GoalState::CollectingGoals if line.starts_with("## ") => self.state = GoalState::Done,
            GoalState::CollectingGoals => {
                let goal = line.trim();
                if !goal.is_empty() && !line.starts_with('#') {
                    self.goals.push(goal.to_string());
                }
            }
            GoalState::BeforeGoals | GoalState::Done => {}
        }
    }

    /// Run the scanner over every line and return the goals found
    pub fn scan(mut self, content: &str) -> Vec<String> {
        for line in content.split('\n') {
            if self.state == GoalState::Done {
                break;
            }
            self.feed(line);
        }
        self.goals
    }
}

impl Default for GoalScanner {
    fn default() -> Self {
        Self::new()
    }
}
