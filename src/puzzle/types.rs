use serde::Deserialize;

/// One trial as authored in a `level_*.toml` file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Level {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    /// Flavour line shown above the encoded prompt.
    #[serde(default)]
    pub riddle: Option<String>,
    /// Generated from `solution` when left empty.
    #[serde(default)]
    pub prompt: String,
    pub solution: String,
    pub reward: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

impl Level {
    pub fn new(id: u32, solution: &str, reward: &str, hints: &[&str]) -> Self {
        Level {
            id,
            title: None,
            riddle: None,
            prompt: String::new(),
            solution: solution.to_string(),
            reward: reward.to_string(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Trial {}", self.id))
    }
}
