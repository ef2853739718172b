use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Difficulty tier controlling operand ranges and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Simple,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Simple, Level::Medium, Level::Hard];

    /// Star label shown on the level button
    pub fn stars(self) -> &'static str {
        match self {
            Level::Simple => "⭐",
            Level::Medium => "⭐⭐",
            Level::Hard => "⭐⭐⭐",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Simple => "simple",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }

    pub fn next(self) -> Level {
        match self {
            Level::Simple => Level::Medium,
            Level::Medium => Level::Hard,
            Level::Hard => Level::Simple,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Level::Simple),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
