// Audience mode — the perspective a reader picks for the result set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who is reading the results. Each mode selects exactly one view.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AudienceMode {
    /// Short summaries of each matching paper
    #[default]
    Scientist,
    /// Keyword frequency trends across the matches
    Manager,
    /// Matching titles with health and mission risk terms highlighted
    #[value(alias = "architect")]
    MissionArchitect,
}

impl AudienceMode {
    pub const ALL: [AudienceMode; 3] = [
        AudienceMode::Scientist,
        AudienceMode::Manager,
        AudienceMode::MissionArchitect,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AudienceMode::Scientist => "Scientist",
            AudienceMode::Manager => "Manager",
            AudienceMode::MissionArchitect => "Mission Architect",
        }
    }

    /// One-line explanation shown above the view.
    pub fn description(self) -> &'static str {
        match self {
            AudienceMode::Scientist => "Showing short paper summaries (knowledge distillation).",
            AudienceMode::Manager => "Showing research trends & counts.",
            AudienceMode::MissionArchitect => "Highlighting risk-related keywords.",
        }
    }
}

impl fmt::Display for AudienceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AudienceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "scientist" => Ok(AudienceMode::Scientist),
            "manager" => Ok(AudienceMode::Manager),
            "missionarchitect" | "architect" => Ok(AudienceMode::MissionArchitect),
            _ => anyhow::bail!(
                "Unknown audience mode '{s}' (expected scientist, manager or mission-architect)"
            ),
        }
    }
}
