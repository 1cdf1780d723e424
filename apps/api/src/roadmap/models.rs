use serde::{Deserialize, Serialize};

/// Learning phase of a roadmap step. A complete roadmap has one of each, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub name: String,
    pub subtopics: Vec<String>,
    pub resources: Vec<String>,
    pub estimated_hours: u32,
}

impl Topic {
    /// Study hours credited for completing one subtopic: the topic's hours split
    /// evenly across its subtopics, rounded up.
    pub fn hours_per_subtopic(&self) -> u32 {
        subtopic_hours(self.estimated_hours, self.subtopics.len())
    }
}

/// `ceil(estimated_hours / subtopic_count)`, 0 when there are no subtopics.
pub fn subtopic_hours(estimated_hours: u32, subtopic_count: usize) -> u32 {
    match u32::try_from(subtopic_count) {
        Ok(0) | Err(_) => 0,
        Ok(count) => estimated_hours.div_ceil(count),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub level: Level,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    pub duration: String,
}

impl RoadmapStep {
    pub fn total_hours(&self) -> u32 {
        self.topics.iter().map(|t| t.estimated_hours).sum()
    }
}

/// Number of steps in every valid roadmap.
pub const ROADMAP_LEN: usize = 3;

/// Technologies with a pre-authored fallback roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technology {
    WebDev,
    MobileDev,
    AiMl,
    DataScience,
    Devops,
    UiUx,
    Blockchain,
}

impl Technology {
    pub const ALL: [Technology; 7] = [
        Technology::WebDev,
        Technology::MobileDev,
        Technology::AiMl,
        Technology::DataScience,
        Technology::Devops,
        Technology::UiUx,
        Technology::Blockchain,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Technology::WebDev => "web-dev",
            Technology::MobileDev => "mobile-dev",
            Technology::AiMl => "ai-ml",
            Technology::DataScience => "data-science",
            Technology::Devops => "devops",
            Technology::UiUx => "ui-ux",
            Technology::Blockchain => "blockchain",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Technology::WebDev => "Web Development",
            Technology::MobileDev => "Mobile Development",
            Technology::AiMl => "AI/Machine Learning",
            Technology::DataScience => "Data Science",
            Technology::Devops => "DevOps",
            Technology::UiUx => "UI/UX Design",
            Technology::Blockchain => "Blockchain/Web3",
        }
    }

    /// Resolves a client-supplied key. Unknown keys resolve to `WebDev`.
    pub fn from_key_or_default(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or(Technology::WebDev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(hours: u32, subtopics: usize) -> Topic {
        Topic {
            name: "t".to_string(),
            subtopics: (0..subtopics).map(|i| format!("s{i}")).collect(),
            resources: vec![],
            estimated_hours: hours,
        }
    }

    #[test]
    fn test_hours_per_subtopic_rounds_up() {
        assert_eq!(topic(25, 5).hours_per_subtopic(), 5);
        assert_eq!(topic(35, 4).hours_per_subtopic(), 9);
        assert_eq!(topic(1, 3).hours_per_subtopic(), 1);
    }

    #[test]
    fn test_hours_per_subtopic_without_subtopics_is_zero() {
        assert_eq!(topic(40, 0).hours_per_subtopic(), 0);
    }

    #[test]
    fn test_level_accepts_lowercase_alias() {
        let level: Level = serde_json::from_str(r#""intermediate""#).unwrap();
        assert_eq!(level, Level::Intermediate);
    }

    #[test]
    fn test_step_deserializes_camel_case_hours() {
        let json = r#"{
            "level": "Beginner",
            "title": "Basics",
            "description": "Start here",
            "skills": ["HTML"],
            "topics": [{"name": "HTML", "subtopics": ["a", "b"], "resources": ["MDN"], "estimatedHours": 10}],
            "duration": "1 month"
        }"#;
        let step: RoadmapStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.topics[0].estimated_hours, 10);
        assert_eq!(step.total_hours(), 10);
    }

    #[test]
    fn test_unknown_technology_key_is_web_dev() {
        assert_eq!(
            Technology::from_key_or_default("quantum-knitting"),
            Technology::WebDev
        );
        assert_eq!(Technology::from_key_or_default("devops"), Technology::Devops);
    }

    #[test]
    fn test_technology_serde_matches_key() {
        for tech in Technology::ALL {
            let json = serde_json::to_string(&tech).unwrap();
            assert_eq!(json, format!("\"{}\"", tech.key()));
        }
    }
}
