//! Pre-authored roadmaps served when live generation is unavailable or unusable.
//!
//! The table ships as JSON compiled into the binary and is parsed once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::roadmap::models::{RoadmapStep, Technology};

const FALLBACK_JSON: &str = include_str!("../../data/fallback_roadmaps.json");

fn table() -> &'static HashMap<String, Vec<RoadmapStep>> {
    static TABLE: OnceLock<HashMap<String, Vec<RoadmapStep>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        serde_json::from_str(FALLBACK_JSON).expect("embedded fallback roadmaps are valid JSON")
    })
}

/// Returns the fallback roadmap for a technology key. Unknown keys get `web-dev`.
pub fn fallback_roadmap(technology: &str) -> &'static [RoadmapStep] {
    let key = Technology::from_key_or_default(technology).key();
    table()
        .get(key)
        .or_else(|| table().get(Technology::WebDev.key()))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::models::{Level, ROADMAP_LEN};

    #[test]
    fn test_every_technology_has_an_entry() {
        for tech in Technology::ALL {
            assert!(
                table().contains_key(tech.key()),
                "missing fallback for {}",
                tech.key()
            );
        }
        assert_eq!(table().len(), Technology::ALL.len());
    }

    #[test]
    fn test_every_entry_has_three_ordered_levels() {
        for tech in Technology::ALL {
            let roadmap = fallback_roadmap(tech.key());
            assert_eq!(roadmap.len(), ROADMAP_LEN, "{}", tech.key());
            let levels: Vec<Level> = roadmap.iter().map(|s| s.level).collect();
            assert_eq!(
                levels,
                vec![Level::Beginner, Level::Intermediate, Level::Advanced]
            );
        }
    }

    #[test]
    fn test_every_topic_is_trackable() {
        for tech in Technology::ALL {
            for step in fallback_roadmap(tech.key()) {
                assert!(!step.skills.is_empty());
                for topic in &step.topics {
                    assert!(topic.estimated_hours > 0, "{} has no hours", topic.name);
                    assert!(!topic.subtopics.is_empty());
                    assert!(!topic.resources.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_unknown_key_resolves_to_web_dev() {
        let web = fallback_roadmap("web-dev");
        for key in ["", "cobol", "WEB-DEV", "rust"] {
            assert_eq!(fallback_roadmap(key), web, "key {key:?}");
        }
        assert_eq!(web[0].title, "Frontend Fundamentals");
    }

    #[test]
    fn test_known_key_is_not_web_dev() {
        assert_ne!(fallback_roadmap("blockchain"), fallback_roadmap("web-dev"));
    }
}
