//! Roadmap progress tracking: completed items, study hours and daily streak per technology.
//!
//! Items are identified by their display text, as rendered in the roadmap.
//! Every toggle also counts as activity for the streak.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::roadmap::models::RoadmapStep;

/// Persisted progress for one technology. Sets serialize as sorted arrays;
/// missing fields load as empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressData {
    pub completed_skills: BTreeSet<String>,
    pub completed_subtopics: BTreeSet<String>,
    pub completed_resources: BTreeSet<String>,
    pub daily_streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub total_study_hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Skill,
    Subtopic,
    Resource,
}

/// Applies toggles to a technology's `ProgressData`.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    data: ProgressData,
}

impl ProgressTracker {
    pub fn new(data: ProgressData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ProgressData {
        &self.data
    }

    pub fn into_data(self) -> ProgressData {
        self.data
    }

    pub fn toggle_skill(&mut self, skill: &str, today: NaiveDate) -> bool {
        self.touch(today);
        flip(&mut self.data.completed_skills, skill)
    }

    pub fn toggle_resource(&mut self, resource: &str, today: NaiveDate) -> bool {
        self.touch(today);
        flip(&mut self.data.completed_resources, resource)
    }

    /// Flips a subtopic and credits or debits `hours`. Hours never drop below zero.
    pub fn toggle_subtopic(&mut self, subtopic: &str, hours: u32, today: NaiveDate) -> bool {
        self.touch(today);
        let completed = flip(&mut self.data.completed_subtopics, subtopic);
        self.data.total_study_hours = if completed {
            self.data.total_study_hours.saturating_add(hours)
        } else {
            self.data.total_study_hours.saturating_sub(hours)
        };
        completed
    }

    /// Dispatches on `kind`. `hours` only applies to subtopics.
    pub fn toggle(&mut self, kind: ItemKind, name: &str, hours: u32, today: NaiveDate) -> bool {
        match kind {
            ItemKind::Skill => self.toggle_skill(name, today),
            ItemKind::Subtopic => self.toggle_subtopic(name, hours, today),
            ItemKind::Resource => self.toggle_resource(name, today),
        }
    }

    /// Records activity on `today`: consecutive day extends the streak, a gap resets it to 1.
    fn touch(&mut self, today: NaiveDate) {
        let data = &mut self.data;
        match data.last_active_date {
            Some(last) if last == today => return,
            Some(last) if today.pred_opt() == Some(last) => {
                data.daily_streak = data.daily_streak.saturating_add(1);
            }
            _ => data.daily_streak = 1,
        }
        data.last_active_date = Some(today);
    }

    pub fn summary(&self, roadmap: &[RoadmapStep]) -> ProgressSummary {
        ProgressSummary::compute(&self.data, roadmap)
    }
}

/// Returns the new membership of `item`.
fn flip(set: &mut BTreeSet<String>, item: &str) -> bool {
    if set.remove(item) {
        false
    } else {
        set.insert(item.to_string());
        true
    }
}

/// Completion of one category of roadmap items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

impl CategoryProgress {
    fn new<'a>(items: impl Iterator<Item = &'a String>, done: &BTreeSet<String>) -> Self {
        let mut total = 0;
        let mut completed = 0;
        for item in items {
            total += 1;
            if done.contains(item) {
                completed += 1;
            }
        }
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

/// Dashboard figures for a roadmap against saved progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub skills: CategoryProgress,
    pub subtopics: CategoryProgress,
    pub resources: CategoryProgress,
    /// Mean of the three category percentages.
    pub overall_percent: f64,
    pub daily_streak: u32,
    pub total_study_hours: u32,
    /// Sum of topic hours per roadmap step, in step order.
    pub step_hours: Vec<u32>,
}

impl ProgressSummary {
    /// Only items present in `roadmap` count as completed.
    pub fn compute(data: &ProgressData, roadmap: &[RoadmapStep]) -> Self {
        let skills = CategoryProgress::new(
            roadmap.iter().flat_map(|s| s.skills.iter()),
            &data.completed_skills,
        );
        let subtopics = CategoryProgress::new(
            roadmap
                .iter()
                .flat_map(|s| s.topics.iter())
                .flat_map(|t| t.subtopics.iter()),
            &data.completed_subtopics,
        );
        let resources = CategoryProgress::new(
            roadmap
                .iter()
                .flat_map(|s| s.topics.iter())
                .flat_map(|t| t.resources.iter()),
            &data.completed_resources,
        );
        let overall_percent = (skills.percent + subtopics.percent + resources.percent) / 3.0;

        Self {
            skills,
            subtopics,
            resources,
            overall_percent,
            daily_streak: data.daily_streak,
            total_study_hours: data.total_study_hours,
            step_hours: roadmap.iter().map(RoadmapStep::total_hours).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::fallback::fallback_roadmap;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn tracker_last_active(last: Option<NaiveDate>, streak: u32) -> ProgressTracker {
        ProgressTracker::new(ProgressData {
            daily_streak: streak,
            last_active_date: last,
            ..Default::default()
        })
    }

    #[test]
    fn test_toggle_skill_flips_membership() {
        let mut tracker = ProgressTracker::default();
        assert!(tracker.toggle_skill("CSS Grid & Flexbox", day(1)));
        assert!(tracker.data().completed_skills.contains("CSS Grid & Flexbox"));
        assert!(!tracker.toggle_skill("CSS Grid & Flexbox", day(1)));
        assert!(tracker.data().completed_skills.is_empty());
    }

    #[test]
    fn test_toggle_resource_does_not_touch_hours() {
        let mut tracker = ProgressTracker::default();
        tracker.toggle_resource("MDN Web Docs", day(1));
        assert_eq!(tracker.data().total_study_hours, 0);
        assert!(tracker.data().completed_resources.contains("MDN Web Docs"));
    }

    #[test]
    fn test_subtopic_double_toggle_restores_hours() {
        let mut tracker = ProgressTracker::new(ProgressData {
            total_study_hours: 12,
            ..Default::default()
        });
        assert!(tracker.toggle_subtopic("Flexbox", 9, day(1)));
        assert_eq!(tracker.data().total_study_hours, 21);
        assert!(!tracker.toggle_subtopic("Flexbox", 9, day(1)));
        assert_eq!(tracker.data().total_study_hours, 12);
    }

    #[test]
    fn test_subtopic_hours_clamp_at_zero() {
        // Already completed, but the hours were never credited (e.g. edited storage).
        let mut tracker = ProgressTracker::new(ProgressData {
            completed_subtopics: BTreeSet::from(["Closures".to_string()]),
            total_study_hours: 3,
            ..Default::default()
        });
        assert!(!tracker.toggle_subtopic("Closures", 8, day(1)));
        assert_eq!(tracker.data().total_study_hours, 0);
    }

    #[test]
    fn test_streak_first_activity_starts_at_one() {
        let mut tracker = tracker_last_active(None, 0);
        tracker.toggle_skill("a", day(10));
        assert_eq!(tracker.data().daily_streak, 1);
        assert_eq!(tracker.data().last_active_date, Some(day(10)));
    }

    #[test]
    fn test_streak_yesterday_increments_by_one() {
        let mut tracker = tracker_last_active(Some(day(9)), 4);
        tracker.toggle_resource("a", day(10));
        assert_eq!(tracker.data().daily_streak, 5);
        assert_eq!(tracker.data().last_active_date, Some(day(10)));
    }

    #[test]
    fn test_streak_same_day_is_unchanged() {
        let mut tracker = tracker_last_active(Some(day(10)), 4);
        tracker.toggle_subtopic("a", 2, day(10));
        tracker.toggle_skill("b", day(10));
        assert_eq!(tracker.data().daily_streak, 4);
    }

    #[test]
    fn test_streak_gap_resets_to_one() {
        let mut tracker = tracker_last_active(Some(day(7)), 4);
        tracker.toggle_skill("a", day(10));
        assert_eq!(tracker.data().daily_streak, 1);
    }

    #[test]
    fn test_streak_future_last_date_resets() {
        let mut tracker = tracker_last_active(Some(day(12)), 4);
        tracker.toggle_skill("a", day(10));
        assert_eq!(tracker.data().daily_streak, 1);
        assert_eq!(tracker.data().last_active_date, Some(day(10)));
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let last = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let mut tracker = tracker_last_active(Some(last), 2);
        tracker.toggle_skill("a", day(1));
        assert_eq!(tracker.data().daily_streak, 3);
    }

    #[test]
    fn test_streak_and_toggle_both_persist() {
        let mut tracker = tracker_last_active(Some(day(9)), 1);
        tracker.toggle_skill("Git", day(10));
        let data = tracker.into_data();
        assert_eq!(data.daily_streak, 2);
        assert!(data.completed_skills.contains("Git"));
    }

    #[test]
    fn test_progress_data_serializes_sets_as_arrays() {
        let mut tracker = ProgressTracker::default();
        tracker.toggle_skill("b", day(2));
        tracker.toggle_skill("a", day(2));
        let json = serde_json::to_value(tracker.data()).unwrap();
        assert_eq!(json["completedSkills"], serde_json::json!(["a", "b"]));
        assert_eq!(json["lastActiveDate"], "2026-03-02");
        assert_eq!(json["dailyStreak"], 1);
    }

    #[test]
    fn test_progress_data_loads_partial_documents() {
        let data: ProgressData =
            serde_json::from_str(r#"{"completedSkills": ["x", "x"], "dailyStreak": 3}"#).unwrap();
        assert_eq!(data.completed_skills.len(), 1);
        assert_eq!(data.daily_streak, 3);
        assert!(data.completed_resources.is_empty());
        assert_eq!(data.last_active_date, None);
        assert_eq!(data.total_study_hours, 0);
    }

    #[test]
    fn test_summary_against_fallback_roadmap() {
        let roadmap = fallback_roadmap("web-dev");
        let first_topic = &roadmap[0].topics[0];
        let mut tracker = ProgressTracker::default();
        tracker.toggle_skill(&roadmap[0].skills[0], day(1));
        tracker.toggle_subtopic(
            &first_topic.subtopics[0],
            first_topic.hours_per_subtopic(),
            day(1),
        );
        tracker.toggle_skill("not in this roadmap", day(1));

        let summary = tracker.summary(roadmap);
        let total_skills: usize = roadmap.iter().map(|s| s.skills.len()).sum();
        assert_eq!(summary.skills.total, total_skills);
        assert_eq!(summary.skills.completed, 1);
        assert_eq!(summary.subtopics.completed, 1);
        assert_eq!(summary.resources.completed, 0);
        assert_eq!(summary.total_study_hours, 5);
        assert_eq!(summary.step_hours.len(), 3);
        assert_eq!(summary.step_hours[0], roadmap[0].total_hours());
        let expected_overall =
            (summary.skills.percent + summary.subtopics.percent + summary.resources.percent) / 3.0;
        assert!((summary.overall_percent - expected_overall).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_of_empty_roadmap_is_zero() {
        let summary = ProgressSummary::compute(&ProgressData::default(), &[]);
        assert_eq!(summary.overall_percent, 0.0);
        assert_eq!(summary.skills.total, 0);
        assert!(summary.step_hours.is_empty());
    }

    #[test]
    fn test_item_kind_serde_lowercase() {
        let kind: ItemKind = serde_json::from_str(r#""subtopic""#).unwrap();
        assert_eq!(kind, ItemKind::Subtopic);
    }
}
