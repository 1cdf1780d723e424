//! Upcoming tech events. A fixed catalog re-dated relative to today on every request.

pub mod handlers;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CITY: &str = "San Francisco, CA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Conference,
    Workshop,
    Meetup,
    Competition,
    Summit,
    Networking,
    Hackathon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub city: String,
    pub organizer: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub description: String,
    pub registration_link: String,
    pub days_until: u64,
}

struct CatalogEntry {
    title: &'static str,
    days_from_now: u64,
    location: &'static str,
    organizer: &'static str,
    event_type: EventType,
    description: &'static str,
    registration_link: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Google Developer Group DevFest 2025",
        days_from_now: 5,
        location: "Tech Hub Convention Center",
        organizer: "Google Developer Group",
        event_type: EventType::Conference,
        description: "Join us for the biggest developer festival of the year with talks on AI, Cloud, and Mobile development.",
        registration_link: "https://gdg.dev/devfest",
    },
    CatalogEntry {
        title: "AI/ML Workshop Series",
        days_from_now: 12,
        location: "Innovation Campus",
        organizer: "Microsoft Learn Student Ambassadors",
        event_type: EventType::Workshop,
        description: "Hands-on workshop covering machine learning fundamentals and practical AI applications.",
        registration_link: "https://aka.ms/mlsa-workshop",
    },
    CatalogEntry {
        title: "Startup Pitch Competition",
        days_from_now: 18,
        location: "University Entrepreneurship Center",
        organizer: "Local E-Cell",
        event_type: EventType::Competition,
        description: "Present your startup ideas to industry experts and compete for funding opportunities.",
        registration_link: "https://startup-pitch.com/register",
    },
    CatalogEntry {
        title: "React Native Meetup",
        days_from_now: 8,
        location: "WeWork Downtown",
        organizer: "React Native Community",
        event_type: EventType::Meetup,
        description: "Monthly meetup for React Native developers to share experiences and learn new techniques.",
        registration_link: "https://meetup.com/react-native",
    },
    CatalogEntry {
        title: "Blockchain & Web3 Summit",
        days_from_now: 25,
        location: "Crypto Convention Hall",
        organizer: "Web3 Developers Alliance",
        event_type: EventType::Summit,
        description: "Explore the future of decentralized applications and blockchain technology.",
        registration_link: "https://web3summit.dev",
    },
    CatalogEntry {
        title: "Women in Tech Networking",
        days_from_now: 15,
        location: "Tech Diversity Center",
        organizer: "Women Who Code",
        event_type: EventType::Networking,
        description: "Connect with fellow women in technology and share career experiences.",
        registration_link: "https://womenwhocode.com/networking",
    },
    CatalogEntry {
        title: "DevOps & Cloud Infrastructure Meetup",
        days_from_now: 22,
        location: "Cloud Computing Center",
        organizer: "DevOps Community",
        event_type: EventType::Meetup,
        description: "Learn about the latest trends in DevOps, containerization, and cloud infrastructure.",
        registration_link: "https://devops-meetup.com",
    },
    CatalogEntry {
        title: "Cybersecurity Awareness Workshop",
        days_from_now: 30,
        location: "Security Training Institute",
        organizer: "CyberSec Alliance",
        event_type: EventType::Workshop,
        description: "Essential cybersecurity practices for developers and IT professionals.",
        registration_link: "https://cybersec-workshop.com",
    },
    CatalogEntry {
        title: "UI/UX Design Thinking Session",
        days_from_now: 10,
        location: "Design Studio Hub",
        organizer: "UX Designers Guild",
        event_type: EventType::Workshop,
        description: "Interactive session on design thinking methodologies and user experience best practices.",
        registration_link: "https://ux-design-session.com",
    },
    CatalogEntry {
        title: "Open Source Contribution Hackathon",
        days_from_now: 35,
        location: "Innovation Lab",
        organizer: "Open Source Community",
        event_type: EventType::Hackathon,
        description: "48-hour hackathon focused on contributing to popular open source projects.",
        registration_link: "https://opensource-hack.com",
    },
];

/// The catalog dated from `today` for `city`, soonest first.
/// Ids are the 1-based catalog position and stay stable across requests.
pub fn upcoming_events(city: &str, today: NaiveDate) -> Vec<TechEvent> {
    let mut events: Vec<TechEvent> = CATALOG
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let date = today.checked_add_days(Days::new(entry.days_from_now))?;
            Some(TechEvent {
                id: (i + 1).to_string(),
                title: entry.title.to_string(),
                date,
                location: entry.location.to_string(),
                city: city.to_string(),
                organizer: entry.organizer.to_string(),
                event_type: entry.event_type,
                description: entry.description.to_string(),
                registration_link: entry.registration_link.to_string(),
                days_until: entry.days_from_now,
            })
        })
        .collect();
    events.sort_by_key(|e| e.date);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 20).unwrap()
    }

    #[test]
    fn test_all_catalog_events_listed() {
        let events = upcoming_events(DEFAULT_CITY, today());
        assert_eq!(events.len(), 10);
        let mut ids: Vec<u32> = events.iter().map(|e| e.id.parse().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_events_sorted_soonest_first_and_in_future() {
        let events = upcoming_events(DEFAULT_CITY, today());
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(events.iter().all(|e| e.date > today()));
        assert_eq!(events[0].title, "Google Developer Group DevFest 2025");
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
    }

    #[test]
    fn test_dates_roll_over_year_end() {
        let events = upcoming_events(DEFAULT_CITY, today());
        let hackathon = events.last().unwrap();
        assert_eq!(hackathon.event_type, EventType::Hackathon);
        assert_eq!(hackathon.date, NaiveDate::from_ymd_opt(2027, 1, 24).unwrap());
        assert_eq!(hackathon.days_until, 35);
    }

    #[test]
    fn test_city_applied_to_every_event() {
        let events = upcoming_events("Pune, India", today());
        assert!(events.iter().all(|e| e.city == "Pune, India"));
    }

    #[test]
    fn test_event_serializes_type_and_camel_case() {
        let events = upcoming_events(DEFAULT_CITY, today());
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["type"], "Conference");
        assert_eq!(json["date"], "2026-12-25");
        assert_eq!(json["registrationLink"], "https://gdg.dev/devfest");
        assert_eq!(json["daysUntil"], 5);
    }
}
