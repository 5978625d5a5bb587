//! Page-local filtering and day grouping of events.
//!
//! Everything here is pure: inputs are borrowed, outputs are freshly built.

mod filtering;
mod grouping;

pub use filtering::*;
pub use grouping::*;

use crate::model::Event;

/// Filter `events` by `spec`, then group what is left by day.
pub fn apply(events: &[Event], spec: &EventFilter) -> DaySchedule {
    group_by_day(filter(events, spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    fn event(id: u64, day: &str, discipline: &str, gender: Option<Gender>) -> Event {
        Event {
            id,
            day: day.to_string(),
            discipline_name: discipline.to_string(),
            gender_code: gender,
            competitors: vec![],
        }
    }

    #[test]
    fn test_swimming_across_two_days() {
        let events = vec![
            event(1, "2024-07-26", "Swimming", Some(Gender::Men)),
            event(2, "2024-07-26", "Judo", Some(Gender::Women)),
            event(3, "2024-07-27", "Swimming", Some(Gender::Men)),
        ];
        let spec = EventFilter::new().discipline("Swimming");

        let filtered = filter(&events, &spec);
        assert_eq!(filtered.iter().map(|e| e.id).collect::<Vec<_>>(), [1, 3]);

        let schedule = apply(&events, &spec);
        assert_eq!(schedule.days().collect::<Vec<_>>(), ["2024-07-26", "2024-07-27"]);
        assert_eq!(schedule.get("2024-07-26").unwrap()[0].id, 1);
        assert_eq!(schedule.get("2024-07-27").unwrap()[0].id, 3);
        assert_eq!(schedule.event_count(), 2);
    }

    #[test]
    fn test_apply_with_nothing_matching() {
        let events = vec![event(1, "2024-07-26", "Judo", None)];
        let schedule = apply(&events, &EventFilter::new().day("2024-08-11"));
        assert!(schedule.is_empty());
    }
}
