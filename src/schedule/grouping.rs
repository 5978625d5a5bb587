use itertools::Itertools;
use serde::Serialize;

use crate::model::Event;

/// All events of one day, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub day: String,
    pub events: Vec<Event>,
}

/// Events grouped by day. Days appear in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    groups: Vec<DayGroup>,
}

impl DaySchedule {
    pub fn get(&self, day: &str) -> Option<&[Event]> {
        self.groups
            .iter()
            .find(|g| g.day == day)
            .map(|g| g.events.as_slice())
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.day.as_str())
    }

    pub fn groups(&self) -> &[DayGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|g| g.events.len()).sum()
    }
}

impl IntoIterator for DaySchedule {
    type Item = DayGroup;
    type IntoIter = std::vec::IntoIter<DayGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = &'a DayGroup;
    type IntoIter = std::slice::Iter<'a, DayGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group events by `day`, keeping first-appearance day order and source
/// order within each day.
pub fn group_by_day(events: Vec<Event>) -> DaySchedule {
    let days = events.iter().map(|e| e.day.clone()).unique().collect_vec();
    let mut groups = days
        .into_iter()
        .map(|day| DayGroup {
            day,
            events: Vec::new(),
        })
        .collect_vec();

    for event in events {
        if let Some(group) = groups.iter_mut().find(|g| g.day == event.day) {
            group.events.push(event);
        }
    }

    DaySchedule { groups }
}
