use serde::{Deserialize, Serialize};

use crate::model::{Event, Gender};

/// Which events to keep. Every present field must match exactly; absent
/// fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub discipline_name: Option<String>,
    pub gender_code: Option<Gender>,
    pub day: Option<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one discipline. An empty name clears the restriction.
    pub fn discipline(mut self, name: impl Into<String>) -> Self {
        self.discipline_name = non_empty(name.into());
        self
    }

    pub fn gender(mut self, gender: Option<Gender>) -> Self {
        self.gender_code = gender;
        self
    }

    /// Restrict to one day label. An empty label clears the restriction.
    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = non_empty(day.into());
        self
    }

    /// True when no dimension is restricted.
    pub fn is_empty(&self) -> bool {
        self.discipline_name.as_deref().is_none_or(str::is_empty)
            && self.gender_code.is_none()
            && self.day.as_deref().is_none_or(str::is_empty)
    }

    pub fn matches(&self, event: &Event) -> bool {
        let discipline_ok = match self.discipline_name.as_deref() {
            None | Some("") => true,
            Some(name) => event.discipline_name == name,
        };
        let gender_ok = match self.gender_code {
            None => true,
            Some(gender) => event.gender_code == Some(gender),
        };
        let day_ok = match self.day.as_deref() {
            None | Some("") => true,
            Some(day) => event.day == day,
        };
        discipline_ok && gender_ok && day_ok
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Keep the events matching `spec`, in their original order.
pub fn filter(events: &[Event], spec: &EventFilter) -> Vec<Event> {
    if spec.is_empty() {
        return events.to_vec();
    }
    events.iter().filter(|e| spec.matches(e)).cloned().collect()
}
