use serde::{Deserialize, Serialize};

use super::Event;

/// One fetched page of events together with its position in the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsPage {
    pub events: Vec<Event>,
    pub page: u32,
    pub last_page: u32,
}

impl EventsPage {
    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Wire body of `GET /events?page={n}`.
#[derive(Debug, Deserialize)]
pub(crate) struct EventsResponse {
    pub data: Vec<Event>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
}

impl PageMeta {
    pub fn is_valid(&self) -> bool {
        1 <= self.current_page && self.current_page <= self.last_page
    }
}
