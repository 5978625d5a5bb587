//! Client and view-model for a paginated Olympic events schedule.
//!
//! [`ScheduleClient`] talks to the HTTP API, [`ScheduleFeed`] tracks which
//! page is shown and discards stale responses, and the [`schedule`] module
//! filters a page and groups it by day.

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod schedule;

pub(crate) mod api;

pub use client::{EventSource, ScheduleClient};
pub use config::ClientConfig;
pub use error::{Result, ScheduleError};
pub use feed::{FeedSnapshot, LoadOutcome, ScheduleFeed};
pub use model::*;
pub use schedule::{filter, group_by_day, DayGroup, DaySchedule, EventFilter};
