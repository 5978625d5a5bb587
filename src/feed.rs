use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::client::EventSource;
use crate::error::{Result, ScheduleError};
use crate::model::{Discipline, Event, EventsPage};
use crate::schedule::{self, DaySchedule, EventFilter};

/// What a navigation call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched page replaced the current one.
    Applied { page: u32 },
    /// A newer request was issued while this one was in flight; its result was dropped.
    Superseded { page: u32 },
    /// Already on the first/last page, nothing was fetched.
    AtBoundary,
}

/// A consistent copy of everything the feed currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSnapshot {
    pub events: Vec<Event>,
    pub current_page: u32,
    pub last_page: u32,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub filter: EventFilter,
    pub disciplines: Vec<Discipline>,
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            current_page: 1,
            last_page: 1,
            is_loading: false,
            last_error: None,
            filter: EventFilter::default(),
            disciplines: Vec::new(),
        }
    }
}

impl FeedSnapshot {
    /// The current page, filtered and grouped by day.
    pub fn schedule(&self) -> DaySchedule {
        schedule::apply(&self.events, &self.filter)
    }
}

#[derive(Debug, Default)]
struct FeedState {
    view: FeedSnapshot,
    /// Sequence number of the most recently issued load.
    latest_request: u64,
    /// Same, for discipline catalogue refreshes.
    latest_catalogue_request: u64,
}

/// Clears `is_loading` when a load future is dropped before it completes,
/// provided no newer load has been issued since.
struct PendingLoad<'a> {
    state: &'a Mutex<FeedState>,
    updates: &'a watch::Sender<FeedSnapshot>,
    request: u64,
    armed: bool,
}

impl PendingLoad<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.latest_request == self.request && state.view.is_loading {
            debug!(request = self.request, "load dropped before completion");
            state.view.is_loading = false;
            self.updates.send_replace(state.view.clone());
        }
    }
}

/// Paginated view over an [`EventSource`].
///
/// Loads may overlap; only the most recently issued one is allowed to
/// update the state; earlier completions are discarded.
pub struct ScheduleFeed<S> {
    source: S,
    state: Mutex<FeedState>,
    updates: watch::Sender<FeedSnapshot>,
}

impl<S: EventSource> ScheduleFeed<S> {
    /// Create an idle feed on page 1 of 1 without fetching anything.
    pub fn new(source: S) -> Self {
        let (updates, _) = watch::channel(FeedSnapshot::default());
        Self {
            source,
            state: Mutex::new(FeedState::default()),
            updates,
        }
    }

    /// Create a feed and load the first page.
    ///
    /// A failed first load doesn't prevent construction; it shows up as
    /// [`FeedSnapshot::last_error`] and can be retried with [`load`](Self::load).
    pub async fn mount(source: S) -> Self {
        let feed = Self::new(source);
        if let Err(e) = feed.load(1).await {
            warn!(error = %e, "initial load failed");
        }
        feed
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `page` and, unless a newer load was issued meanwhile, replace
    /// the current events and page numbers with the result.
    ///
    /// On failure the previous events and page numbers are kept, the error
    /// message is recorded and the error is returned.
    #[instrument(skip(self))]
    pub async fn load(&self, page: u32) -> Result<LoadOutcome> {
        if page == 0 {
            return Err(ScheduleError::InvalidPage(page));
        }

        let request = self.update(|state| {
            state.latest_request += 1;
            state.view.is_loading = true;
            state.latest_request
        });
        let pending = PendingLoad {
            state: &self.state,
            updates: &self.updates,
            request,
            armed: true,
        };

        let result = self.source.fetch_events(page).await;
        pending.disarm();

        let mut state = self.lock();
        if request != state.latest_request {
            debug!(
                request,
                latest = state.latest_request,
                ok = result.is_ok(),
                "discarding stale page load"
            );
            return Ok(LoadOutcome::Superseded { page });
        }

        state.view.is_loading = false;
        let outcome = match result {
            Ok(EventsPage {
                events,
                page: current_page,
                last_page,
            }) => {
                debug!(count = events.len(), current_page, last_page, "applied page");
                state.view.events = events;
                state.view.current_page = current_page;
                state.view.last_page = last_page;
                state.view.last_error = None;
                Ok(LoadOutcome::Applied { page: current_page })
            }
            Err(e) => {
                warn!(error = %e, page, "page load failed, keeping previous page");
                state.view.last_error = Some(e.to_string());
                Err(e)
            }
        };
        self.publish(&state);
        outcome
    }

    /// Load the following page; a no-op on the last page.
    pub async fn next(&self) -> Result<LoadOutcome> {
        let (current, last) = self.pages();
        if current >= last {
            return Ok(LoadOutcome::AtBoundary);
        }
        self.load(current + 1).await
    }

    /// Load the preceding page; a no-op on the first page.
    pub async fn previous(&self) -> Result<LoadOutcome> {
        let (current, _) = self.pages();
        if current <= 1 {
            return Ok(LoadOutcome::AtBoundary);
        }
        self.load(current - 1).await
    }

    /// Fetch the discipline catalogue and return it.
    ///
    /// Failures leave the old catalogue in place. When refreshes overlap,
    /// only the most recently issued one is stored; older results are still
    /// returned to their caller.
    #[instrument(skip(self))]
    pub async fn refresh_disciplines(&self) -> Result<Vec<Discipline>> {
        let request = {
            let mut state = self.lock();
            state.latest_catalogue_request += 1;
            state.latest_catalogue_request
        };

        let disciplines = self.source.fetch_disciplines().await?;

        let mut state = self.lock();
        if request != state.latest_catalogue_request {
            debug!(
                request,
                latest = state.latest_catalogue_request,
                "discarding stale discipline catalogue"
            );
            return Ok(disciplines);
        }
        state.view.disciplines = disciplines.clone();
        self.publish(&state);
        Ok(disciplines)
    }

    /// Names a discipline filter may choose from.
    pub fn discipline_names(&self) -> Vec<String> {
        self.lock()
            .view
            .disciplines
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }

    /// Replace the active filter. Only the loaded page is re-filtered; nothing is fetched.
    pub fn set_filter(&self, filter: EventFilter) {
        self.update(|state| state.view.filter = filter);
    }

    pub fn clear_filter(&self) {
        self.set_filter(EventFilter::default());
    }

    /// The loaded page filtered by the active filter and grouped by day.
    pub fn schedule(&self) -> DaySchedule {
        let state = self.lock();
        schedule::apply(&state.view.events, &state.view.filter)
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.lock().view.clone()
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.updates.subscribe()
    }

    pub fn current_page(&self) -> u32 {
        self.pages().0
    }

    pub fn last_page(&self) -> u32 {
        self.pages().1
    }

    pub fn is_loading(&self) -> bool {
        self.lock().view.is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().view.last_error.clone()
    }

    fn pages(&self) -> (u32, u32) {
        let state = self.lock();
        (state.view.current_page, state.view.last_page)
    }

    fn update<T>(&self, f: impl FnOnce(&mut FeedState) -> T) -> T {
        let mut state = self.lock();
        let value = f(&mut state);
        self.publish(&state);
        value
    }

    fn publish(&self, state: &FeedState) {
        self.updates.send_replace(state.view.clone());
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
