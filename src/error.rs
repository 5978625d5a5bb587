/// All errors that can occur while fetching or navigating the schedule.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    /// The schedule API could not be reached, or the connection broke mid-request.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The schedule API answered with a non-2xx status.
    #[error("schedule API returned {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// Page metadata violated `1 <= current_page <= last_page`.
    #[error("invalid page metadata from {url}: current_page={current_page}, last_page={last_page}")]
    InvalidPageMeta {
        url: String,
        current_page: u32,
        last_page: u32,
    },

    /// Pages are 1-indexed; page 0 is never requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// Client configuration could not be built.
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
