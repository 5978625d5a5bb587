pub(crate) mod disciplines;
pub(crate) mod events;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ScheduleError};

/// GET `url` from the schedule API and decode its JSON body into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "requesting");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScheduleError::Http {
            url: url.to_owned(),
            source,
        })?;

    match response.status() {
        status if status.is_success() => {}
        status => {
            return Err(ScheduleError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            })
        }
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ScheduleError::Decode {
            url: url.to_owned(),
            source,
        })
}
