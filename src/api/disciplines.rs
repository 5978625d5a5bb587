use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{Discipline, DisciplinesResponse};

#[instrument(skip(client))]
pub(crate) async fn get_disciplines(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Discipline>> {
    let url = format!("{base_url}/disciplines");
    let response: DisciplinesResponse = api::get_json(client, &url).await?;
    debug!(count = response.data.len(), "parsed disciplines");
    Ok(response.data)
}
