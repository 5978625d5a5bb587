use tracing::{debug, instrument};

use crate::api;
use crate::error::{Result, ScheduleError};
use crate::model::{EventsPage, EventsResponse};

#[instrument(skip(client))]
pub(crate) async fn get_events(
    client: &reqwest::Client,
    base_url: &str,
    page: u32,
) -> Result<EventsPage> {
    if page == 0 {
        return Err(ScheduleError::InvalidPage(page));
    }

    let url = format!("{base_url}/events?page={page}");
    let response: EventsResponse = api::get_json(client, &url).await?;

    let meta = response.meta;
    if !meta.is_valid() {
        return Err(ScheduleError::InvalidPageMeta {
            url,
            current_page: meta.current_page,
            last_page: meta.last_page,
        });
    }

    debug!(
        count = response.data.len(),
        current_page = meta.current_page,
        last_page = meta.last_page,
        "parsed events page"
    );

    Ok(EventsPage {
        events: response.data,
        page: meta.current_page,
        last_page: meta.last_page,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::api::test_server;
    use crate::model::Gender;

    async fn events_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        Json(json!({
            "data": [
                {
                    "id": page * 10 + 1,
                    "day": "2024-07-26",
                    "discipline_name": "Swimming",
                    "gender_code": "M",
                    "competitors": [{
                        "country_id": "AUS",
                        "country_flag_url": "https://flags.example/aus.png",
                        "competitor_name": "Australia",
                        "result_mark": "3:09.28"
                    }]
                },
                {
                    "id": page * 10 + 2,
                    "day": "2024-07-27",
                    "discipline_name": "Judo",
                    "gender_code": "",
                    "competitors": []
                }
            ],
            "meta": { "current_page": page, "last_page": 3 }
        }))
    }

    #[tokio::test]
    async fn test_get_events_page() {
        let base = test_server::spawn(Router::new().route("/events", get(events_handler))).await;
        let client = reqwest::Client::new();

        let page = get_events(&client, &base, 2).await.unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.events.len(), 2);
        assert_eq!(page.events[0].id, 21);
        assert_eq!(page.events[0].gender_code, Some(Gender::Men));
        assert_eq!(page.events[0].competitors[0].result_mark, "3:09.28");
        assert_eq!(page.events[1].gender_code, None);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[tokio::test]
    async fn test_get_events_error_status() {
        let router = Router::new().route(
            "/events",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = test_server::spawn(router).await;

        let err = get_events(&reqwest::Client::new(), &base, 1)
            .await
            .unwrap_err();

        assert!(err
            .to_string()
            .starts_with("schedule API returned 503 Service Unavailable"));
        match err {
            ScheduleError::UnexpectedStatus { status, url } => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert!(url.ends_with("/events?page=1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_events_missing_meta() {
        let router = Router::new().route(
            "/events",
            get(|| async { Json(json!({ "data": [] })) }),
        );
        let base = test_server::spawn(router).await;

        let err = get_events(&reqwest::Client::new(), &base, 1)
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_get_events_invalid_meta() {
        let router = Router::new().route(
            "/events",
            get(|| async {
                Json(json!({ "data": [], "meta": { "current_page": 4, "last_page": 2 } }))
            }),
        );
        let base = test_server::spawn(router).await;

        let err = get_events(&reqwest::Client::new(), &base, 4)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScheduleError::InvalidPageMeta {
                current_page: 4,
                last_page: 2,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_get_events_page_zero() {
        let err = get_events(&reqwest::Client::new(), "http://127.0.0.1:9", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidPage(0)));
    }

    #[tokio::test]
    async fn test_get_events_connection_refused() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = get_events(&reqwest::Client::new(), &format!("http://{addr}"), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Http { .. }));
    }
}
