//! HTTP transport for jService-compatible trivia APIs

use super::{ApiError, CategoryDetail, CategoryId, CategorySummary, TriviaSource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Reads categories from a jService-style REST API
///
/// Endpoints (relative to the base URL):
/// - `GET categories?count=N` → `[{ "id": .., "title": .., "clues_count": .. }]`
/// - `GET category?id=N` → `{ "id": .., "title": .., "clues": [{ "question": .., "answer": .. }] }`
pub struct JServiceSource {
    client: reqwest::Client,
    base_url: String,
}

impl JServiceSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("clueboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        // serde_json errors carry line/column of the bad input
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl TriviaSource for JServiceSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, ApiError> {
        self.get_json("categories", &[("count", count.to_string())])
            .await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, ApiError> {
        self.get_json("category", &[("id", id.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral localhost port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/", addr)
    }

    fn fake_service() -> Router {
        Router::new()
            .route(
                "/api/categories",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    let count: u64 = q.get("count").and_then(|c| c.parse().ok()).unwrap_or(1);
                    let records: Vec<Value> = (1..=count)
                        .map(|id| json!({ "id": id, "title": format!("cat {}", id), "clues_count": 5 }))
                        .collect();
                    Json(Value::Array(records))
                }),
            )
            .route(
                "/api/category",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    match q.get("id").map(String::as_str) {
                        Some("11531") => Ok(Json(json!({
                            "id": 11531,
                            "title": "mixed bag",
                            "clues_count": 2,
                            "clues": [
                                { "id": 1, "question": "2+2", "answer": "4", "value": 200 },
                                { "id": 2, "question": "Hamlet author", "answer": "<i>Shakespeare</i>", "value": null }
                            ]
                        }))),
                        Some("42") => Ok(Json(json!({
                            "id": 42,
                            "title": "spotty",
                            "clues": [
                                { "question": "Q1", "answer": "A1" },
                                { "question": "Q2", "answer": null },
                                { "question": null, "answer": "A3" },
                                { "question": "Q4", "answer": "A4" }
                            ]
                        }))),
                        _ => Err(StatusCode::NOT_FOUND),
                    }
                }),
            )
    }

    fn source(base: &str) -> JServiceSource {
        JServiceSource::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn lists_requested_count() {
        let base = serve(fake_service()).await;

        let records = source(&base).list_categories(100).await.unwrap();

        assert_eq!(records.len(), 100);
        assert_eq!(records[0].id, CategoryId(1));
        assert_eq!(records[99].title, "cat 100");
    }

    #[tokio::test]
    async fn fetches_category_ignoring_extra_fields() {
        let base = serve(fake_service()).await;

        let detail = source(&base).category(CategoryId(11531)).await.unwrap();

        assert_eq!(detail.id, CategoryId(11531));
        assert_eq!(detail.title, "mixed bag");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[1].answer.as_deref(), Some("<i>Shakespeare</i>"));
    }

    #[tokio::test]
    async fn null_clue_fields_still_decode() {
        let base = serve(fake_service()).await;

        let detail = source(&base).category(CategoryId(42)).await.unwrap();

        assert_eq!(detail.clues.len(), 4);
        assert_eq!(detail.clues[1].answer, None);
        assert_eq!(detail.clues[2].question, None);
        assert_eq!(detail.clues[3].answer.as_deref(), Some("A4"));
    }

    #[tokio::test]
    async fn missing_category_is_status_error() {
        let base = serve(fake_service()).await;

        let err = source(&base).category(CategoryId(7)).await.unwrap_err();

        match err {
            ApiError::Status { status, url } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/api/category"));
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let router = Router::new().route("/api/categories", get(|| async { "not json" }));
        let base = serve(router).await;

        let err = source(&base).list_categories(5).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_service_is_network_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{}/api", addr))
            .list_categories(5)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
