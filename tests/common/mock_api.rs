//! Scripted search API backed by `wiremock`.
//!
//! Response `i` answers the request for page `i + 1`; pages past the
//! script fall through to wiremock's default 404.

use serde_json::{Value, json};
use tokio::runtime::{Builder, Runtime};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &Value) -> Self {
        Self::raw(body.to_string())
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({"message": message}).to_string(),
        }
    }

    fn template(&self) -> ResponseTemplate {
        ResponseTemplate::new(self.status).set_body_raw(self.body.clone(), "application/json")
    }
}

/// Mock server serving one scripted response per page number.
pub struct MockApi {
    pub base_url: String,
    server: MockServer,
    runtime: Runtime,
}

impl MockApi {
    pub fn start(responses: Vec<MockResponse>) -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");

        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            for (index, response) in responses.iter().enumerate() {
                Mock::given(method("GET"))
                    .and(path("/search/issues"))
                    .and(query_param("page", (index + 1).to_string()))
                    .respond_with(response.template())
                    .mount(&server)
                    .await;
            }
            server
        });

        Self {
            base_url: server.uri(),
            server,
            runtime,
        }
    }

    /// Requests received so far, e.g. `GET /search/issues?sort=...`.
    pub fn requests(&self) -> Vec<String> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .into_iter()
            .map(|request| match request.url.query() {
                Some(query) => format!("{} {}?{}", request.method, request.url.path(), query),
                None => format!("{} {}", request.method, request.url.path()),
            })
            .collect()
    }
}

pub fn issue_item(number: u64, title: &str, assignee: Option<&str>, labels: &[&str]) -> Value {
    let labels: Vec<Value> = labels.iter().map(|name| json!({"name": name})).collect();
    json!({
        "number": number,
        "html_url": format!("https://github.com/acme/widget/pull/{number}"),
        "title": title,
        "state": "closed",
        "created_at": "2024-07-01T09:00:00Z",
        "closed_at": "2024-07-02T10:00:00Z",
        "assignee": assignee.map(|login| json!({"login": login})),
        "user": {"login": "contributor"},
        "labels": labels
    })
}

pub fn search_page(items: Vec<Value>, total_count: u64) -> MockResponse {
    MockResponse::json(&json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": items
    }))
}
