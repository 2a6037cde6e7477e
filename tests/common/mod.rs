//! In-process stand-in for the SSL Labs `/analyze` endpoint.

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Replays queued responses in order and records each request's query
#[derive(Clone, Default)]
pub struct MockApi {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockApi {
    /// Serve on an ephemeral port; returns the API base URL to hand to the client
    pub async fn start(responses: Vec<(StatusCode, String)>) -> (Self, String) {
        let api = MockApi {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::default(),
        };

        let app = Router::new()
            .route("/api/v2/analyze", get(analyze))
            .with_state(api.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (api, format!("http://{}/api/v2", addr))
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn analyze(
    State(api): State<MockApi>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    api.requests.lock().unwrap().push(params);
    api.responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, "no response queued".to_string()))
}

pub fn ok(body: String) -> (StatusCode, String) {
    (StatusCode::OK, body)
}

/// Report still being worked on, no endpoints yet
pub fn pending_report(status: &str) -> String {
    format!(
        r#"{{"host":"example.com","port":443,"protocol":"http","status":"{}","statusMessage":"Resolving domain names","endpoints":[]}}"#,
        status
    )
}

/// Finished report with a single healthy endpoint
pub fn ready_report(not_after_ms: i64) -> String {
    format!(
        r#"{{
            "host": "example.com",
            "port": 443,
            "status": "READY",
            "engineVersion": "2.3.0",
            "endpoints": [{{
                "ipAddress": "93.184.216.34",
                "serverName": "example.com",
                "statusMessage": "Ready",
                "grade": "A",
                "gradeTrustIgnored": "A",
                "hasWarnings": false,
                "details": {{
                    "protocols": [
                        {{"id": 771, "name": "TLS", "version": "1.2"}},
                        {{"id": 772, "name": "TLS", "version": "1.3"}}
                    ],
                    "forwardSecrecy": 4,
                    "heartbleed": false,
                    "poodle": false,
                    "logjam": false,
                    "cert": {{
                        "commonNames": ["example.com"],
                        "altNames": ["example.com", "www.example.com"],
                        "notAfter": {}
                    }}
                }}
            }}]
        }}"#,
        not_after_ms
    )
}
