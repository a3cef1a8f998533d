//! Mock PokeAPI server shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use pokedex::Config;

#[derive(Clone)]
struct MockState {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Handle on a running mock server.
pub struct MockApi {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    /// Number of requests the server has answered.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Request paths (with query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.base.clone(),
            cache_ttl: 300,
            http_timeout: 5,
            catch_threshold: 50,
        }
    }

    pub fn first_page_url(&self) -> String {
        format!("{}/location/", self.base)
    }

    pub fn second_page_url(&self) -> String {
        format!("{}/location/?offset=2&limit=2", self.base)
    }
}

/// Starts the mock server on an ephemeral port.
///
/// Two listing pages; page 2's `previous` cursor is the first page URL.
/// `canalave-city` and `pikachu` exist, `missingno` returns malformed JSON,
/// `slowpoke` answers after three seconds, anything else is a 404.
pub async fn spawn_mock_api() -> MockApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = format!("http://{}/api/v2", addr);
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        base: base.clone(),
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .route("/api/v2/location/", get(location_list))
        .route("/api/v2/location/:name", get(location_detail))
        .route("/api/v2/pokemon/:name", get(pokemon_detail))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi { base, requests }
}

fn record(state: &MockState, path: String) {
    state.requests.lock().unwrap().push(path);
}

async fn location_list(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let offset = params.get("offset").map(String::as_str).unwrap_or("0");
    record(&state, format!("/location/?offset={}", offset));

    match offset {
        "0" => Json(json!({
            "count": 4,
            "next": format!("{}/location/?offset=2&limit=2", state.base),
            "previous": null,
            "results": [
                {"name": "canalave-city", "url": format!("{}/location/1/", state.base)},
                {"name": "eterna-city", "url": format!("{}/location/2/", state.base)}
            ]
        }))
        .into_response(),
        "2" => Json(json!({
            "count": 4,
            "next": null,
            "previous": format!("{}/location/", state.base),
            "results": [
                {"name": "pastoria-city", "url": format!("{}/location/3/", state.base)},
                {"name": "sunyshore-city", "url": format!("{}/location/4/", state.base)}
            ]
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn location_detail(
    State(state): State<MockState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    record(&state, format!("/location/{}", name));

    if name == "canalave-city" {
        Json(json!({
            "id": 1,
            "name": "canalave-city",
            "areas": [
                {"name": "canalave-city-area", "url": format!("{}/location-area/1/", state.base)}
            ],
            "region": {"name": "sinnoh", "url": format!("{}/region/4/", state.base)}
        }))
        .into_response()
    } else {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    }
}

async fn pokemon_detail(
    State(state): State<MockState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    record(&state, format!("/pokemon/{}", name));

    match name.as_str() {
        "pikachu" => Json(json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
            ],
            "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}]
        }))
        .into_response(),
        "slowpoke" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"id": 79, "name": "slowpoke", "height": 12, "weight": 360}))
                .into_response()
        }
        "missingno" => (
            StatusCode::OK,
            [("content-type", "application/json")],
            "{\"id\": 0, \"name\": ",
        )
            .into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
