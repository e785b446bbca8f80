// Shared helpers for handler tests

use crate::core::config::{AuthConfig, Config, LoggingConfig, ServerConfig};
use crate::core::state::AppState;
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            port: 8080,
            num_threads: 4,
        },
        auth: AuthConfig::default(),
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "console".to_string(),
            console: true,
        },
    }
}

pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(create_test_config()))
}

pub fn authed_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

pub async fn response_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
