#![allow(dead_code)]


use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use resolver_api_api::{create_app, AppState};
use resolver_api_application::services::NameserverFallbackResolver;
use resolver_api_application::use_cases::{LookupRecordUseCase, ReverseLookupUseCase};
use resolver_api_domain::RecordType;
use resolver_api_infrastructure::dns::HickoryNameserverClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const QUERY_TIMEOUT: Duration = Duration::from_millis(200);

/// The production wiring, pointed at `nameservers`.
pub fn app(nameservers: Vec<String>) -> Router {
    let client = Arc::new(HickoryNameserverClient::new(QUERY_TIMEOUT));
    let resolver = Arc::new(NameserverFallbackResolver::new(client, nameservers));
    let state = AppState {
        lookup_record: Arc::new(LookupRecordUseCase::new(
            resolver.clone(),
            RecordType::ALL.to_vec(),
        )),
        reverse_lookup: Arc::new(ReverseLookupUseCase::new(resolver)),
    };
    create_app(state, &[])
}

pub async fn get(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
