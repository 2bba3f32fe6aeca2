#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use resolver_api_api::{create_app, AppState};
use resolver_api_application::ports::{NameserverClient, QueryOutcome};
use resolver_api_application::services::NameserverFallbackResolver;
use resolver_api_application::use_cases::{LookupRecordUseCase, ReverseLookupUseCase};
use resolver_api_domain::{DnsAnswer, DnsQuery, Question, RecordData, RecordSet, RecordType};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const NS1: &str = "10.0.0.1";
pub const NS2: &str = "10.0.0.2";

/// Scripted outcome per nameserver; unscripted nameservers time out.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    outcomes: Arc<Mutex<HashMap<String, QueryOutcome>>>,
    attempts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, nameserver: &str, outcome: QueryOutcome) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(nameserver.to_string(), outcome);
        self
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameserverClient for ScriptedClient {
    async fn query(&self, nameserver: &str, _query: &DnsQuery) -> QueryOutcome {
        self.attempts.lock().unwrap().push(nameserver.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .get(nameserver)
            .cloned()
            .unwrap_or(QueryOutcome::Timeout)
    }
}

pub fn app(client: &ScriptedClient) -> Router {
    app_with_cors(client, &[])
}

pub fn app_with_cors(client: &ScriptedClient, cors_origins: &[String]) -> Router {
    let resolver = Arc::new(NameserverFallbackResolver::new(
        Arc::new(client.clone()),
        vec![NS1.to_string(), NS2.to_string()],
    ));
    let state = AppState {
        lookup_record: Arc::new(LookupRecordUseCase::new(
            resolver.clone(),
            RecordType::ALL.to_vec(),
        )),
        reverse_lookup: Arc::new(ReverseLookupUseCase::new(resolver)),
    };
    create_app(state, cors_origins)
}

pub async fn get(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn answer_with(question: (&str, &str), sets: Vec<RecordSet>) -> DnsAnswer {
    let mut answer = DnsAnswer::empty(
        4660,
        Question {
            name: question.0.to_string(),
            record_type: question.1.to_string(),
            class: "IN".to_string(),
        },
    );
    answer.answer = sets;
    answer
}

pub fn a_set(name: &str, ip: &str, ttl: u32) -> RecordSet {
    RecordSet::new(name, "A", "IN", ttl).with_record(RecordData::Address(ip.parse().unwrap()))
}
