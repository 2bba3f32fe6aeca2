mod helpers;

use hickory_proto::op::ResponseCode;
use helpers::nameserver::{a_record, mx_record, ptr_record, Script, ScriptedNameserver};
use helpers::{app, get};
use serde_json::json;

#[tokio::test]
async fn test_a_lookup_end_to_end() {
    let ns = ScriptedNameserver::start(Script::Answer(vec![
        a_record("example.com.", "10.0.0.1", 300),
        a_record("example.com.", "10.0.0.2", 60),
    ]))
    .await;

    let (status, body) = get(app(vec![ns.address()]), "/A/example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["Query"]["Server"], ns.address());
    assert_eq!(body["QuestionSection"]["Qname"], "example.com.");
    assert_eq!(body["ReturnCode"], "NOERROR");
    assert_eq!(body["RA"], true);
    assert_eq!(
        body["AnswerSection"],
        json!([
            {"Name": "example.com.", "Type": "A", "Class": "IN", "TTL": 60, "Address": "10.0.0.1"},
            {"Name": "example.com.", "Type": "A", "Class": "IN", "TTL": 60, "Address": "10.0.0.2"}
        ])
    );
}

#[tokio::test]
async fn test_mx_lookup_end_to_end() {
    let ns = ScriptedNameserver::start(Script::Answer(vec![mx_record(
        "example.com.",
        10,
        "mail.example.com.",
        3600,
    )]))
    .await;

    let (status, body) = get(app(vec![ns.address()]), "/mx/example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["AnswerSection"][0]["Preference"], 10);
    assert_eq!(body["AnswerSection"][0]["MailExchanger"], "mail.example.com.");
}

#[tokio::test]
async fn test_reverse_lookup_end_to_end() {
    let ns = ScriptedNameserver::start(Script::Answer(vec![ptr_record(
        "1.0.0.10.in-addr.arpa.",
        "host.example.com.",
        3600,
    )]))
    .await;

    let (status, body) = get(app(vec![ns.address()]), "/reverse/10.0.0.1").await;

    assert_eq!(status, 200);
    assert_eq!(body["QuestionSection"]["Qname"], "1.0.0.10.in-addr.arpa.");
    assert_eq!(body["AnswerSection"][0]["Target"], "host.example.com.");
}

#[tokio::test]
async fn test_nxdomain_is_404_and_stops_failover() {
    let first = ScriptedNameserver::start(Script::Rcode(ResponseCode::NXDomain)).await;
    let second = ScriptedNameserver::start(Script::Answer(vec![a_record(
        "missing.example.",
        "10.0.0.9",
        60,
    )]))
    .await;

    let (status, body) = get(
        app(vec![first.address(), second.address()]),
        "/A/missing.example",
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body, json!({"message": "No nameservers for missing.example"}));
    assert_eq!(first.query_count(), 1);
    assert_eq!(second.query_count(), 0);
}

#[tokio::test]
async fn test_servfail_is_404() {
    let ns = ScriptedNameserver::start(Script::Rcode(ResponseCode::ServFail)).await;

    let (status, _) = get(app(vec![ns.address()]), "/A/broken.example").await;

    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_timeout_fails_over_to_next_nameserver() {
    let silent = ScriptedNameserver::start(Script::Silent).await;
    let answering = ScriptedNameserver::start(Script::Answer(vec![a_record(
        "example.com.",
        "10.0.0.1",
        60,
    )]))
    .await;

    let (status, body) = get(
        app(vec![silent.address(), answering.address()]),
        "/A/example.com",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["Query"]["Server"], answering.address());
    assert!(body["Query"]["Duration"].as_f64().unwrap() >= 0.2);
    assert_eq!(silent.query_count(), 1);
}

#[tokio::test]
async fn test_all_nameservers_silent_is_503() {
    let first = ScriptedNameserver::start(Script::Silent).await;
    let second = ScriptedNameserver::start(Script::Silent).await;

    let (status, body) = get(
        app(vec![first.address(), second.address()]),
        "/A/example.com",
    )
    .await;

    assert_eq!(status, 503);
    assert_eq!(body, json!({"message": "All nameservers timed out."}));
    assert_eq!(first.query_count(), 1);
    assert_eq!(second.query_count(), 1);
}

fn long_name(tail: &str) -> String {
    let label = "a".repeat(60);
    [label.as_str(); 4].join(".") + tail
}

#[tokio::test]
async fn test_longest_encodable_name_reaches_nameserver() {
    let ns = ScriptedNameserver::start(Script::Answer(vec![])).await;
    let name = long_name(".abcdefghi");
    assert_eq!(name.len(), 253);

    let (status, body) = get(app(vec![ns.address()]), &format!("/A/{}", name)).await;

    assert_eq!(status, 200);
    assert_eq!(body["QuestionSection"]["Qname"], format!("{}.", name));
    assert_eq!(ns.query_count(), 1);
}

#[tokio::test]
async fn test_name_too_long_to_encode_is_400() {
    let ns = ScriptedNameserver::start(Script::Answer(vec![])).await;
    let name = long_name(".abcdefghijk");
    assert_eq!(name.len(), 255);

    let (status, body) = get(app(vec![ns.address()]), &format!("/A/{}", name)).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"message": format!("{} is not a valid domain name", name)})
    );
    assert_eq!(ns.query_count(), 0);
}
