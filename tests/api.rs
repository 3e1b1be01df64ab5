// End-to-end checks of the HTTP routes against a server bound on a free port.
use std::collections::{HashMap, HashSet};

use ll1_grammar_viewer::web::{config::ServerConfig, start_server, ServerHandle};
use ll1_grammar_viewer::GrammarStore;
use serde_json::{json, Value};

async fn spawn() -> ServerHandle {
    let config = ServerConfig::default().with_bind_address("127.0.0.1:0".parse().unwrap());
    let store = GrammarStore::new().expect("fixture is valid");
    start_server(&config, store).await.expect("server started")
}

async fn get(handle: &ServerHandle, path: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("http://{}{}", handle.addr, path))
        .send()
        .await
        .expect("request succeeds")
}

#[tokio::test]
async fn index_serves_html() {
    let handle = spawn().await;

    let response = get(&handle, "/").await;
    assert_eq!(response.status(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = response.text().await.unwrap();
    assert!(body.contains("id=\"parsing-table-wrapper\""));
    assert!(body.contains("/static/script.js"));

    handle.shutdown();
}

#[tokio::test]
async fn script_is_served() {
    let handle = spawn().await;

    let response = get(&handle, "/static/script.js").await;
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("/api/grammar_data"));

    handle.shutdown();
}

#[tokio::test]
async fn grammar_data_payload() {
    let handle = spawn().await;

    let response = get(&handle, "/api/grammar_data").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["grammar"]["S"], json!(["A d"]));
    assert_eq!(body["table"]["A"]["d"], "d S");
    assert_eq!(body["table"]["B"]["c"], "erro");

    let first_c: HashSet<String> = serde_json::from_value(body["first"]["C"].clone()).unwrap();
    assert_eq!(first_c, HashSet::from(["c".to_string(), "ε".to_string()]));

    handle.shutdown();
}

#[tokio::test]
async fn grammar_data_is_idempotent() {
    let handle = spawn().await;

    let first = get(&handle, "/api/grammar_data").await.bytes().await.unwrap();
    let second = get(&handle, "/api/grammar_data").await.bytes().await.unwrap();
    assert_eq!(first, second);

    handle.shutdown();
}

#[tokio::test]
async fn keys_are_consistent_across_sections() {
    let handle = spawn().await;

    let body: Value = get(&handle, "/api/grammar_data").await.json().await.unwrap();
    let keys = |section: &str| -> HashSet<String> {
        body[section].as_object().unwrap().keys().cloned().collect()
    };
    let grammar = keys("grammar");
    assert_eq!(grammar.len(), 5);
    assert_eq!(keys("first"), grammar);
    assert_eq!(keys("follow"), grammar);
    assert_eq!(keys("table"), grammar);

    let first: HashMap<String, HashSet<String>> =
        serde_json::from_value(body["first"].clone()).unwrap();
    let mut terminals: HashSet<String> = first.values().flatten().cloned().collect();
    terminals.remove("ε");
    terminals.insert("$".to_string());
    for nt in &grammar {
        let row = body["table"][nt].as_object().unwrap();
        for t in &terminals {
            assert!(row.contains_key(t), "M[{}, {}] missing", nt, t);
        }
    }

    handle.shutdown();
}

#[tokio::test]
async fn text_renderings() {
    let handle = spawn().await;

    let plain = get(&handle, "/api/grammar_data.txt").await.text().await.unwrap();
    assert!(plain.starts_with("S -> A d"));

    let latex = get(&handle, "/api/grammar_data.tex").await.text().await.unwrap();
    assert!(latex.contains("\\begin{array}"));

    handle.shutdown();
}

#[tokio::test]
async fn health_and_unknown_route() {
    let handle = spawn().await;

    let body: Value = get(&handle, "/healthz").await.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok", "non_terminals": 5 }));

    assert_eq!(get(&handle, "/api/nope").await.status(), 404);

    handle.shutdown();
}
