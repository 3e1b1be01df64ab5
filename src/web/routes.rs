use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::grammar::GrammarData;
use crate::store::GrammarStore;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const SCRIPT_JS: &str = include_str!("../../assets/script.js");

pub fn router(store: GrammarStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/api/grammar_data", get(grammar_data))
        .route("/api/grammar_data.txt", get(grammar_data_plaintext))
        .route("/api/grammar_data.tex", get(grammar_data_latex))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        SCRIPT_JS,
    )
}

async fn grammar_data(State(store): State<GrammarStore>) -> Json<GrammarData> {
    let data = store.get_grammar_data();
    debug!(non_terminals = data.grammar.rules.len(), "serving grammar data");
    Json(data)
}

async fn grammar_data_plaintext(State(store): State<GrammarStore>) -> String {
    store.data().to_plaintext()
}

async fn grammar_data_latex(State(store): State<GrammarStore>) -> String {
    store.data().to_latex()
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    non_terminals: usize,
}

async fn healthz(State(store): State<GrammarStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        non_terminals: store.data().grammar.rules.len(),
    })
}
