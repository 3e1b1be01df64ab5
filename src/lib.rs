extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod store;
#[cfg(not(target_arch = "wasm32"))]
pub mod web;

pub use grammar::{GrammarData, GrammarError};
pub use store::GrammarStore;

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Same payload as `GET /api/grammar_data`, for pages that load the crate as WASM.
#[wasm_bindgen]
pub fn grammar_data_to_json() -> String {
    match GrammarStore::new() {
        Ok(store) => store
            .to_json()
            .unwrap_or_else(|e| error_json(e.to_string())),
        Err(e) => error_json(e.to_string()),
    }
}


#[cfg(test)]
mod wasm_tests {
    #[test]
    fn exported_json_matches_store() {
        let json = crate::grammar_data_to_json();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(v.get("error").is_none());
        assert_eq!(v["grammar"]["S"], serde_json::json!(["A d"]));
        assert_eq!(json, crate::GrammarStore::new().unwrap().to_json().unwrap());
    }
}
