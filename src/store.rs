use std::sync::Arc;

use crate::grammar::{GrammarData, GrammarError};

/// Read-only home of the grammar data. Cloning shares the same dataset.
#[derive(Debug, Clone)]
pub struct GrammarStore {
    data: Arc<GrammarData>,
}

impl GrammarStore {
    pub fn new() -> Result<Self, GrammarError> {
        Self::from_data(GrammarData::fixture()?)
    }

    pub fn from_data(data: GrammarData) -> Result<Self, GrammarError> {
        data.validate()?;
        Ok(Self {
            data: Arc::new(data),
        })
    }

    /// Snapshot of all four structures. Callers own the copy.
    pub fn get_grammar_data(&self) -> GrammarData {
        (*self.data).clone()
    }

    pub fn data(&self) -> &GrammarData {
        &self.data
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.data.as_ref())
    }
}
