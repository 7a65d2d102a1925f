use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Store reachability report served at `/test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_or_not(value: &Option<String>) -> String {
    match value {
        Some(_) => "set".to_string(),
        None => "not set".to_string(),
    }
}

/// Never fails: store errors are folded into the report.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running".to_string(),
        database: "not configured".to_string(),
        database_url: set_or_not(&state.config.store.uri),
        database_name: set_or_not(&state.config.store.database),
        connection_status: "Not Connected".to_string(),
        collections: vec![],
    };

    if let Some(store) = state.content.store() {
        report.connection_status = "Connected".to_string();
        match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                report.collections = names;
                report.database = "connected".to_string();
            }
            Err(e) => {
                let reason: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("connected but error: {}", reason);
            }
        }
    }

    Json(report)
}
