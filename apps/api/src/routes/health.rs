use axum::Json;
use serde_json::{json, Value};

use crate::analysis::dictionaries::DICTIONARY_VERSION;

/// GET /health
/// Returns a simple status object with service and dictionary versions.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "dictionaryVersion": DICTIONARY_VERSION
    }))
}
