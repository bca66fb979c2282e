use crate::catalog::{display_text, suggest};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

const DEFAULT_LIMIT: usize = 10;

fn handle_query(state: &mut AppState, req: &Request) -> serde_json::Value {
    let query = match req.params.get("query").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing query", None),
    };
    let limit = match req.params.get("limit") {
        None => DEFAULT_LIMIT,
        Some(v) if v.is_null() => DEFAULT_LIMIT,
        Some(v) => match v.as_u64() {
            Some(n) if n > 0 => n as usize,
            _ => return err(&req.id, "bad_params", "limit must be > 0", None),
        },
    };

    // An unloaded catalog behaves as an empty one; typing before the catalog
    // resolves just yields no suggestions.
    let records = state
        .catalog
        .as_ref()
        .map(|c| c.records())
        .unwrap_or_default();
    let suggestions: Vec<serde_json::Value> = suggest(&query, records, limit)
        .into_iter()
        .map(|r| {
            json!({
                "course": r.course,
                "catalogNumber": r.catalog_number,
                "label": display_text(r),
            })
        })
        .collect();

    ok(&req.id, json!({ "suggestions": suggestions }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "suggest.query" => Some(handle_query(state, req)),
        _ => None,
    }
}
