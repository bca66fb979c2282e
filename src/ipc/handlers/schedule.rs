use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::schedule::Block;
use crate::sections::{week_grid, SectionIndex};
use serde_json::json;
use uuid::Uuid;

fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let blocks: Vec<serde_json::Value> = state
        .schedule
        .iter()
        .map(|b| json!({ "id": b.id, "label": b.label }))
        .collect();
    ok(&req.id, json!({ "blocks": blocks }))
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let label = match required_str(req, "label") {
        Ok(v) => v,
        Err(e) => return e,
    };
    // The UI may pass a stable id (e.g. derived from the course code); when it
    // doesn't, one is generated here.
    let id = match req.params.get("id") {
        None => Uuid::new_v4().to_string(),
        Some(v) if v.is_null() => Uuid::new_v4().to_string(),
        Some(v) => match v.as_str().map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s.to_string(),
            None => return err(&req.id, "bad_params", "id must be a non-empty string", None),
        },
    };

    match state.schedule.append(Block {
        id: id.clone(),
        label,
    }) {
        Ok(()) => ok(&req.id, json!({ "blockId": id })),
        Err(e) => err(
            &req.id,
            "duplicate_id",
            e.to_string(),
            Some(json!({ "id": e.id })),
        ),
    }
}

fn handle_remove(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let removed = state.schedule.remove(&id);
    ok(&req.id, json!({ "removed": removed }))
}

fn handle_move(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let before_id = match required_str(req, "beforeId") {
        Ok(v) => v,
        Err(e) => return e,
    };
    // Invalid ids are a no-op, not an error, so the UI can fire drag results
    // without defensive checks.
    let moved = state.schedule.move_before(&id, &before_id);
    ok(&req.id, json!({ "moved": moved }))
}

fn handle_week(state: &mut AppState, req: &Request) -> serde_json::Value {
    let empty = SectionIndex::default();
    let index = state.sections.as_ref().unwrap_or(&empty);
    let days: Vec<Vec<serde_json::Value>> = week_grid(&state.schedule, index)
        .iter()
        .map(|day| {
            day.iter()
                .map(|p| {
                    json!({
                        "blockId": p.block_id,
                        "start": p.start,
                        "end": p.end,
                    })
                })
                .collect()
        })
        .collect();
    ok(&req.id, json!({ "days": days }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.list" => Some(handle_list(state, req)),
        "schedule.add" => Some(handle_add(state, req)),
        "schedule.remove" => Some(handle_remove(state, req)),
        "schedule.move" => Some(handle_move(state, req)),
        "schedule.week" => Some(handle_week(state, req)),
        _ => None,
    }
}
