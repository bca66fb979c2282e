use crate::catalog::Catalog;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::sections::SectionIndex;
use serde_json::json;
use std::path::PathBuf;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "catalogLoaded": state.catalog.is_some(),
            "sectionsLoaded": state.sections.is_some(),
            "blockCount": state.schedule.len(),
        }),
    )
}

fn required_path(req: &Request) -> Result<PathBuf, serde_json::Value> {
    req.params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
        .ok_or_else(|| err(&req.id, "bad_params", "missing params.path", None))
}

fn handle_catalog_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = match required_path(req) {
        Ok(p) => p,
        Err(e) => return e,
    };
    match Catalog::load(&path) {
        Ok(catalog) => {
            let count = catalog.len();
            state.catalog = Some(catalog);
            ok(&req.id, json!({ "courseCount": count }))
        }
        Err(e) => err(&req.id, "catalog_load_failed", format!("{e:#}"), None),
    }
}

fn handle_sections_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = match required_path(req) {
        Ok(p) => p,
        Err(e) => return e,
    };
    match SectionIndex::load(&path) {
        Ok(index) => {
            let count = index.len();
            state.sections = Some(index);
            ok(&req.id, json!({ "sectionCount": count }))
        }
        Err(e) => err(&req.id, "sections_load_failed", format!("{e:#}"), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "catalog.load" => Some(handle_catalog_load(state, req)),
        "catalog.loadSections" => Some(handle_sections_load(state, req)),
        _ => None,
    }
}
