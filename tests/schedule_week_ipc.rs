
use serde_json::json;
use test_support::{fixture_path, request_ok, spawn_sidecar};

fn day_block_ids(result: &serde_json::Value, day: usize) -> Vec<String> {
    result
        .get("days")
        .and_then(|v| v.as_array())
        .expect("days array")
        .get(day)
        .and_then(|v| v.as_array())
        .expect("day bucket")
        .iter()
        .map(|p| {
            p.get("blockId")
                .and_then(|v| v.as_str())
                .expect("blockId")
                .to_string()
        })
        .collect()
}

#[test]
fn week_grid_places_blocks_into_weekday_buckets() {
    let classes = fixture_path("fixtures/classes.json");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let loaded = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "catalog.loadSections",
        json!({ "path": classes.to_string_lossy() }),
    );
    assert_eq!(loaded.get("sectionCount").and_then(|v| v.as_i64()), Some(4));

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.add",
        json!({ "id": "b1", "label": "CS 202" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.add",
        json!({ "id": "b2", "label": "MATH 101" }),
    );
    // No section data; stays off the grid.
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "schedule.add",
        json!({ "id": "b3", "label": "PHIL 101" }),
    );

    let week = request_ok(&mut stdin, &mut reader, "5", "schedule.week", json!({}));
    // CS 202 section 001 meets Monday/Wednesday; MATH 101 Tuesday/Thursday.
    assert_eq!(day_block_ids(&week, 0), ["b1"]);
    assert_eq!(day_block_ids(&week, 1), ["b2"]);
    assert_eq!(day_block_ids(&week, 2), ["b1"]);
    assert_eq!(day_block_ids(&week, 3), ["b2"]);
    assert!(day_block_ids(&week, 4).is_empty());

    let monday = week
        .get("days")
        .and_then(|v| v.as_array())
        .and_then(|d| d[0].as_array())
        .expect("monday bucket");
    assert_eq!(
        monday[0].get("start").and_then(|v| v.as_str()),
        Some("1100")
    );
    assert_eq!(monday[0].get("end").and_then(|v| v.as_str()), Some("1215"));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn week_grid_without_sections_is_empty() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.add",
        json!({ "id": "b1", "label": "CS 202" }),
    );
    let week = request_ok(&mut stdin, &mut reader, "2", "schedule.week", json!({}));
    for day in 0..7 {
        assert!(day_block_ids(&week, day).is_empty());
    }

    drop(stdin);
    let _ = child.wait();
}
