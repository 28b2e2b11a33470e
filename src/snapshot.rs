//! Session Persistence
//!
//! Serialization of the whole session to the legacy localStorage blob and
//! back. Parsing is total and field-independent: every field is rebuilt
//! from untyped JSON with its own default, so one wrong-typed value
//! degrades only itself — never a sibling project, item or setting.

use serde::Serialize;
use serde_json::Value;
use web_sys::Storage;

use crate::config::{MAX_PROJECTS, STORAGE_KEY, ZOOM_MAX, ZOOM_MIN};
use crate::models::{BoardItem, CatalogItem, Language, Project, Units};
use crate::session::{ActiveTarget, Session};

/// The persisted JSON shape, used for writing only. `activeProjectId`
/// keeps the legacy encoding (`-1` or absent means the scratch board) at
/// the storage boundary; in memory the session carries an [`ActiveTarget`].
#[derive(Debug, Clone, Serialize)]
struct StoredSnapshot {
    projects: Vec<Project>,
    #[serde(rename = "activeProjectId")]
    active_project_id: Option<i64>,
    #[serde(rename = "workingBoard")]
    working_board: Project,
    language: String,
    units: String,
}

/// Everything the app persists between visits.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub session: Session,
    pub language: Language,
    pub units: Units,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            session: Session::new(),
            language: Language::En,
            units: Units::Metric,
        }
    }
}

fn parse_language(code: &str) -> Language {
    match code {
        "fr" => Language::Fr,
        "es" => Language::Es,
        "de" => Language::De,
        "it" => Language::It,
        _ => Language::En,
    }
}

// ========================
// Field-level reconstruction
// ========================

fn str_field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_string)
}

fn f64_field(v: &Value, key: &str) -> f64 {
    v.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn i64_field(v: &Value, key: &str, default: i64) -> i64 {
    v.get(key).and_then(Value::as_i64).unwrap_or(default)
}

fn parse_catalog_item(v: &Value) -> CatalogItem {
    CatalogItem {
        id: i64_field(v, "id", 0),
        brand: str_field(v, "brand"),
        name: str_field(v, "name"),
        width: f64_field(v, "width"),
        depth: f64_field(v, "depth"),
        weight: f64_field(v, "weight"),
        draw: f64_field(v, "draw"),
        color: opt_str_field(v, "color"),
        status: opt_str_field(v, "status"),
        image: opt_str_field(v, "image")
            .or_else(|| opt_str_field(v, "image_url"))
            .or_else(|| opt_str_field(v, "photo")),
        year: v.get("year").and_then(Value::as_i64).map(|y| y as i32),
        kind: opt_str_field(v, "type"),
        circuit: opt_str_field(v, "circuit"),
        bypass: opt_str_field(v, "bypass"),
        power: opt_str_field(v, "power"),
        origin: opt_str_field(v, "origin"),
        manual: opt_str_field(v, "manual"),
        material: opt_str_field(v, "material"),
        profile: opt_str_field(v, "profile"),
        sweetwater: opt_str_field(v, "sweetwater"),
        woodbrass: opt_str_field(v, "woodbrass"),
        thomann: opt_str_field(v, "thomann"),
    }
}

/// Placements: non-object entries are dropped, wrong-typed fields inside
/// an object default individually.
fn parse_items(v: &Value, key: &str) -> Vec<BoardItem> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .map(|item| BoardItem {
                    item: parse_catalog_item(item),
                    instance_id: i64_field(item, "instanceId", 0),
                    x: f64_field(item, "x"),
                    y: f64_field(item, "y"),
                    rotation: i64_field(item, "rotation", 0) as i32,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn parse_project(v: &Value, fallback_id: i64, fallback_name: &str) -> Project {
    Project {
        id: i64_field(v, "id", fallback_id),
        name: v
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(fallback_name)
            .to_string(),
        zoom: v
            .get("zoom")
            .and_then(Value::as_i64)
            .map(|z| z as i32)
            .unwrap_or(100)
            .clamp(ZOOM_MIN, ZOOM_MAX),
        board_pedals: parse_items(v, "boardPedals"),
        selected_boards: parse_items(v, "selectedBoards"),
    }
}

/// Decode a raw localStorage payload. Never fails: each field is rebuilt
/// independently, stored zoom levels are re-clamped, the project list is
/// re-truncated and a stale active id falls back to the scratch board.
pub fn parse_snapshot(raw: &str) -> Snapshot {
    let root: Value = serde_json::from_str(raw).unwrap_or(Value::Null);

    let mut projects: Vec<Project> = Vec::new();
    if let Some(entries) = root.get("projects").and_then(Value::as_array) {
        for (index, entry) in entries.iter().enumerate() {
            if projects.len() >= MAX_PROJECTS {
                break;
            }
            if !entry.is_object() {
                continue;
            }
            // A wrong-typed id gets a generated one below the scratch
            // board's -1, unique per slot
            let project = parse_project(entry, -(index as i64) - 2, "");
            if projects.iter().any(|p| p.id == project.id) {
                continue;
            }
            projects.push(project);
        }
    }

    let active = match root.get("activeProjectId").and_then(Value::as_i64) {
        Some(id) if projects.iter().any(|p| p.id == id) => ActiveTarget::Saved(id),
        _ => ActiveTarget::Scratch,
    };
    let mut working = parse_project(
        root.get("workingBoard").unwrap_or(&Value::Null),
        -1,
        "WORKING",
    );
    working.id = -1;

    Snapshot {
        session: Session {
            projects,
            active,
            working,
        },
        language: parse_language(
            root.get("language").and_then(Value::as_str).unwrap_or("en"),
        ),
        units: match root.get("units").and_then(Value::as_str) {
            Some("imperial") => Units::Imperial,
            _ => Units::Metric,
        },
    }
}

/// Encode the session for storage, restoring the legacy active-id encoding.
pub fn encode_snapshot(snapshot: &Snapshot) -> String {
    let stored = StoredSnapshot {
        projects: snapshot.session.projects.clone(),
        active_project_id: match snapshot.session.active {
            ActiveTarget::Saved(id) => Some(id),
            ActiveTarget::Scratch => Some(-1),
        },
        working_board: snapshot.session.working.clone(),
        language: snapshot.language.as_str().to_string(),
        units: match snapshot.units {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
        .to_string(),
    };
    // StoredSnapshot has no non-serializable fields.
    serde_json::to_string(&stored).unwrap_or_else(|_| "{}".to_string())
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read and decode the persisted snapshot. Absent or unreadable storage
/// yields the default snapshot.
pub fn load() -> Snapshot {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map(|raw| parse_snapshot(&raw))
        .unwrap_or_default()
}

/// Persist the snapshot. Quota or privacy-mode failures are logged and
/// dropped; the in-memory session stays the source of truth.
pub fn save(snapshot: &Snapshot) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage
        .set_item(STORAGE_KEY, &encode_snapshot(snapshot))
        .is_err()
    {
        log::warn!("failed to persist session to localStorage");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_payloads_decode_to_default() {
        for raw in ["", "not json", "[1,2,3]", "42", "{\"projects\": 7}"] {
            let snapshot = parse_snapshot(raw);
            assert!(snapshot.session.projects.is_empty(), "raw = {raw:?}");
            assert_eq!(snapshot.session.active, ActiveTarget::Scratch);
            assert_eq!(snapshot.language, Language::En);
            assert_eq!(snapshot.units, Units::Metric);
        }
    }

    #[test]
    fn legacy_blob_round_trips() {
        let raw = r#"{
            "projects": [
                {"id": 10, "name": "LIVE RIG", "zoom": 150,
                 "boardPedals": [{"id": 3, "brand": "Boss", "name": "DS-1",
                                  "width": 70, "depth": 120, "weight": 400,
                                  "draw": 20, "instanceId": 99,
                                  "x": 100.5, "y": 200.0, "rotation": 90}],
                 "selectedBoards": []}
            ],
            "activeProjectId": 10,
            "workingBoard": {"id": -1, "name": "WORKING", "zoom": 100,
                             "boardPedals": [], "selectedBoards": []},
            "language": "fr",
            "units": "imperial"
        }"#;

        let snapshot = parse_snapshot(raw);
        assert_eq!(snapshot.session.active, ActiveTarget::Saved(10));
        assert_eq!(snapshot.language, Language::Fr);
        assert_eq!(snapshot.units, Units::Imperial);

        let project = &snapshot.session.projects[0];
        assert_eq!(project.name, "LIVE RIG");
        let pedal = &project.board_pedals[0];
        assert_eq!(pedal.instance_id, 99);
        assert_eq!(pedal.rotation, 90);
        assert_eq!(pedal.item.brand, "Boss");

        let reparsed = parse_snapshot(&encode_snapshot(&snapshot));
        assert_eq!(reparsed, snapshot);
    }

    #[test]
    fn wrong_typed_field_defaults_without_dropping_siblings() {
        let raw = r#"{
            "projects": [{"id": 5, "name": "A", "zoom": "150"}],
            "workingBoard": {"id": -1, "name": "WORKING",
                             "boardPedals": [{"brand": "Boss", "name": "DS-1",
                                              "instanceId": 7}]}
        }"#;

        let snapshot = parse_snapshot(raw);
        let projects = &snapshot.session.projects;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, 5);
        assert_eq!(projects[0].name, "A");
        // Only the unreadable zoom falls back
        assert_eq!(projects[0].zoom, 100);
        assert_eq!(snapshot.session.working.board_pedals.len(), 1);
        assert_eq!(snapshot.session.working.board_pedals[0].instance_id, 7);
    }

    #[test]
    fn bad_entries_inside_item_arrays_degrade_locally() {
        let raw = r#"{
            "workingBoard": {"id": -1, "name": "WORKING",
                "boardPedals": [
                    {"brand": "Boss", "name": "DS-1", "instanceId": 1},
                    42,
                    {"brand": "Ibanez", "name": "TS9", "instanceId": 2,
                     "x": "oops"}
                ],
                "selectedBoards": "oops"}
        }"#;

        let snapshot = parse_snapshot(raw);
        let pedals = &snapshot.session.working.board_pedals;
        // The non-object entry is dropped; the wrong-typed x defaults
        assert_eq!(pedals.len(), 2);
        assert_eq!(pedals[0].item.name, "DS-1");
        assert_eq!(pedals[1].item.name, "TS9");
        assert_eq!(pedals[1].x, 0.0);
        assert!(snapshot.session.working.selected_boards.is_empty());
    }

    #[test]
    fn wrong_typed_project_id_gets_generated_id() {
        let raw = r#"{"projects": [{"id": "x", "name": "B"}]}"#;
        let snapshot = parse_snapshot(raw);
        assert_eq!(snapshot.session.projects.len(), 1);
        assert_eq!(snapshot.session.projects[0].name, "B");
        assert_eq!(snapshot.session.projects[0].id, -2);
    }

    #[test]
    fn duplicate_project_ids_keep_the_first() {
        let raw = r#"{"projects": [
            {"id": 1, "name": "FIRST"},
            {"id": 2, "name": "OTHER"},
            {"id": 1, "name": "SECOND"}
        ]}"#;
        let snapshot = parse_snapshot(raw);
        let projects = &snapshot.session.projects;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "FIRST");
        assert_eq!(projects[1].name, "OTHER");
    }

    #[test]
    fn negative_one_active_id_means_scratch() {
        let raw = r#"{"projects": [{"id": 5, "name": "A"}], "activeProjectId": -1}"#;
        assert_eq!(parse_snapshot(raw).session.active, ActiveTarget::Scratch);
    }

    #[test]
    fn stale_active_id_falls_back_to_scratch() {
        let raw = r#"{"projects": [{"id": 5, "name": "A"}], "activeProjectId": 404}"#;
        assert_eq!(parse_snapshot(raw).session.active, ActiveTarget::Scratch);
    }

    #[test]
    fn stored_zoom_is_reclamped() {
        let raw = r#"{"projects": [{"id": 1, "name": "A", "zoom": 900}],
                      "workingBoard": {"id": -1, "name": "WORKING", "zoom": 3}}"#;
        let snapshot = parse_snapshot(raw);
        assert_eq!(snapshot.session.projects[0].zoom, 200);
        assert_eq!(snapshot.session.working.zoom, 25);
    }

    #[test]
    fn excess_projects_are_truncated() {
        let projects: Vec<String> = (0..12)
            .map(|i| format!("{{\"id\": {i}, \"name\": \"P{i}\"}}"))
            .collect();
        let raw = format!("{{\"projects\": [{}]}}", projects.join(","));
        assert_eq!(parse_snapshot(&raw).session.projects.len(), MAX_PROJECTS);
    }

    #[test]
    fn scratch_encoding_uses_legacy_sentinel() {
        let snapshot = Snapshot::default();
        let encoded = encode_snapshot(&snapshot);
        assert!(encoded.contains("\"activeProjectId\":-1"));
    }

    #[test]
    fn placements_survive_missing_optional_fields() {
        let raw = r#"{"workingBoard": {"id": -1, "name": "WORKING",
                      "boardPedals": [{"brand": "Boss", "name": "DS-1"}]}}"#;
        let snapshot = parse_snapshot(raw);
        let pedal: &BoardItem = &snapshot.session.working.board_pedals[0];
        assert_eq!(pedal.instance_id, 0);
        assert_eq!(pedal.x, 0.0);
        assert_eq!(pedal.rotation, 0);
    }

    #[test]
    fn alternate_image_columns_are_read() {
        let raw = r#"{"workingBoard": {"id": -1, "name": "WORKING",
                      "boardPedals": [
                          {"name": "A", "image_url": "https://a/img.png"},
                          {"name": "B", "photo": "https://b/img.png"}
                      ]}}"#;
        let snapshot = parse_snapshot(raw);
        let pedals = &snapshot.session.working.board_pedals;
        assert_eq!(pedals[0].item.image.as_deref(), Some("https://a/img.png"));
        assert_eq!(pedals[1].item.image.as_deref(), Some("https://b/img.png"));
    }
}
