//! Frontend Models
//!
//! Data structures for the catalog, placed items and projects.
//! Serde renames preserve the legacy persisted JSON shape
//! (`instanceId`, `boardPedals`, `selectedBoards`).

use serde::{Deserialize, Serialize};

/// A row from the remote catalog. Read-only; keyed by `id` remotely.
///
/// Every field defaults so sparse rows (and custom items, which carry no
/// catalog id) decode without errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    pub id: i64,
    pub brand: String,
    pub name: String,
    /// Physical width in millimetres.
    pub width: f64,
    /// Physical depth in millimetres.
    pub depth: f64,
    /// Weight in grams.
    pub weight: f64,
    /// Current draw in milliamps.
    pub draw: f64,
    pub color: Option<String>,
    pub status: Option<String>,
    // Catalog rows have used several names for the product photo column
    #[serde(alias = "image_url", alias = "photo")]
    pub image: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub circuit: Option<String>,
    pub bypass: Option<String>,
    pub power: Option<String>,
    pub origin: Option<String>,
    pub manual: Option<String>,
    pub material: Option<String>,
    pub profile: Option<String>,
    // Retailer product slugs/URLs.
    pub sweetwater: Option<String>,
    pub woodbrass: Option<String>,
    pub thomann: Option<String>,
}

impl CatalogItem {
    pub fn is_discontinued(&self) -> bool {
        self.status
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains("discontinued")
    }
}

/// A placed instance of a catalog entry (or custom item) on a project canvas.
///
/// `instance_id` is a per-placement identifier, distinct from the catalog id:
/// one catalog entry may appear as several independent placements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    #[serde(rename = "instanceId", default)]
    pub instance_id: i64,
    /// Center position in stage coordinates, pre-zoom.
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// One of 0, 90, 180, 270 degrees.
    #[serde(default)]
    pub rotation: i32,
}

/// One user-named layout: two item collections and a zoom level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Integer percentage, always within [25, 200].
    pub zoom: i32,
    #[serde(rename = "boardPedals")]
    pub board_pedals: Vec<BoardItem>,
    #[serde(rename = "selectedBoards")]
    pub selected_boards: Vec<BoardItem>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            zoom: 100,
            board_pedals: Vec::new(),
            selected_boards: Vec::new(),
        }
    }
}

impl Project {
    /// The implicit scratch board used when no saved project is active.
    pub fn working() -> Self {
        Self {
            id: -1,
            name: "WORKING".to_string(),
            ..Default::default()
        }
    }
}

/// The two structurally identical item categories. Board hardware renders
/// beneath pedals on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Pedal,
    Board,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Pedal => "pedal",
            ItemKind::Board => "board",
        }
    }
}

/// Draft values from the custom-item form, pre-validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomDraft {
    pub kind: ItemKind,
    pub name: String,
    pub width: String,
    pub depth: String,
    pub color: String,
}

/// Display unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

/// UI languages. German and Italian fall back to the English dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    De,
    It,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Fr,
        Language::Es,
        Language::De,
        Language::It,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
            Language::It => "it",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_rows_accept_alternate_image_columns() {
        let rows = [
            r#"{"id": 1, "brand": "Boss", "name": "DS-1",
                "image": "https://a/ds1.png"}"#,
            r#"{"id": 2, "brand": "Boss", "name": "BD-2",
                "image_url": "https://a/bd2.png"}"#,
            r#"{"id": 3, "brand": "Boss", "name": "CE-2",
                "photo": "https://a/ce2.png"}"#,
        ];
        for raw in rows {
            let item: CatalogItem = serde_json::from_str(raw).unwrap();
            assert!(item.image.is_some(), "raw = {raw:?}");
        }

        let bare: CatalogItem = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(bare.image, None);
    }
}
