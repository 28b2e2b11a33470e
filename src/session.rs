//! Project/Session State
//!
//! The single authoritative state manager: every mutation of projects,
//! the active selection and placed items goes through `Session`. All
//! methods are total, synchronous functions; the UI layer only wraps them
//! in signal updates.

use crate::config::{MAX_PROJECTS, ZOOM_MAX, ZOOM_MIN};
use crate::geometry::Point;
use crate::models::{BoardItem, CatalogItem, CustomDraft, ItemKind, Project};

/// Which project mutations apply to. The scratch board replaces the legacy
/// `-1` / `null` sentinel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTarget {
    Saved(i64),
    Scratch,
}

/// A partial project update. Only the present fields are replaced.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub zoom: Option<i32>,
    pub board_pedals: Option<Vec<BoardItem>>,
    pub selected_boards: Option<Vec<BoardItem>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub projects: Vec<Project>,
    pub active: ActiveTarget,
    pub working: Project,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            active: ActiveTarget::Scratch,
            working: Project::working(),
        }
    }

    /// The project mutations apply to. Total: a stale saved id falls back
    /// to the scratch board rather than failing.
    pub fn active_project(&self) -> &Project {
        match self.active {
            ActiveTarget::Saved(id) => self
                .projects
                .iter()
                .find(|p| p.id == id)
                .unwrap_or(&self.working),
            ActiveTarget::Scratch => &self.working,
        }
    }

    fn active_project_mut(&mut self) -> &mut Project {
        match self.active {
            ActiveTarget::Saved(id) => {
                if let Some(idx) = self.projects.iter().position(|p| p.id == id) {
                    &mut self.projects[idx]
                } else {
                    &mut self.working
                }
            }
            ActiveTarget::Scratch => &mut self.working,
        }
    }

    /// Merge a partial update into the active project. Zoom is clamped on
    /// every path so the [25, 200] invariant cannot be broken.
    pub fn update_active(&mut self, patch: ProjectPatch) {
        let project = self.active_project_mut();
        if let Some(zoom) = patch.zoom {
            project.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        }
        if let Some(pedals) = patch.board_pedals {
            project.board_pedals = pedals;
        }
        if let Some(boards) = patch.selected_boards {
            project.selected_boards = boards;
        }
    }

    // ========================
    // Project lifecycle
    // ========================

    /// Append a new empty project and make it active. No-op at the cap.
    pub fn create_project(&mut self, now_ms: i64) {
        if self.projects.len() >= MAX_PROJECTS {
            return;
        }
        let id = self.next_project_id(now_ms);
        self.projects.push(Project {
            id,
            name: format!("BOARD {}", self.projects.len() + 1),
            ..Default::default()
        });
        self.active = ActiveTarget::Saved(id);
    }

    fn next_project_id(&self, now_ms: i64) -> i64 {
        let mut id = now_ms.max(1);
        while self.projects.iter().any(|p| p.id == id) {
            id += 1;
        }
        id
    }

    /// Remove a saved project. Activation falls back to the first remaining
    /// project; an empty list returns to a reset scratch board.
    pub fn delete_project(&mut self, id: i64) {
        self.projects.retain(|p| p.id != id);
        if self.projects.is_empty() {
            self.active = ActiveTarget::Scratch;
            self.working = Project::working();
        } else if self.active == ActiveTarget::Saved(id) {
            self.active = ActiveTarget::Saved(self.projects[0].id);
        }
    }

    /// Commit a rename. Names are stored upper-cased.
    pub fn commit_rename(&mut self, id: i64, name: &str) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.name = name.to_uppercase();
        }
    }

    /// Splice-move a project to a new tab index. Activation is untouched.
    pub fn move_project(&mut self, from: usize, to: usize) {
        move_element(&mut self.projects, from, to);
    }

    // ========================
    // Zoom
    // ========================

    pub fn set_zoom(&mut self, delta: i32) {
        let zoom = self.active_project().zoom + delta;
        self.update_active(ProjectPatch {
            zoom: Some(zoom),
            ..Default::default()
        });
    }

    pub fn reset_zoom(&mut self) {
        self.update_active(ProjectPatch {
            zoom: Some(100),
            ..Default::default()
        });
    }

    // ========================
    // Item mutations
    // ========================

    /// Next placement id: monotonic, unique within the active project's
    /// combined item sets.
    pub fn next_instance_id(&self, now_ms: i64) -> i64 {
        let project = self.active_project();
        let max = project
            .board_pedals
            .iter()
            .chain(&project.selected_boards)
            .map(|i| i.instance_id)
            .max()
            .unwrap_or(0);
        now_ms.max(max + 1)
    }

    /// Place a catalog item at `center` on the active project.
    pub fn add_item(&mut self, kind: ItemKind, item: CatalogItem, center: Point, now_ms: i64) -> i64 {
        let instance_id = self.next_instance_id(now_ms);
        let placed = BoardItem {
            item,
            instance_id,
            x: center.x,
            y: center.y,
            rotation: 0,
        };
        let project = self.active_project();
        let patch = match kind {
            ItemKind::Pedal => {
                let mut pedals = project.board_pedals.clone();
                pedals.push(placed);
                ProjectPatch {
                    board_pedals: Some(pedals),
                    ..Default::default()
                }
            }
            ItemKind::Board => {
                let mut boards = project.selected_boards.clone();
                boards.push(placed);
                ProjectPatch {
                    selected_boards: Some(boards),
                    ..Default::default()
                }
            }
        };
        self.update_active(patch);
        instance_id
    }

    /// Place a manually authored item. Returns `None` (no mutation) when
    /// width or depth is missing or not numeric — the form stays filled.
    pub fn add_custom(&mut self, draft: &CustomDraft, center: Point, now_ms: i64) -> Option<i64> {
        let width = draft.width.trim().parse::<f64>().ok()?;
        let depth = draft.depth.trim().parse::<f64>().ok()?;
        let name = if draft.name.trim().is_empty() {
            format!("Custom {}", draft.kind.as_str())
        } else {
            draft.name.trim().to_string()
        };
        let item = CatalogItem {
            brand: "Custom".to_string(),
            name,
            width,
            depth,
            color: Some(draft.color.clone()),
            ..Default::default()
        };
        Some(self.add_item(draft.kind, item, center, now_ms))
    }

    pub fn rotate_item(&mut self, kind: ItemKind, instance_id: i64) {
        self.map_items(kind, |item| {
            if item.instance_id == instance_id {
                item.rotation = (item.rotation + 90) % 360;
            }
        });
    }

    pub fn move_item_to(&mut self, kind: ItemKind, instance_id: i64, pos: Point) {
        self.map_items(kind, |item| {
            if item.instance_id == instance_id {
                item.x = pos.x;
                item.y = pos.y;
            }
        });
    }

    pub fn remove_item(&mut self, kind: ItemKind, instance_id: i64) {
        let project = self.active_project();
        let patch = match kind {
            ItemKind::Pedal => ProjectPatch {
                board_pedals: Some(
                    project
                        .board_pedals
                        .iter()
                        .filter(|i| i.instance_id != instance_id)
                        .cloned()
                        .collect(),
                ),
                ..Default::default()
            },
            ItemKind::Board => ProjectPatch {
                selected_boards: Some(
                    project
                        .selected_boards
                        .iter()
                        .filter(|i| i.instance_id != instance_id)
                        .cloned()
                        .collect(),
                ),
                ..Default::default()
            },
        };
        self.update_active(patch);
    }

    /// Empty both item sets of the active project.
    pub fn clear_active(&mut self) {
        self.update_active(ProjectPatch {
            board_pedals: Some(Vec::new()),
            selected_boards: Some(Vec::new()),
            ..Default::default()
        });
    }

    fn map_items(&mut self, kind: ItemKind, f: impl Fn(&mut BoardItem)) {
        let project = self.active_project();
        let mapped = |items: &[BoardItem]| {
            let mut items = items.to_vec();
            for item in &mut items {
                f(item);
            }
            items
        };
        let patch = match kind {
            ItemKind::Pedal => ProjectPatch {
                board_pedals: Some(mapped(&project.board_pedals)),
                ..Default::default()
            },
            ItemKind::Board => ProjectPatch {
                selected_boards: Some(mapped(&project.selected_boards)),
                ..Default::default()
            },
        };
        self.update_active(patch);
    }
}

/// Move `v[from]` to index `to`, shifting the elements in between.
pub fn move_element<T>(v: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= v.len() || to >= v.len() {
        return;
    }
    let element = v.remove(from);
    v.insert(to, element);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_item(name: &str) -> CatalogItem {
        CatalogItem {
            brand: "Boss".to_string(),
            name: name.to_string(),
            width: 70.0,
            depth: 120.0,
            draw: 20.0,
            weight: 400.0,
            ..Default::default()
        }
    }

    const CENTER: Point = Point { x: 500.0, y: 400.0 };

    #[test]
    fn zoom_is_clamped_on_every_path() {
        let mut session = Session::new();
        session.update_active(ProjectPatch {
            zoom: Some(195),
            ..Default::default()
        });
        session.set_zoom(5);
        assert_eq!(session.active_project().zoom, 200);
        session.set_zoom(5);
        assert_eq!(session.active_project().zoom, 200);

        session.update_active(ProjectPatch {
            zoom: Some(30),
            ..Default::default()
        });
        session.set_zoom(-5);
        assert_eq!(session.active_project().zoom, 25);
        session.set_zoom(-5);
        assert_eq!(session.active_project().zoom, 25);

        session.update_active(ProjectPatch {
            zoom: Some(9000),
            ..Default::default()
        });
        assert_eq!(session.active_project().zoom, 200);
    }

    #[test]
    fn four_rotations_return_to_start() {
        let mut session = Session::new();
        let id = session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 1);
        for expected in [90, 180, 270, 0] {
            session.rotate_item(ItemKind::Pedal, id);
            assert_eq!(session.active_project().board_pedals[0].rotation, expected);
        }
    }

    #[test]
    fn create_respects_cap() {
        let mut session = Session::new();
        for i in 0..MAX_PROJECTS as i64 + 3 {
            session.create_project(1000 + i);
        }
        assert_eq!(session.projects.len(), MAX_PROJECTS);
    }

    #[test]
    fn create_activates_new_project() {
        let mut session = Session::new();
        session.create_project(1000);
        assert_eq!(session.active, ActiveTarget::Saved(session.projects[0].id));
        assert_eq!(session.projects[0].name, "BOARD 1");
        assert_eq!(session.projects[0].zoom, 100);
    }

    #[test]
    fn deleting_last_project_returns_to_empty_scratch() {
        let mut session = Session::new();
        session.create_project(1000);
        let id = session.projects[0].id;
        session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 2000);

        session.delete_project(id);
        assert_eq!(session.active, ActiveTarget::Scratch);
        assert!(session.projects.is_empty());
        assert!(session.active_project().board_pedals.is_empty());
        assert!(session.active_project().selected_boards.is_empty());
    }

    #[test]
    fn deleting_non_active_project_keeps_activation() {
        let mut session = Session::new();
        session.create_project(1000);
        session.create_project(2000);
        let first = session.projects[0].id;
        let second = session.projects[1].id;
        assert_eq!(session.active, ActiveTarget::Saved(second));

        session.delete_project(first);
        assert_eq!(session.active, ActiveTarget::Saved(second));
    }

    #[test]
    fn deleting_active_project_falls_back_to_first_remaining() {
        let mut session = Session::new();
        session.create_project(1000);
        session.create_project(2000);
        let first = session.projects[0].id;
        let second = session.projects[1].id;

        session.delete_project(second);
        assert_eq!(session.active, ActiveTarget::Saved(first));
    }

    #[test]
    fn add_appends_with_fresh_instance_id() {
        let mut session = Session::new();
        let a = session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 42);
        // A stale clock must still produce a fresh id.
        let b = session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 42);
        let pedals = &session.active_project().board_pedals;
        assert_eq!(pedals.len(), 2);
        assert_ne!(a, b);
        assert_eq!(pedals[0].x, CENTER.x);
        assert_eq!(pedals[0].rotation, 0);
    }

    #[test]
    fn instance_ids_are_unique_across_both_categories() {
        let mut session = Session::new();
        let a = session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 7);
        let b = session.add_item(ItemKind::Board, catalog_item("PT-2"), CENTER, 7);
        assert_ne!(a, b);
    }

    #[test]
    fn custom_item_requires_numeric_dimensions() {
        let mut session = Session::new();
        let mut draft = CustomDraft {
            kind: ItemKind::Pedal,
            name: String::new(),
            width: String::new(),
            depth: "120".to_string(),
            color: "#3b82f6".to_string(),
        };
        assert!(session.add_custom(&draft, CENTER, 1).is_none());
        assert!(session.active_project().board_pedals.is_empty());

        draft.width = "70".to_string();
        assert!(session.add_custom(&draft, CENTER, 1).is_some());
        let placed = &session.active_project().board_pedals[0];
        assert_eq!(placed.item.name, "Custom pedal");
        assert_eq!(placed.item.brand, "Custom");
        assert_eq!(placed.item.draw, 0.0);
        assert_eq!(placed.item.weight, 0.0);
    }

    #[test]
    fn rename_upper_cases() {
        let mut session = Session::new();
        session.create_project(1000);
        let id = session.projects[0].id;
        session.commit_rename(id, "my board");
        assert_eq!(session.projects[0].name, "MY BOARD");
    }

    #[test]
    fn remove_item_filters_by_instance() {
        let mut session = Session::new();
        let a = session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 1);
        let b = session.add_item(ItemKind::Pedal, catalog_item("CE-2"), CENTER, 2);
        session.remove_item(ItemKind::Pedal, a);
        let pedals = &session.active_project().board_pedals;
        assert_eq!(pedals.len(), 1);
        assert_eq!(pedals[0].instance_id, b);
    }

    #[test]
    fn update_active_only_touches_named_fields() {
        let mut session = Session::new();
        session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 1);
        session.update_active(ProjectPatch {
            zoom: Some(150),
            ..Default::default()
        });
        assert_eq!(session.active_project().board_pedals.len(), 1);
        assert_eq!(session.active_project().zoom, 150);
    }

    #[test]
    fn move_element_splices() {
        let mut v = vec![1, 2, 3, 4];
        move_element(&mut v, 0, 2);
        assert_eq!(v, vec![2, 3, 1, 4]);
        move_element(&mut v, 3, 0);
        assert_eq!(v, vec![4, 2, 3, 1]);
        // Out-of-range indices are ignored.
        move_element(&mut v, 9, 0);
        assert_eq!(v, vec![4, 2, 3, 1]);
    }

    #[test]
    fn reorder_keeps_activation() {
        let mut session = Session::new();
        session.create_project(1000);
        session.create_project(2000);
        session.create_project(3000);
        let active = session.active;
        session.move_project(2, 0);
        assert_eq!(session.active, active);
        assert_eq!(session.projects[0].name, "BOARD 3");
    }

    #[test]
    fn clear_active_empties_both_sets() {
        let mut session = Session::new();
        session.add_item(ItemKind::Pedal, catalog_item("DS-1"), CENTER, 1);
        session.add_item(ItemKind::Board, catalog_item("PT-2"), CENTER, 2);
        session.clear_active();
        assert!(session.active_project().board_pedals.is_empty());
        assert!(session.active_project().selected_boards.is_empty());
    }
}
