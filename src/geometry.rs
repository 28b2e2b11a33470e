//! Stage Geometry
//!
//! Pure math for the canvas: stage insets, item footprints and the
//! rotation-aware drag-bounds clamp.

use crate::config::{PX_PER_MM, SIDEBAR_WIDTH, TOP_BAR_HEIGHT};

/// A rendered size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// A point in stage coordinates (pre-zoom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible stage area: the viewport minus the sidebar and the tab strip.
pub fn stage_size(viewport: Size) -> Size {
    Size::new(viewport.w - SIDEBAR_WIDTH, viewport.h - TOP_BAR_HEIGHT)
}

/// Geometric center of the visible stage. New items are placed here.
pub fn stage_center(viewport: Size) -> Point {
    let stage = stage_size(viewport);
    Point::new(stage.w / 2.0, stage.h / 2.0)
}

/// Deterministic rendered box for an item, derived from its declared
/// physical size rather than image pixels. Drag clamping stays stable
/// whether or not a photo ever loads.
pub fn footprint_px(width_mm: f64, depth_mm: f64) -> Size {
    Size::new(width_mm * PX_PER_MM, depth_mm * PX_PER_MM)
}

/// Clamp a candidate item center so its rotated, zoom-scaled bounding box
/// stays fully inside the stage.
///
/// Rotation at odd multiples of 90 degrees swaps effective width/height.
/// Without a cached size the candidate passes through unclamped — sizes
/// arrive asynchronously and a first frame without one is tolerated.
pub fn clamp_to_stage(
    size: Option<Size>,
    rotation: i32,
    zoom: i32,
    stage: Size,
    candidate: Point,
) -> Point {
    let Some(size) = size else {
        return candidate;
    };

    let vertical = (rotation / 90) % 2 != 0;
    let scale = f64::from(zoom) / 100.0;
    let w = if vertical { size.h } else { size.w } * scale;
    let h = if vertical { size.w } else { size.h } * scale;

    Point {
        x: candidate.x.min(stage.w - w / 2.0).max(w / 2.0),
        y: candidate.y.min(stage.h - h / 2.0).max(h / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGE: Size = Size { w: 1000.0, h: 800.0 };

    #[test]
    fn clamp_keeps_item_inside_stage() {
        let size = Some(Size::new(100.0, 50.0));
        let clamped = clamp_to_stage(size, 0, 100, STAGE, Point::new(0.0, 0.0));
        assert_eq!(clamped, Point::new(50.0, 25.0));

        let clamped = clamp_to_stage(size, 0, 100, STAGE, Point::new(2000.0, 2000.0));
        assert_eq!(clamped, Point::new(950.0, 775.0));
    }

    #[test]
    fn clamp_swaps_axes_at_quarter_turns() {
        let size = Some(Size::new(100.0, 50.0));
        let clamped = clamp_to_stage(size, 90, 100, STAGE, Point::new(0.0, 0.0));
        assert_eq!(clamped, Point::new(25.0, 50.0));

        let clamped = clamp_to_stage(size, 270, 100, STAGE, Point::new(0.0, 0.0));
        assert_eq!(clamped, Point::new(25.0, 50.0));

        // A half turn keeps the original axes.
        let clamped = clamp_to_stage(size, 180, 100, STAGE, Point::new(0.0, 0.0));
        assert_eq!(clamped, Point::new(50.0, 25.0));
    }

    #[test]
    fn clamp_scales_with_zoom() {
        let size = Some(Size::new(100.0, 50.0));
        let clamped = clamp_to_stage(size, 0, 200, STAGE, Point::new(0.0, 0.0));
        assert_eq!(clamped, Point::new(100.0, 50.0));
    }

    #[test]
    fn missing_size_passes_through() {
        let candidate = Point::new(-40.0, 9999.0);
        let clamped = clamp_to_stage(None, 0, 100, STAGE, candidate);
        assert_eq!(clamped, candidate);
    }

    #[test]
    fn interior_candidate_is_untouched() {
        let size = Some(Size::new(100.0, 50.0));
        let candidate = Point::new(500.0, 400.0);
        assert_eq!(clamp_to_stage(size, 90, 100, STAGE, candidate), candidate);
    }

    #[test]
    fn footprint_uses_fixed_scale() {
        let fp = footprint_px(70.0, 120.0);
        assert_eq!(fp, Size::new(105.0, 180.0));
    }

    #[test]
    fn stage_subtracts_fixed_insets() {
        let stage = stage_size(Size::new(1320.0, 856.0));
        assert_eq!(stage, Size::new(1000.0, 800.0));
        let center = stage_center(Size::new(1320.0, 856.0));
        assert_eq!(center, Point::new(500.0, 400.0));
    }
}
