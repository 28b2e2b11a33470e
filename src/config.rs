//! Application Constants
//!
//! Layout insets, caps and remote endpoints in one place.

/// localStorage key for the persisted session blob.
pub const STORAGE_KEY: &str = "guitar-sandbox-data";

/// Maximum number of saved projects. The scratch board does not count.
pub const MAX_PROJECTS: usize = 8;

/// Fixed sidebar width in CSS pixels.
pub const SIDEBAR_WIDTH: f64 = 320.0;
/// Fixed tab-strip height in CSS pixels.
pub const TOP_BAR_HEIGHT: f64 = 56.0;

/// Zoom percentage bounds and button step.
pub const ZOOM_MIN: i32 = 25;
pub const ZOOM_MAX: i32 = 200;
pub const ZOOM_STEP: i32 = 5;

/// Rendered pixels per millimetre of declared item size.
/// Keeps the fallback rectangle (and therefore drag clamping) deterministic.
pub const PX_PER_MM: f64 = 1.5;

/// Read-only catalog endpoint (PostgREST-style table store).
pub const CATALOG_URL: &str = match option_env!("CATALOG_URL") {
    Some(url) => url,
    None => "https://catalog.makeyourboard.app",
};
pub const CATALOG_ANON_KEY: &str = match option_env!("CATALOG_ANON_KEY") {
    Some(key) => key,
    None => "public-anon-key",
};
/// Rows per catalog page. A short page terminates pagination.
pub const CATALOG_PAGE_SIZE: usize = 1000;

/// Best-effort country lookup for the buy-online links.
pub const GEO_URL: &str = "https://ipapi.co/json/";
