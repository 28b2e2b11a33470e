//! UI Components
//!
//! Reusable Leptos components.

mod board_canvas;
mod canvas_item;
mod confirm_button;
mod custom_item_form;
mod details_panel;
mod search_dropdown;
mod sidebar;
mod tab_strip;

pub use board_canvas::BoardCanvas;
pub use confirm_button::ConfirmButton;
pub use sidebar::Sidebar;
pub use tab_strip::TabStrip;
