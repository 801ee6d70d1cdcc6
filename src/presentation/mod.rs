//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Color palettes.
pub mod theme;
/// UI screens.
pub mod ui;
/// Panel renderers.
pub mod views;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
