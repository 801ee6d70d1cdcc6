//! UI screens.

mod app;
mod backend;
mod explorer_screen;

pub use app::App;
pub use backend::{Action, Backend, BackendCommand};
pub use explorer_screen::{ExplorerKeyResult, ExplorerScreen, ExplorerScreenState};
