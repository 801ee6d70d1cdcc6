//! Country → regions → departments → detail selection cascade.

mod controller;
mod messages;
mod state;

pub use controller::apply;
pub use messages::{CascadeEvent, Command};
pub use state::{CascadePhase, Load, RequestTicket, SelectionState};
