//! Application layer with the selection cascade and use cases.

/// Selection cascade state machine.
pub mod cascade;
/// Use case implementations.
pub mod use_cases;

pub use cascade::{CascadeEvent, CascadePhase, Command, Load, RequestTicket, SelectionState};
pub use use_cases::ThemePreferenceUseCase;
