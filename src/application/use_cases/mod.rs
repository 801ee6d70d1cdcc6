//! Use case implementations.

mod theme_preference_use_case;

pub use theme_preference_use_case::ThemePreferenceUseCase;
