//! Light and dark terminal palettes.

pub mod color;
mod palette;

pub use palette::Theme;
