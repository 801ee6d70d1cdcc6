//! Stateless view renderers.
//!
//! Each function maps the data of one panel (or its loading/error marker)
//! to a [`Fragment`] that fully replaces what the panel shows.

mod country;
mod department;
pub mod format;
mod region;

pub use country::country_panel;
pub use department::{department_detail_panel, department_list};
pub use region::{region_info_panel, region_list};

use crate::application::Load;

/// Emphasis of a placeholder message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Waiting or nothing to show.
    Muted,
    /// A fetch failed.
    Warning,
}

/// Label/value pair in a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Titled block of text with labelled fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub fields: Vec<Field>,
    /// Picture reference: a URL for flags, an asset path for departments.
    pub image: Option<String>,
}

impl Card {
    /// Returns the value of the field with `label`.
    #[must_use]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Identifier the row activates.
    pub key: u32,
    pub title: String,
    pub subtitle: Option<String>,
    pub active: bool,
}

/// Rendered panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Placeholder { tone: Tone, message: String },
    Card(Card),
    List(Vec<ListRow>),
}

impl Fragment {
    fn muted(message: impl Into<String>) -> Self {
        Self::Placeholder {
            tone: Tone::Muted,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self::Placeholder {
            tone: Tone::Warning,
            message: message.into(),
        }
    }

    /// Keys of the rows, in display order. Empty for non-list fragments.
    #[must_use]
    pub fn row_keys(&self) -> Vec<u32> {
        match self {
            Self::List(rows) => rows.iter().map(|r| r.key).collect(),
            _ => Vec::new(),
        }
    }
}

/// Converts a non-ready load into its placeholder, handing back ready data.
fn placeholder_or<T>(load: Load<T>) -> Result<T, Fragment> {
    match load {
        Load::Ready(value) => Ok(value),
        Load::Idle(msg) | Load::Loading(msg) => Err(Fragment::muted(msg)),
        Load::Failed(msg) => Err(Fragment::warning(msg)),
    }
}
