mod department_picture;
mod footer_bar;
mod header_bar;
mod panel;
mod search_input;

pub use department_picture::{DepartmentPicture, PictureManager, PictureView};
pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint, hints_for};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use panel::FragmentView;
pub use search_input::{SearchInput, ThemedSearchInput};
