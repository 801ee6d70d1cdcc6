//! Department picture state.

use std::sync::Arc;

use image::DynamicImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use ratatui_image::picker::{Capability, Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{Resize, StatefulImage};

use crate::domain::entities::DepartmentId;

/// Encoded picture of one department.
pub struct DepartmentPicture {
    department_id: DepartmentId,
    protocol: StatefulProtocol,
}

impl DepartmentPicture {
    #[must_use]
    pub const fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Cells the picture takes when fitted into `area`.
    #[must_use]
    pub fn fitted_area(&self, area: Rect) -> Rect {
        let size = self.protocol.size_for(Resize::Fit(None), area);
        let x = area.x + area.width.saturating_sub(size.width) / 2;
        Rect::new(x, area.y, size.width.min(area.width), size.height.min(area.height))
    }
}

impl std::fmt::Debug for DepartmentPicture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepartmentPicture")
            .field("department_id", &self.department_id)
            .finish_non_exhaustive()
    }
}

/// Holds the terminal picker and at most one department picture.
pub struct PictureManager {
    picker: Picker,
    current: Option<DepartmentPicture>,
}

impl PictureManager {
    /// Queries the terminal for graphics support. Call after entering raw mode.
    #[must_use]
    pub fn new() -> Self {
        let mut picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::halfblocks());

        let caps = picker.capabilities();
        let has_sixel = caps.iter().any(|c| matches!(c, Capability::Sixel));
        let has_kitty = caps.iter().any(|c| matches!(c, Capability::Kitty));

        if has_sixel && !has_kitty && picker.protocol_type() == ProtocolType::Halfblocks {
            picker.set_protocol_type(ProtocolType::Sixel);
        }

        Self {
            picker,
            current: None,
        }
    }

    #[must_use]
    pub fn halfblocks() -> Self {
        Self {
            picker: Picker::halfblocks(),
            current: None,
        }
    }

    #[must_use]
    pub fn protocol_type(&self) -> ProtocolType {
        self.picker.protocol_type()
    }

    /// Replaces the shown picture.
    pub fn show(&mut self, department_id: DepartmentId, image: &Arc<DynamicImage>) {
        let protocol = self.picker.new_resize_protocol((**image).clone());
        self.current = Some(DepartmentPicture {
            department_id,
            protocol,
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drops the picture unless it belongs to `department_id`.
    pub fn retain(&mut self, department_id: Option<DepartmentId>) {
        if self.shown_department() != department_id {
            self.current = None;
        }
    }

    #[must_use]
    pub fn shown_department(&self) -> Option<DepartmentId> {
        self.current.as_ref().map(DepartmentPicture::department_id)
    }

    pub fn current_mut(&mut self) -> Option<&mut DepartmentPicture> {
        self.current.as_mut()
    }
}

impl Default for PictureManager {
    fn default() -> Self {
        Self::halfblocks()
    }
}

/// Draws a [`DepartmentPicture`] centered horizontally.
#[derive(Debug, Default)]
pub struct PictureView;

impl StatefulWidget for PictureView {
    type State = DepartmentPicture;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let target = state.fitted_area(area);
        StatefulImage::default()
            .resize(Resize::Fit(None))
            .render(target, buf, &mut state.protocol);
    }
}
