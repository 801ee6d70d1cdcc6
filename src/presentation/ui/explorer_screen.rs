use std::sync::Arc;

use crossterm::event::KeyEvent;
use image::DynamicImage;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, ListState, StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::cascade::apply;
use crate::application::{CascadeEvent, SelectionState};
use crate::domain::entities::{DepartmentId, RegionId, ThemeMode};
use crate::presentation::events::{EventHandler, Focus, KeyAction};
use crate::presentation::theme::Theme;
use crate::presentation::ui::backend::BackendCommand;
use crate::presentation::views::{
    country_panel, department_detail_panel, department_list, region_info_panel, region_list,
};
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, FragmentView, HeaderBar, HeaderBarStyle, PictureManager,
    PictureView, SearchInput,
};

const FLAG_CAPTION: &str = "Bandera (f)";
const DETAIL_ROW_PERCENT: u16 = 45;
const PICTURE_WIDTH_PERCENT: u16 = 35;

/// Outcome of a key press the app loop must act on.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerKeyResult {
    Continue,
    Quit,
    Dispatch(CascadeEvent),
    ThemeToggled(ThemeMode),
    OpenFlag(String),
}

pub struct ExplorerScreenState {
    selection: SelectionState,
    focus: Focus,
    search: SearchInput,
    region_cursor: ListState,
    department_cursor: ListState,
    theme: Theme,
    pictures: PictureManager,
    picture_for: Option<DepartmentId>,
}

impl ExplorerScreenState {
    #[must_use]
    pub fn new(theme: Theme, pictures: PictureManager) -> Self {
        Self {
            selection: SelectionState::new(),
            focus: Focus::default(),
            search: SearchInput::new(" Buscar región ").placeholder("Escribe para filtrar..."),
            region_cursor: ListState::default(),
            department_cursor: ListState::default(),
            theme,
            pictures,
            picture_for: None,
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.search.set_focused(focus == Focus::Search);
    }

    /// Flips light/dark and returns the new mode for persisting.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme.mode
    }

    /// Feeds `event` through the cascade and returns the work it requires.
    pub fn apply(&mut self, event: CascadeEvent) -> Vec<BackendCommand> {
        if matches!(event, CascadeEvent::RegionActivated(_)) {
            self.department_cursor.select(None);
        }

        let (selection, commands) = apply(std::mem::take(&mut self.selection), event);
        self.selection = selection;
        self.sync_cursors();

        let mut work: Vec<BackendCommand> =
            commands.into_iter().map(BackendCommand::Cascade).collect();
        work.extend(self.picture_request());
        work
    }

    /// Shows a decoded picture if it still belongs to the selected department.
    pub fn picture_loaded(&mut self, department_id: DepartmentId, image: &Arc<DynamicImage>) {
        if self.selection.selected_department_id() == Some(department_id) {
            self.pictures.show(department_id, image);
        } else {
            debug!(%department_id, "Dropping picture of deselected department");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ExplorerKeyResult {
        match EventHandler::map_key(&key, self.focus) {
            KeyAction::Quit => ExplorerKeyResult::Quit,
            KeyAction::FocusNext => {
                self.set_focus(self.focus.next());
                ExplorerKeyResult::Continue
            }
            KeyAction::FocusSearch => {
                self.set_focus(Focus::Search);
                ExplorerKeyResult::Continue
            }
            KeyAction::LeaveSearch => {
                self.set_focus(Focus::Regions);
                ExplorerKeyResult::Continue
            }
            KeyAction::CursorUp => {
                self.move_cursor(false);
                ExplorerKeyResult::Continue
            }
            KeyAction::CursorDown => {
                self.move_cursor(true);
                ExplorerKeyResult::Continue
            }
            KeyAction::Activate => self.activate(),
            KeyAction::ToggleTheme => ExplorerKeyResult::ThemeToggled(self.toggle_theme()),
            KeyAction::OpenFlag => self
                .selection
                .country()
                .ready()
                .and_then(|country| country.flag_url())
                .map_or(ExplorerKeyResult::Continue, |url| {
                    ExplorerKeyResult::OpenFlag(url.to_string())
                }),
            KeyAction::SearchInput(c) => {
                self.search.input_char(c);
                self.filter_changed()
            }
            KeyAction::SearchBackspace => {
                if self.search.backspace() {
                    self.filter_changed()
                } else {
                    ExplorerKeyResult::Continue
                }
            }
            KeyAction::Ignored => ExplorerKeyResult::Continue,
        }
    }

    fn filter_changed(&self) -> ExplorerKeyResult {
        ExplorerKeyResult::Dispatch(CascadeEvent::FilterChanged(self.search.value().to_string()))
    }

    fn visible_region_ids(&self) -> Vec<RegionId> {
        self.selection
            .visible_regions()
            .ready()
            .map(|regions| regions.iter().map(|r| r.id()).collect())
            .unwrap_or_default()
    }

    fn department_ids(&self) -> Vec<DepartmentId> {
        self.selection
            .departments()
            .ready()
            .map(|deps| deps.iter().map(|d| d.id()).collect())
            .unwrap_or_default()
    }

    fn activate(&self) -> ExplorerKeyResult {
        let event = match self.focus {
            Focus::Regions => self
                .region_cursor
                .selected()
                .and_then(|i| self.visible_region_ids().get(i).copied())
                .map(CascadeEvent::RegionActivated),
            Focus::Departments => self
                .department_cursor
                .selected()
                .and_then(|i| self.department_ids().get(i).copied())
                .map(CascadeEvent::DepartmentActivated),
            Focus::Search => None,
        };
        event.map_or(ExplorerKeyResult::Continue, ExplorerKeyResult::Dispatch)
    }

    fn move_cursor(&mut self, down: bool) {
        let len = match self.focus {
            Focus::Regions => self.visible_region_ids().len(),
            Focus::Departments => self.department_ids().len(),
            Focus::Search => return,
        };
        let cursor = if self.focus == Focus::Regions {
            &mut self.region_cursor
        } else {
            &mut self.department_cursor
        };
        if len == 0 {
            return;
        }
        let current = cursor.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        cursor.select(Some(next));
    }

    fn sync_cursors(&mut self) {
        let region_len = self.visible_region_ids().len();
        clamp_cursor(&mut self.region_cursor, region_len);
        let department_len = self.department_ids().len();
        clamp_cursor(&mut self.department_cursor, department_len);
    }

    fn picture_request(&mut self) -> Option<BackendCommand> {
        let selected = self.selection.selected_department_id();
        if selected == self.picture_for {
            return None;
        }
        self.picture_for = selected;
        self.pictures.retain(selected);

        let department = self.selection.selected_department()?;
        Some(BackendCommand::LoadDepartmentImage {
            department_id: department.id(),
            image_key: department.image_key(),
        })
    }
}

fn clamp_cursor(cursor: &mut ListState, len: usize) {
    if len == 0 {
        cursor.select(None);
    } else {
        cursor.select(Some(cursor.selected().unwrap_or(0).min(len - 1)));
    }
}

pub struct ExplorerScreen;

impl StatefulWidget for ExplorerScreen {
    type State = ExplorerScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Block::default().style(state.theme.base_style).render(area, buf);

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(crate::NAME, crate::VERSION)
            .mode(state.theme.mode)
            .style(HeaderBarStyle::from_theme(&state.theme))
            .render(header_area, buf);

        if state.selection.detail_row_visible() {
            let [top, detail] = Layout::vertical([
                Constraint::Percentage(100 - DETAIL_ROW_PERCENT),
                Constraint::Percentage(DETAIL_ROW_PERCENT),
            ])
            .areas(body_area);
            render_overview(state, top, buf);
            render_detail_row(state, detail, buf);
        } else {
            render_overview(state, body_area, buf);
        }

        let info = region_count_info(state);
        FooterBar::new(state.focus)
            .right_info(info.as_deref())
            .style(FooterBarStyle::from_theme(&state.theme))
            .render(footer_area, buf);
    }
}

fn region_count_info(state: &ExplorerScreenState) -> Option<String> {
    let visible = state.selection.visible_regions();
    let total = state.selection.regions().ready()?.len();
    let shown = visible.ready()?.len();
    Some(format!("{shown}/{total} regiones "))
}

fn render_overview(state: &mut ExplorerScreenState, area: Rect, buf: &mut Buffer) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    let [country_area, region_info_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(left);
    let [search_area, regions_area, departments_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Percentage(50),
        Constraint::Min(3),
    ])
    .areas(right);

    let theme = state.theme;
    let selection = &state.selection;
    let mut unused = ListState::default();

    let country = country_panel(selection.country().borrowed());
    FragmentView::new(&country, "País", &theme)
        .image_caption(FLAG_CAPTION)
        .render(country_area, buf, &mut unused);

    let region_info = region_info_panel(selection.region_info());
    FragmentView::new(&region_info, "Región", &theme).render(region_info_area, buf, &mut unused);

    state.search.themed(&theme).render(search_area, buf);

    let regions = region_list(selection.visible_regions(), selection.selected_region_id());
    FragmentView::new(&regions, "Regiones", &theme)
        .focused(state.focus == Focus::Regions)
        .render(regions_area, buf, &mut state.region_cursor);

    let departments = department_list(
        selection.departments().borrowed(),
        selection.selected_department_id(),
    );
    FragmentView::new(&departments, "Departamentos", &theme)
        .focused(state.focus == Focus::Departments)
        .render(departments_area, buf, &mut state.department_cursor);
}

fn render_detail_row(state: &mut ExplorerScreenState, area: Rect, buf: &mut Buffer) {
    let theme = state.theme;
    let detail = department_detail_panel(state.selection.detail().borrowed());
    let mut unused = ListState::default();

    let selected = state.selection.selected_department_id();
    let picture = state
        .pictures
        .current_mut()
        .filter(|p| Some(p.department_id()) == selected);

    let Some(picture) = picture else {
        FragmentView::new(&detail, "Detalle del departamento", &theme)
            .render(area, buf, &mut unused);
        return;
    };

    let [card_area, picture_area] = Layout::horizontal([
        Constraint::Percentage(100 - PICTURE_WIDTH_PERCENT),
        Constraint::Percentage(PICTURE_WIDTH_PERCENT),
    ])
    .areas(area);
    FragmentView::new(&detail, "Detalle del departamento", &theme)
        .render(card_area, buf, &mut unused);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style)
        .style(theme.base_style)
        .title(" Imagen ");
    let inner = block.inner(picture_area);
    block.render(picture_area, buf);
    PictureView.render(inner, buf, picture);
}
