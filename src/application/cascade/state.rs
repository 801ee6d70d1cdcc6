//! Explicit selection state mutated only by the cascade controller.

use crate::domain::entities::{Country, Department, DepartmentId, Region, RegionId};
use crate::domain::search::filter_regions;

pub(crate) const COUNTRY_LOADING: &str = "Cargando datos de Colombia...";
pub(crate) const COUNTRY_FAILED: &str = "No se pudo cargar la información del país.";
pub(crate) const REGIONS_LOADING: &str = "Cargando regiones...";
pub(crate) const REGIONS_FAILED: &str = "No se pudieron cargar las regiones.";
pub(crate) const REGION_INFO_LOADING: &str = "Cargando...";
pub(crate) const REGION_INFO_PROMPT: &str = "Selecciona una región para ver su información.";
pub(crate) const DEPARTMENTS_WAITING: &str = "Esperando región...";
pub(crate) const DEPARTMENTS_LOADING: &str = "Cargando departamentos...";
pub(crate) const DEPARTMENTS_FAILED: &str = "No se pudieron cargar los departamentos de la región.";
pub(crate) const DETAIL_WAITING: &str = "Selecciona un departamento";
pub(crate) const DETAIL_LOADING: &str = "Cargando detalle del departamento...";

/// Load status of one panel's data. Non-ready variants carry the message
/// the panel shows in place of content.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    /// Nothing requested yet.
    Idle(&'static str),
    /// Request in flight.
    Loading(&'static str),
    /// Data available.
    Ready(T),
    /// Request failed; shown as a warning placeholder.
    Failed(&'static str),
}

impl<T> Load<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Returns whether the request has resolved, successfully or not.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the payload, keeping the status.
    #[must_use]
    pub fn borrowed(&self) -> Load<&T> {
        match self {
            Self::Idle(msg) => Load::Idle(msg),
            Self::Loading(msg) => Load::Loading(msg),
            Self::Ready(value) => Load::Ready(value),
            Self::Failed(msg) => Load::Failed(msg),
        }
    }
}

/// Tag attached to a request so its response can be matched against the
/// selection that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestTicket(pub u64);

impl std::fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position in the country → regions → departments → detail cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadePhase {
    Idle,
    RegionsLoading,
    RegionsFailed,
    RegionsReady,
    RegionSelected,
    DepartmentsLoading,
    DepartmentsFailed,
    DepartmentsReady,
    DepartmentSelected,
    DepartmentDetailLoading,
    DepartmentDetailReady,
}

/// Everything the cascade knows about the current session.
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub(crate) country: Load<Country>,
    pub(crate) regions: Load<Vec<Region>>,
    pub(crate) filter: String,
    pub(crate) selected_region: Option<RegionId>,
    pub(crate) departments: Load<Vec<Department>>,
    pub(crate) selected_department: Option<Department>,
    pub(crate) detail: Load<Department>,
    pub(crate) departments_ticket: Option<RequestTicket>,
    pub(crate) detail_ticket: Option<RequestTicket>,
    pub(crate) ticket_seq: u64,
}

impl SelectionState {
    /// Creates the pre-startup state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            country: Load::Idle(COUNTRY_LOADING),
            regions: Load::Idle(REGIONS_LOADING),
            filter: String::new(),
            selected_region: None,
            departments: Load::Idle(DEPARTMENTS_WAITING),
            selected_department: None,
            detail: Load::Idle(DETAIL_WAITING),
            departments_ticket: None,
            detail_ticket: None,
            ticket_seq: 0,
        }
    }

    pub(crate) fn issue_ticket(&mut self) -> RequestTicket {
        self.ticket_seq += 1;
        RequestTicket(self.ticket_seq)
    }

    #[must_use]
    pub const fn country(&self) -> &Load<Country> {
        &self.country
    }

    /// Full region list as loaded, never filtered.
    #[must_use]
    pub const fn regions(&self) -> &Load<Vec<Region>> {
        &self.regions
    }

    /// Current search-box text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Regions matching the current filter, in server order.
    #[must_use]
    pub fn visible_regions(&self) -> Load<Vec<&Region>> {
        match &self.regions {
            Load::Ready(list) => Load::Ready(filter_regions(list, &self.filter)),
            Load::Idle(msg) => Load::Idle(msg),
            Load::Loading(msg) => Load::Loading(msg),
            Load::Failed(msg) => Load::Failed(msg),
        }
    }

    #[must_use]
    pub const fn selected_region_id(&self) -> Option<RegionId> {
        self.selected_region
    }

    /// The selected region object, looked up in the full list.
    #[must_use]
    pub fn selected_region(&self) -> Option<&Region> {
        let id = self.selected_region?;
        self.find_region(id)
    }

    pub(crate) fn find_region(&self, id: RegionId) -> Option<&Region> {
        self.regions.ready()?.iter().find(|r| r.id() == id)
    }

    /// What the region-info panel should show.
    #[must_use]
    pub fn region_info(&self) -> Load<&Region> {
        if let Some(region) = self.selected_region() {
            return Load::Ready(region);
        }
        if self.country.is_settled() && self.regions.is_settled() {
            Load::Idle(REGION_INFO_PROMPT)
        } else {
            Load::Loading(REGION_INFO_LOADING)
        }
    }

    #[must_use]
    pub const fn departments(&self) -> &Load<Vec<Department>> {
        &self.departments
    }

    /// Summary object of the selected department.
    #[must_use]
    pub const fn selected_department(&self) -> Option<&Department> {
        self.selected_department.as_ref()
    }

    #[must_use]
    pub fn selected_department_id(&self) -> Option<DepartmentId> {
        self.selected_department.as_ref().map(Department::id)
    }

    pub(crate) fn find_department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.ready()?.iter().find(|d| d.id() == id)
    }

    #[must_use]
    pub const fn detail(&self) -> &Load<Department> {
        &self.detail
    }

    /// The bottom detail row is shown only while a department is selected.
    #[must_use]
    pub const fn detail_row_visible(&self) -> bool {
        self.selected_department.is_some()
    }

    /// Derives the cascade phase from the current data.
    #[must_use]
    pub fn phase(&self) -> CascadePhase {
        match &self.regions {
            Load::Idle(_) => return CascadePhase::Idle,
            Load::Loading(_) => return CascadePhase::RegionsLoading,
            Load::Failed(_) => return CascadePhase::RegionsFailed,
            Load::Ready(_) => {}
        }

        if self.selected_region.is_none() {
            return CascadePhase::RegionsReady;
        }

        match &self.departments {
            Load::Idle(_) => return CascadePhase::RegionSelected,
            Load::Loading(_) => return CascadePhase::DepartmentsLoading,
            Load::Failed(_) => return CascadePhase::DepartmentsFailed,
            Load::Ready(_) => {}
        }

        if self.selected_department.is_none() {
            return CascadePhase::DepartmentsReady;
        }

        match &self.detail {
            Load::Loading(_) => CascadePhase::DepartmentDetailLoading,
            Load::Ready(_) | Load::Failed(_) => CascadePhase::DepartmentDetailReady,
            Load::Idle(_) => CascadePhase::DepartmentSelected,
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
