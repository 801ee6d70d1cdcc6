//! Events fed into the cascade and commands it emits.

use crate::application::cascade::state::RequestTicket;
use crate::domain::entities::{Country, Department, DepartmentId, Region, RegionId};
use crate::domain::errors::FetchError;

/// Input to the cascade: user intents and fetch completions.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeEvent {
    /// Application start; requests country and regions together.
    Started,
    CountryLoaded(Result<Country, FetchError>),
    RegionsLoaded(Result<Vec<Region>, FetchError>),
    /// Search-box text changed.
    FilterChanged(String),
    RegionActivated(RegionId),
    DepartmentsLoaded {
        ticket: RequestTicket,
        region_id: RegionId,
        result: Result<Vec<Department>, FetchError>,
    },
    DepartmentActivated(DepartmentId),
    DepartmentDetailLoaded {
        ticket: RequestTicket,
        department_id: DepartmentId,
        result: Result<Department, FetchError>,
    },
}

/// Fetch the host must perform; its completion comes back as a
/// [`CascadeEvent`] carrying the same ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchCountry,
    FetchRegions,
    FetchDepartments {
        ticket: RequestTicket,
        region_id: RegionId,
    },
    FetchDepartmentDetail {
        ticket: RequestTicket,
        department_id: DepartmentId,
    },
}
