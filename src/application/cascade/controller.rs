//! Cascade transitions.
//!
//! [`apply`] takes the current [`SelectionState`] and one [`CascadeEvent`]
//! and returns the next state plus the fetches to start. It performs no I/O,
//! so every transition can be exercised without a terminal or network.

use tracing::{debug, info, warn};

use super::messages::{CascadeEvent, Command};
use super::state::{
    COUNTRY_FAILED, COUNTRY_LOADING, DEPARTMENTS_FAILED, DEPARTMENTS_LOADING, DETAIL_LOADING,
    DETAIL_WAITING, Load, REGIONS_FAILED, REGIONS_LOADING, SelectionState,
};
use crate::domain::entities::{DepartmentId, RegionId};

/// Applies one event to the state.
#[must_use]
pub fn apply(mut state: SelectionState, event: CascadeEvent) -> (SelectionState, Vec<Command>) {
    let commands = match event {
        CascadeEvent::Started => start(&mut state),
        CascadeEvent::CountryLoaded(result) => {
            state.country = match result {
                Ok(country) => {
                    info!(country = %country.name(), "Country loaded");
                    Load::Ready(country)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load country");
                    Load::Failed(COUNTRY_FAILED)
                }
            };
            Vec::new()
        }
        CascadeEvent::RegionsLoaded(result) => {
            state.regions = match result {
                Ok(regions) => {
                    info!(count = regions.len(), "Regions loaded");
                    Load::Ready(regions)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load regions");
                    Load::Failed(REGIONS_FAILED)
                }
            };
            Vec::new()
        }
        CascadeEvent::FilterChanged(text) => {
            state.filter = text;
            Vec::new()
        }
        CascadeEvent::RegionActivated(region_id) => select_region(&mut state, region_id),
        CascadeEvent::DepartmentsLoaded {
            ticket,
            region_id,
            result,
        } => {
            if state.departments_ticket != Some(ticket) {
                debug!(%ticket, %region_id, "Discarding stale department list");
                return (state, Vec::new());
            }
            state.departments = match result {
                Ok(departments) => {
                    debug!(%region_id, count = departments.len(), "Departments loaded");
                    Load::Ready(departments)
                }
                Err(e) => {
                    warn!(%region_id, error = %e, "Failed to load departments");
                    Load::Failed(DEPARTMENTS_FAILED)
                }
            };
            Vec::new()
        }
        CascadeEvent::DepartmentActivated(department_id) => {
            select_department(&mut state, department_id)
        }
        CascadeEvent::DepartmentDetailLoaded {
            ticket,
            department_id,
            result,
        } => {
            if state.detail_ticket != Some(ticket) {
                debug!(%ticket, %department_id, "Discarding stale department detail");
                return (state, Vec::new());
            }
            let Some(summary) = state.selected_department.clone() else {
                return (state, Vec::new());
            };
            state.detail = match result {
                Ok(detailed) => Load::Ready(detailed),
                Err(e) => {
                    warn!(
                        %department_id,
                        error = %e,
                        "Department detail unavailable, using list summary"
                    );
                    Load::Ready(summary)
                }
            };
            Vec::new()
        }
    };

    (state, commands)
}

fn start(state: &mut SelectionState) -> Vec<Command> {
    if !matches!(state.regions, Load::Idle(_)) {
        debug!("Startup already issued");
        return Vec::new();
    }
    state.country = Load::Loading(COUNTRY_LOADING);
    state.regions = Load::Loading(REGIONS_LOADING);
    vec![Command::FetchCountry, Command::FetchRegions]
}

fn select_region(state: &mut SelectionState, region_id: RegionId) -> Vec<Command> {
    if state.find_region(region_id).is_none() {
        warn!(%region_id, "Activated region is not in the loaded list");
        return Vec::new();
    }

    let ticket = state.issue_ticket();
    state.selected_region = Some(region_id);
    state.selected_department = None;
    state.detail = Load::Idle(DETAIL_WAITING);
    state.detail_ticket = None;
    state.departments = Load::Loading(DEPARTMENTS_LOADING);
    state.departments_ticket = Some(ticket);

    debug!(%region_id, %ticket, "Region selected");
    vec![Command::FetchDepartments { ticket, region_id }]
}

fn select_department(state: &mut SelectionState, department_id: DepartmentId) -> Vec<Command> {
    let Some(summary) = state.find_department(department_id).cloned() else {
        warn!(%department_id, "Activated department is not in the current list");
        return Vec::new();
    };

    let ticket = state.issue_ticket();
    state.selected_department = Some(summary);
    state.detail = Load::Loading(DETAIL_LOADING);
    state.detail_ticket = Some(ticket);

    debug!(%department_id, %ticket, "Department selected");
    vec![Command::FetchDepartmentDetail {
        ticket,
        department_id,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cascade::state::{CascadePhase, RequestTicket};
    use crate::domain::entities::{Country, Department, Region};
    use crate::domain::errors::FetchError;

    fn regions() -> Vec<Region> {
        vec![Region::new(1, "Andina"), Region::new(2, "Caribe")]
    }

    fn ready_state() -> SelectionState {
        let (state, _) = apply(SelectionState::new(), CascadeEvent::Started);
        let (state, _) = apply(
            state,
            CascadeEvent::CountryLoaded(Ok(Country::new("Colombia"))),
        );
        let (state, _) = apply(state, CascadeEvent::RegionsLoaded(Ok(regions())));
        state
    }

    fn departments_ticket(commands: &[Command]) -> RequestTicket {
        match commands {
            [Command::FetchDepartments { ticket, .. }] => *ticket,
            other => panic!("expected department fetch, got {other:?}"),
        }
    }

    fn detail_ticket(commands: &[Command]) -> RequestTicket {
        match commands {
            [Command::FetchDepartmentDetail { ticket, .. }] => *ticket,
            other => panic!("expected detail fetch, got {other:?}"),
        }
    }

    fn with_departments(region: u32, deps: Vec<Department>) -> SelectionState {
        let (state, commands) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(region)));
        let ticket = departments_ticket(&commands);
        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentsLoaded {
                ticket,
                region_id: RegionId(region),
                result: Ok(deps),
            },
        );
        state
    }

    #[test]
    fn test_startup_requests_country_and_regions_together() {
        let (state, commands) = apply(SelectionState::new(), CascadeEvent::Started);

        assert_eq!(commands, vec![Command::FetchCountry, Command::FetchRegions]);
        assert!(state.country().is_loading());
        assert!(state.regions().is_loading());
        assert_eq!(state.phase(), CascadePhase::RegionsLoading);
    }

    #[test]
    fn test_startup_is_issued_once() {
        let (state, _) = apply(SelectionState::new(), CascadeEvent::Started);
        let (_, commands) = apply(state, CascadeEvent::Started);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_country_failure_does_not_block_regions() {
        let (state, _) = apply(SelectionState::new(), CascadeEvent::Started);
        let (state, _) = apply(
            state,
            CascadeEvent::CountryLoaded(Err(FetchError::network("Country/Colombia", "down"))),
        );
        let (state, _) = apply(state, CascadeEvent::RegionsLoaded(Ok(regions())));

        assert_eq!(state.country(), &Load::Failed(COUNTRY_FAILED));
        assert_eq!(state.regions().ready().map(Vec::len), Some(2));
        assert_eq!(state.phase(), CascadePhase::RegionsReady);
    }

    #[test]
    fn test_region_info_prompt_after_startup_settles() {
        let (state, _) = apply(SelectionState::new(), CascadeEvent::Started);
        assert!(state.region_info().is_loading());

        let (state, _) = apply(state, CascadeEvent::RegionsLoaded(Ok(regions())));
        assert!(state.region_info().is_loading());

        let (state, _) = apply(
            state,
            CascadeEvent::CountryLoaded(Err(FetchError::status("Country/Colombia", 500))),
        );
        assert!(matches!(state.region_info(), Load::Idle(_)));
    }

    #[test]
    fn test_region_activation_renders_info_and_fetches_departments() {
        let (state, commands) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(2)));

        assert_eq!(state.region_info().ready().map(|r| r.name()), Some("Caribe"));
        assert!(matches!(
            commands.as_slice(),
            [Command::FetchDepartments { region_id: RegionId(2), .. }]
        ));
        assert_eq!(state.phase(), CascadePhase::DepartmentsLoading);
        assert!(!state.detail_row_visible());
    }

    #[test]
    fn test_unknown_region_is_ignored() {
        let (state, commands) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(99)));
        assert!(commands.is_empty());
        assert!(state.selected_region_id().is_none());
    }

    #[test]
    fn test_department_list_failure_shows_placeholder() {
        let (state, commands) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(1)));
        let ticket = departments_ticket(&commands);
        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentsLoaded {
                ticket,
                region_id: RegionId(1),
                result: Err(FetchError::status("Region/1/departments", 503)),
            },
        );

        assert_eq!(state.departments(), &Load::Failed(DEPARTMENTS_FAILED));
        assert_eq!(state.phase(), CascadePhase::DepartmentsFailed);
    }

    #[test]
    fn test_new_region_clears_department_selection() {
        let state = with_departments(1, vec![Department::new(5, "Antioquia")]);
        let (state, commands) = apply(state, CascadeEvent::DepartmentActivated(DepartmentId(5)));
        let ticket = detail_ticket(&commands);
        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentDetailLoaded {
                ticket,
                department_id: DepartmentId(5),
                result: Ok(Department::new(5, "Antioquia").with_population(6_000_000)),
            },
        );
        assert_eq!(state.phase(), CascadePhase::DepartmentDetailReady);
        assert!(state.detail_row_visible());

        let (state, _) = apply(state, CascadeEvent::RegionActivated(RegionId(2)));

        assert!(state.selected_department().is_none());
        assert!(!state.detail_row_visible());
        assert!(matches!(state.detail(), Load::Idle(_)));
        assert_eq!(state.phase(), CascadePhase::DepartmentsLoading);
    }

    #[test]
    fn test_stale_department_list_is_discarded() {
        let (state, first) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(1)));
        let stale = departments_ticket(&first);
        let (state, second) = apply(state, CascadeEvent::RegionActivated(RegionId(2)));
        let current = departments_ticket(&second);

        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentsLoaded {
                ticket: stale,
                region_id: RegionId(1),
                result: Ok(vec![Department::new(1, "Antioquia")]),
            },
        );
        assert!(state.departments().is_loading());

        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentsLoaded {
                ticket: current,
                region_id: RegionId(2),
                result: Ok(vec![Department::new(8, "Atlántico")]),
            },
        );
        let names: Vec<_> = state
            .departments()
            .ready()
            .map(|d| d.iter().map(|d| d.name().to_string()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["Atlántico"]);
    }

    #[test]
    fn test_detail_failure_falls_back_to_summary() {
        let summary = Department::new(5, "Chocó").with_municipalities(30);
        let state = with_departments(1, vec![summary.clone()]);
        let (state, commands) = apply(state, CascadeEvent::DepartmentActivated(DepartmentId(5)));
        assert!(state.detail().is_loading());

        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentDetailLoaded {
                ticket: detail_ticket(&commands),
                department_id: DepartmentId(5),
                result: Err(FetchError::network("Department/5", "connection reset")),
            },
        );

        assert_eq!(state.detail(), &Load::Ready(summary));
        assert!(!state.detail().is_loading());
    }

    #[test]
    fn test_stale_detail_is_discarded() {
        let deps = vec![Department::new(5, "Chocó"), Department::new(6, "Valle")];
        let state = with_departments(1, deps);
        let (state, first) = apply(state, CascadeEvent::DepartmentActivated(DepartmentId(5)));
        let (state, _) = apply(state, CascadeEvent::DepartmentActivated(DepartmentId(6)));

        let (state, _) = apply(
            state,
            CascadeEvent::DepartmentDetailLoaded {
                ticket: detail_ticket(&first),
                department_id: DepartmentId(5),
                result: Ok(Department::new(5, "Chocó")),
            },
        );

        assert!(state.detail().is_loading());
        assert_eq!(state.selected_department_id(), Some(DepartmentId(6)));
    }

    #[test]
    fn test_department_outside_current_list_is_ignored() {
        let state = with_departments(1, vec![Department::new(5, "Chocó")]);
        let (state, commands) = apply(state, CascadeEvent::DepartmentActivated(DepartmentId(42)));

        assert!(commands.is_empty());
        assert!(state.selected_department().is_none());
    }

    #[test]
    fn test_filter_keeps_full_list_and_selection() {
        let (state, _) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(1)));
        let (state, _) = apply(state, CascadeEvent::FilterChanged("cari".to_string()));

        let visible: Vec<_> = state
            .visible_regions()
            .ready()
            .map(|v| v.iter().map(|r| r.id()).collect())
            .unwrap_or_default();
        assert_eq!(visible, vec![RegionId(2)]);
        assert_eq!(state.regions().ready().map(Vec::len), Some(2));
        assert_eq!(state.selected_region_id(), Some(RegionId(1)));
    }

    #[test]
    fn test_selecting_from_filtered_list_matches_unfiltered() {
        let (filtered, _) = apply(ready_state(), CascadeEvent::FilterChanged("cari".to_string()));
        let (filtered, a) = apply(filtered, CascadeEvent::RegionActivated(RegionId(2)));
        let (plain, b) = apply(ready_state(), CascadeEvent::RegionActivated(RegionId(2)));

        assert_eq!(a, b);
        assert_eq!(filtered.selected_region_id(), plain.selected_region_id());
        assert_eq!(filtered.phase(), plain.phase());
    }
}
