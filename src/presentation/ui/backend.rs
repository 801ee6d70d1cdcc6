use std::sync::Arc;

use image::DynamicImage;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::{CascadeEvent, Command, ThemePreferenceUseCase};
use crate::domain::entities::{DepartmentId, ThemeMode};
use crate::domain::ports::GeoDataPort;
use crate::infrastructure::DepartmentImageLoader;

/// Completion sent back to the UI loop.
#[derive(Debug)]
pub enum Action {
    Cascade(CascadeEvent),
    DepartmentImageLoaded {
        department_id: DepartmentId,
        image: Arc<DynamicImage>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Cascade(Command),
    LoadDepartmentImage {
        department_id: DepartmentId,
        image_key: String,
    },
    PersistTheme(ThemeMode),
}

/// Performs one command. Cloned into every spawned task.
#[derive(Clone)]
struct Worker {
    geo_data: Arc<dyn GeoDataPort>,
    country: Arc<str>,
    images: DepartmentImageLoader,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Worker {
    fn send(&self, event: CascadeEvent) {
        let _ = self.action_tx.send(Action::Cascade(event));
    }

    async fn fetch(self, command: Command) {
        debug!(?command, "Fetching");
        match command {
            Command::FetchCountry => {
                let result = self.geo_data.fetch_country(&self.country).await;
                self.send(CascadeEvent::CountryLoaded(result));
            }
            Command::FetchRegions => {
                let result = self.geo_data.fetch_regions().await;
                self.send(CascadeEvent::RegionsLoaded(result));
            }
            Command::FetchDepartments { ticket, region_id } => {
                let result = self.geo_data.fetch_departments_for_region(region_id).await;
                self.send(CascadeEvent::DepartmentsLoaded {
                    ticket,
                    region_id,
                    result,
                });
            }
            Command::FetchDepartmentDetail {
                ticket,
                department_id,
            } => {
                let result = self.geo_data.fetch_department_detail(department_id).await;
                self.send(CascadeEvent::DepartmentDetailLoaded {
                    ticket,
                    department_id,
                    result,
                });
            }
        }
    }

    async fn load_image(self, department_id: DepartmentId, image_key: String) {
        if let Some(image) = self.images.load(&image_key).await {
            debug!(%department_id, key = %image_key, "Department image decoded");
            let _ = self.action_tx.send(Action::DepartmentImageLoaded {
                department_id,
                image,
            });
        }
    }
}

/// Runs fetches off the UI loop. Each fetch gets its own task so a slow
/// request never delays the others.
pub struct Backend {
    worker: Worker,
    theme_preference: ThemePreferenceUseCase,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
}

impl Backend {
    pub fn new(
        geo_data: Arc<dyn GeoDataPort>,
        country: &str,
        images: DepartmentImageLoader,
        theme_preference: ThemePreferenceUseCase,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            worker: Worker {
                geo_data,
                country: Arc::from(country),
                images,
                action_tx,
            },
            theme_preference,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            let worker = self.worker.clone();
            match command {
                BackendCommand::Cascade(command) => {
                    tokio::spawn(worker.fetch(command));
                }
                BackendCommand::LoadDepartmentImage {
                    department_id,
                    image_key,
                } => {
                    tokio::spawn(worker.load_image(department_id, image_key));
                }
                // Writes stay in order so the last toggle wins.
                BackendCommand::PersistTheme(mode) => self.theme_preference.persist(mode).await,
            }
        }
        info!("Backend worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RequestTicket;
    use crate::domain::entities::{Country, Department, Region, RegionId};
    use crate::domain::ports::mocks::{MockGeoData, MockPreferenceStore};

    struct Harness {
        command_tx: mpsc::UnboundedSender<BackendCommand>,
        action_rx: mpsc::UnboundedReceiver<Action>,
        store: Arc<MockPreferenceStore>,
    }

    fn spawn_backend(geo: MockGeoData) -> Harness {
        let store = Arc::new(MockPreferenceStore::new());
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let backend = Backend::new(
            Arc::new(geo),
            "Colombia",
            DepartmentImageLoader::new("/nonexistent-assets"),
            ThemePreferenceUseCase::new(store.clone()),
            command_rx,
            action_tx,
        );
        tokio::spawn(backend.run());
        Harness {
            command_tx,
            action_rx,
            store,
        }
    }

    async fn next_event(harness: &mut Harness) -> CascadeEvent {
        match harness.action_rx.recv().await {
            Some(Action::Cascade(event)) => event,
            other => panic!("expected cascade event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_country_uses_configured_name() {
        let geo = MockGeoData::new().with_country(Country::new("Colombia").with_capital("Bogotá"));
        let mut harness = spawn_backend(geo);

        harness
            .command_tx
            .send(BackendCommand::Cascade(Command::FetchCountry))
            .unwrap();

        match next_event(&mut harness).await {
            CascadeEvent::CountryLoaded(Ok(country)) => assert_eq!(country.name(), "Colombia"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_departments_carry_ticket_back() {
        let geo = MockGeoData::new()
            .with_regions(vec![Region::new(1, "Caribe")])
            .with_departments(RegionId(1), vec![Department::new(8, "Atlántico")]);
        let mut harness = spawn_backend(geo);
        let ticket = RequestTicket(7);

        harness
            .command_tx
            .send(BackendCommand::Cascade(Command::FetchDepartments {
                ticket,
                region_id: RegionId(1),
            }))
            .unwrap();

        match next_event(&mut harness).await {
            CascadeEvent::DepartmentsLoaded {
                ticket: got,
                region_id,
                result,
            } => {
                assert_eq!(got, ticket);
                assert_eq!(region_id, RegionId(1));
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_is_reported() {
        let mut harness = spawn_backend(MockGeoData::new());

        harness
            .command_tx
            .send(BackendCommand::Cascade(Command::FetchRegions))
            .unwrap();

        match next_event(&mut harness).await {
            CascadeEvent::RegionsLoaded(Err(e)) => assert!(e.is_network_error()),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_theme_writes_apply_in_order() {
        let mut harness = spawn_backend(MockGeoData::new());

        harness
            .command_tx
            .send(BackendCommand::PersistTheme(ThemeMode::Dark))
            .unwrap();
        harness
            .command_tx
            .send(BackendCommand::PersistTheme(ThemeMode::Light))
            .unwrap();
        harness
            .command_tx
            .send(BackendCommand::Cascade(Command::FetchRegions))
            .unwrap();

        // The fetch is only dispatched after both writes completed.
        let _ = next_event(&mut harness).await;
        assert_eq!(harness.store.stored().await, Some(ThemeMode::Light));
    }

    #[tokio::test]
    async fn test_missing_image_sends_nothing() {
        let mut harness = spawn_backend(MockGeoData::new().with_regions(Vec::new()));

        harness
            .command_tx
            .send(BackendCommand::LoadDepartmentImage {
                department_id: DepartmentId(3),
                image_key: "chocó".to_string(),
            })
            .unwrap();
        harness
            .command_tx
            .send(BackendCommand::Cascade(Command::FetchRegions))
            .unwrap();

        assert!(matches!(
            next_event(&mut harness).await,
            CascadeEvent::RegionsLoaded(Ok(_))
        ));
    }
}
