//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::application::CascadeEvent;
use crate::presentation::ui::backend::{Action, BackendCommand};
use crate::presentation::ui::explorer_screen::{
    ExplorerKeyResult, ExplorerScreen, ExplorerScreenState,
};

pub struct App {
    state: ExplorerScreenState,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(
        state: ExplorerScreenState,
        command_tx: mpsc::UnboundedSender<BackendCommand>,
        action_rx: mpsc::UnboundedReceiver<Action>,
    ) -> Self {
        Self {
            state,
            command_tx,
            action_rx,
            running: true,
        }
    }

    /// Starts the cascade and runs until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.dispatch(CascadeEvent::Started);
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(event) = terminal_events.next() => {
                    match event {
                        Ok(event) => self.handle_terminal_event(event),
                        Err(e) => {
                            error!(error = %e, "Terminal event stream failed");
                            self.running = false;
                        }
                    }
                }

                else => break,
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(ExplorerScreen, frame.area(), &mut self.state);
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.state.handle_key(key) {
            ExplorerKeyResult::Continue => {}
            ExplorerKeyResult::Quit => self.running = false,
            ExplorerKeyResult::Dispatch(event) => self.dispatch(event),
            ExplorerKeyResult::ThemeToggled(mode) => {
                info!(%mode, "Theme toggled");
                self.send(BackendCommand::PersistTheme(mode));
            }
            ExplorerKeyResult::OpenFlag(url) => {
                debug!(%url, "Opening flag");
                if let Err(e) = opener::open_browser(&url) {
                    warn!(%url, error = %e, "Failed to open flag");
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Cascade(event) => self.dispatch(event),
            Action::DepartmentImageLoaded {
                department_id,
                image,
            } => self.state.picture_loaded(department_id, &image),
        }
    }

    fn dispatch(&mut self, event: CascadeEvent) {
        for command in self.state.apply(event) {
            self.send(command);
        }
    }

    fn send(&self, command: BackendCommand) {
        if self.command_tx.send(command).is_err() {
            error!("Backend worker is gone");
        }
    }
}
