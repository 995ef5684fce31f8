//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer produces effects; this module executes them by spawning
//! tokio tasks whose results come back through an inbox channel:
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - The runtime drains `inbox_rx` each frame to collect results
//!
//! No in-flight request is cancelled: a result for a view the user has
//! left reaches the reducer and is discarded there.

mod handlers;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use evenly_core::api::ApiClient;
use evenly_core::auth::Session;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Spinner advance interval while something is loading.
const TICK_DURATION: Duration = Duration::from_millis(120);

/// Terminal poll duration per loop iteration.
const POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or normal exit.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: ApiClient,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// Must be called from within a tokio runtime; effect handlers are
    /// spawned onto it.
    pub fn new(client: ApiClient, session: Session) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(session);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        let startup = self.state.startup_effects();
        self.execute_effects(startup);

        let result = self.event_loop();

        let restored = terminal::restore_terminal();
        result.and(restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;
        let mut last_tick = Instant::now();

        while !self.state.should_quit {
            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))
                    .context("Failed to draw frame")?;
                dirty = false;
            }

            if event::poll(POLL_DURATION).context("Failed to poll terminal events")? {
                match event::read().context("Failed to read terminal event")? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        self.dispatch(UiEvent::Key(key));
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            // Drain async results delivered since the last frame.
            while let Ok(event) = self.inbox_rx.try_recv() {
                self.dispatch(event);
                dirty = true;
            }

            if last_tick.elapsed() >= TICK_DURATION {
                last_tick = Instant::now();
                if self.state.is_busy() {
                    self.dispatch(UiEvent::Tick);
                    dirty = true;
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => self.state.should_quit = true,
            effect => {
                // Token snapshot at spawn time: each task sees the session
                // as it was when its effect was issued.
                let token = self.state.session.token().map(str::to_string);
                let client = self.client.with_token(token);
                handlers::spawn_effect(client, self.inbox_tx.clone(), effect);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
