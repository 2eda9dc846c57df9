use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::future;
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{self, Instant, Interval};

use crate::game::{GameConfig, GameEngine, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// The single periodic tick source
///
/// At most one interval is ever scheduled: `schedule` replaces the previous
/// one and `cancel` is unconditional and idempotent. A cancelled timer pends
/// forever, so it can sit in a `select!` arm without firing.
pub struct TickTimer {
    interval: Option<Interval>,
}

impl TickTimer {
    pub fn idle() -> Self {
        Self { interval: None }
    }

    /// Replace the current schedule with a fresh periodic tick
    ///
    /// The first fire comes a full period from now; a plain `interval` would
    /// tick immediately, which would double-step the snake on every re-arm.
    pub fn schedule(&mut self, period: Duration) {
        self.interval = Some(time::interval_at(Instant::now() + period, period));
    }

    /// Drop the schedule. Safe to call when nothing is scheduled.
    pub fn cancel(&mut self) {
        self.interval = None;
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick; pends forever while cancelled
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

pub struct App {
    engine: GameEngine,
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let session = engine.new_session();

        Self {
            engine,
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut timer = TickTimer::idle();

        // First frame: the instruction banner, before any input arrives
        terminal
            .draw(|frame| self.renderer.render(frame, &self.session))
            .context("Failed to draw frame")?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut timer);
                    }
                }

                // Game logic tick
                _ = timer.tick() => {
                    self.on_tick(&mut timer);
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            // Redraw after every tick, input event and reset
            terminal
                .draw(|frame| self.renderer.render(frame, &self.session))
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, timer: &mut TickTimer) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Start => {
                    if self.session.start() {
                        timer.schedule(self.session.tick_interval());
                    }
                }
                KeyAction::Turn(direction) => {
                    // Applied on the next tick; honored in either phase
                    self.session.set_direction(direction);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn on_tick(&mut self, timer: &mut TickTimer) {
        if !self.session.is_running() {
            return;
        }

        let outcome = self.engine.step(&mut self.session);

        if self.engine.check_collision(&self.session).is_some() {
            self.engine.reset(&mut self.session);
            timer.cancel();
            return;
        }

        if outcome.ate_food {
            // Same-tick restart so the next tick already runs at the
            // shortened interval
            timer.schedule(self.session.tick_interval());
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
