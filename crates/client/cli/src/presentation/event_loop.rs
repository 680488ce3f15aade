//! Frame loop coordinating keyboard input, engine ticks, and rendering.
//!
//! The engine is driven from this task only. Its observer publishes every
//! new state into a `watch` channel; the loop picks up the latest snapshot
//! after each frame and redraws when it changed.
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use slot_core::{Clock, GameEngine, GameState, RngOracle};
use tokio::{
    sync::watch,
    time::{self, Duration, MissedTickBehavior},
};

use crate::{
    config::FrameConfig,
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        ui::{self, RenderContext},
    },
    view_model::BoardView,
};

pub struct EventLoop<R, C>
where
    R: RngOracle,
    C: Clock,
{
    engine: GameEngine<R, C>,
    snapshots: watch::Receiver<GameState>,
    input: InputHandler,
    board: BoardView,
    last_state: GameState,
    frame_interval: Duration,
    seed: u64,
}

impl<R, C> EventLoop<R, C>
where
    R: RngOracle,
    C: Clock,
{
    pub fn new(mut engine: GameEngine<R, C>, frame: &FrameConfig, seed: u64) -> Self {
        let initial = engine.snapshot();
        let (tx, snapshots) = watch::channel(initial.clone());
        engine.subscribe(move |state: &GameState| {
            tx.send_replace(state.clone());
        });

        Self {
            board: BoardView::new(engine.config(), &initial),
            engine,
            snapshots,
            input: InputHandler::new(),
            last_state: initial,
            frame_interval: Duration::from_millis(frame.interval_ms),
            seed,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        let mut ticker = time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        loop {
            ticker.tick().await;

            if self.handle_input_tick(terminal)? {
                break;
            }

            let now = Instant::now();
            let dt_seconds = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;
            self.engine.advance(dt_seconds);

            if self.snapshots.has_changed()? {
                self.refresh_view();
                self.render(terminal)?;
            }
        }

        tracing::info!("event loop finished");
        Ok(())
    }

    /// Drains pending terminal events. Returns true when the user quits.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key) {
                        return Ok(true);
                    }
                }
                TermEvent::Resize(_, _) => self.render(terminal)?,
                _ => {}
            }
        }
        Ok(false)
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key, self.board.button.enabled) {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                true
            }
            KeyAction::Spin => {
                if self.engine.request_spin() {
                    tracing::info!("spin started");
                }
                false
            }
            KeyAction::None => false,
        }
    }

    fn refresh_view(&mut self) {
        let state = self.snapshots.borrow_and_update().clone();
        self.board.update(self.engine.config(), &self.last_state, &state);
        if self.last_state.is_spinning && !state.is_spinning {
            tracing::info!("spin finished");
        }
        self.last_state = state;
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            config: self.engine.config(),
            seed: self.seed,
        };
        ui::render(terminal, &self.board, &ctx)
    }
}
