//! Playground app loop.
//!
//! Single-threaded and cooperative: one loop polls input with a tick
//! timeout, drains settled async commands, dispatches into the store, and
//! redraws. `Command::Task` futures (the delayed fetches) run on a tokio
//! handle and come back through an unbounded channel, so the store is only
//! ever touched from the loop thread.

use crate::backend::TerminalBackend;
use crate::error::TuiError;
use crate::theme::Theme;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use ensayar_core::{Command, PlaygroundMsg, PlaygroundState, Store};
use ensayar_widgets::{Line, MockDataPanel, Panel, Span, TestRunnerPanel, Tone};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one loop iteration waits for input before redrawing.
pub const TICK: Duration = Duration::from_millis(50);

/// Terminal application over a backend.
pub struct App<B: TerminalBackend> {
    backend: B,
    theme: Theme,
    store: Store<PlaygroundState>,
    tasks: tokio::runtime::Handle,
    tx: mpsc::UnboundedSender<PlaygroundMsg>,
    rx: mpsc::UnboundedReceiver<PlaygroundMsg>,
}

impl<B: TerminalBackend> App<B> {
    /// Create the app around an initial page state.
    ///
    /// `tasks` is the runtime that executes fetch delays; the loop itself
    /// never blocks on it.
    pub fn new(backend: B, state: PlaygroundState, tasks: tokio::runtime::Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            theme: Theme::default(),
            store: Store::new(state),
            tasks,
            tx,
            rx,
        }
    }

    /// Current page state.
    pub fn state(&self) -> &PlaygroundState {
        self.store.state()
    }

    /// Dispatch a message and execute whatever command it produced.
    pub fn dispatch(&mut self, msg: PlaygroundMsg) {
        let command = self.store.dispatch(msg);
        self.execute(command);
    }

    fn execute(&mut self, command: Command<PlaygroundMsg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.execute(command);
                }
            }
            Command::Task(future) => {
                let tx = self.tx.clone();
                self.tasks.spawn(async move {
                    // The loop may already be gone on shutdown.
                    let _ = tx.send(future.await);
                });
            }
        }
    }

    /// Dispatch every task result that has settled since the last tick.
    /// Returns how many messages were applied.
    pub fn drain_settled(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// React to a key event. Returns `false` when the app should quit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                tracing::debug!("quit requested");
                false
            }
            KeyCode::Char('r') => {
                self.dispatch(PlaygroundMsg::RunTests);
                true
            }
            KeyCode::Char('f') => {
                self.dispatch(PlaygroundMsg::FetchRequested);
                true
            }
            _ => true,
        }
    }

    /// Render the whole page at the given width.
    pub fn render_lines(&self, width: u16) -> Vec<Line> {
        let state = self.store.state();
        let runner = TestRunnerPanel::new(state.cases(), state.runs());
        let mock = MockDataPanel::new(state.fetch().clone(), state.user().cloned());

        let mut lines = vec![
            Line::from(Span::new("Testing & Mocking Playground").tone(Tone::Heading).bold()),
            Line::from(
                Span::new("Interactive testing and mocking examples").tone(Tone::Muted),
            ),
        ];
        for panel in [&runner as &dyn Panel, &mock as &dyn Panel] {
            lines.push(Line::new());
            lines.push(Line::from(Span::new(panel.title()).tone(Tone::Heading).bold()));
            lines.extend(panel.render(width));
        }
        lines.push(Line::new());
        lines.push(Line::from(
            Span::new("r: run tests   f: fetch   q: quit").tone(Tone::Muted),
        ));
        lines
    }

    /// Render the page as plain text (no colors, no terminal control).
    pub fn render_plain(&self, width: u16) -> String {
        let mut out = String::new();
        for line in self.render_lines(width) {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let (width, _) = self.backend.size()?;
        let lines = self.render_lines(width);
        self.backend.draw(&lines, &self.theme)
    }

    /// Run the interactive loop until the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.backend.enter()?;
        let result = self.event_loop();
        let restored = self.backend.leave();
        result.and(restored)
    }

    fn event_loop(&mut self) -> Result<(), TuiError> {
        loop {
            self.drain_settled();
            self.draw()?;
            if self.backend.poll(TICK)? {
                if let CrosstermEvent::Key(key) = self.backend.read_event()? {
                    if !self.handle_key(&key) {
                        return Ok(());
                    }
                }
            }
        }
    }
}
