//! Terminal acquisition and the main event loop.

use std::io::{self, Stdout};
use std::marker::PhantomData;

use crossterm::{
    cursor::Show,
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::application::{App, Flow};
use crate::domain::GridResult;
use crate::infrastructure::ClipboardService;
use crate::presentation::{render_ui, InputHandler};

/// A display mode the grid runs in, entered once and left once.
pub trait ScreenMode {
    fn enter() -> io::Result<()>;
    /// Must be safe to call even if `enter` failed part way.
    fn leave();
}

/// Raw mode on the alternate screen of the controlling tty.
pub struct AlternateScreen;

impl ScreenMode for AlternateScreen {
    fn enter() -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)
    }

    fn leave() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Leaves the screen mode on drop. Exists before anything else is set up,
/// so every later failure still restores the terminal.
struct ScreenSession<M: ScreenMode>(PhantomData<M>);

impl<M: ScreenMode> ScreenSession<M> {
    fn enter() -> io::Result<Self> {
        let session = ScreenSession(PhantomData);
        M::enter()?;
        Ok(session)
    }
}

impl<M: ScreenMode> Drop for ScreenSession<M> {
    fn drop(&mut self) {
        M::leave();
    }
}

/// A ready terminal, restored when dropped.
pub struct TerminalGuard<B: Backend, M: ScreenMode = AlternateScreen> {
    pub terminal: Terminal<B>,
    // Declared last: the terminal is dropped before the screen mode is left.
    _session: ScreenSession<M>,
}

impl TerminalGuard<CrosstermBackend<Stdout>> {
    pub fn acquire() -> GridResult<Self> {
        Self::acquire_with(|| Terminal::new(CrosstermBackend::new(io::stdout())))
    }
}

impl<B: Backend, M: ScreenMode> TerminalGuard<B, M> {
    pub fn acquire_with(build: impl FnOnce() -> io::Result<Terminal<B>>) -> GridResult<Self> {
        let session = ScreenSession::<M>::enter()?;
        let terminal = build()?;
        Ok(Self {
            terminal,
            _session: session,
        })
    }
}

/// Main event loop: draw, block on one event, apply it, repeat until quit.
///
/// `next_event` is the blocking event source, `crossterm::event::read` in
/// the real program.
///
/// # Errors
///
/// Returns `GridError::Terminal` if drawing or reading events fails.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    clipboard: &mut dyn ClipboardService,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> GridResult<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        let Some(grid_event) = InputHandler::translate(&next_event()?) else {
            continue;
        };
        tracing::debug!(event = ?grid_event, "input");

        match app.handle_event(grid_event, clipboard) {
            Flow::Quit => return Ok(()),
            Flow::Resync => {
                tracing::debug!("resyncing terminal");
                terminal.clear()?;
            }
            Flow::Continue => {}
        }
    }
}
