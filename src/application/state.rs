//! Application state for the timezone grid.
//!
//! `App` owns the grid and the status line, and applies [`GridEvent`]s to
//! them. It never touches the terminal; the event loop redraws after each
//! event.

use crate::application::events::{Cycle, Direction, Flow, GridEvent};
use crate::domain::{format_moment, GridFormatter, FormattedGrid, TimeGrid};
use crate::infrastructure::{copy_grid, ClipboardService};
use chrono::{DateTime, TimeDelta, Utc};

/// Main application state: the grid plus the most recent status message.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzgrid::application::{App, Cycle, GridEvent};
/// use tzgrid::domain::TimeGrid;
/// use tzgrid::infrastructure::SystemClipboard;
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
/// let mut app = App::new(TimeGrid::starting_at(base, 2, vec![chrono_tz::UTC]).unwrap());
/// app.handle_event(GridEvent::CycleColumn(Cycle::Forward), &mut SystemClipboard::new());
/// assert_eq!(app.grid.cursor.column, 1);
/// ```
#[derive(Debug)]
pub struct App {
    pub grid: TimeGrid,
    /// Feedback for the last key press. Empty means nothing to show.
    pub status_message: String,
}

impl App {
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            status_message: String::new(),
        }
    }

    /// Applies one event and tells the event loop how to continue.
    ///
    /// Every key event replaces the status message; a resize leaves it alone.
    pub fn handle_event(&mut self, event: GridEvent, clipboard: &mut dyn ClipboardService) -> Flow {
        match event {
            GridEvent::Quit => return Flow::Quit,
            GridEvent::Resize => return Flow::Resync,
            _ => {}
        }

        self.status_message.clear();
        match event {
            GridEvent::Confirm => self.confirm(clipboard),
            GridEvent::MoveCursor(Direction::Right, modifiers) => self.nudge(modifiers.step().delta()),
            GridEvent::MoveCursor(Direction::Left, modifiers) => self.nudge(-modifiers.step().delta()),
            GridEvent::MoveCursor(Direction::Up, _) => self.row_up(),
            GridEvent::MoveCursor(Direction::Down, _) => self.row_down(),
            GridEvent::CycleColumn(cycle) => self.cycle_column(cycle),
            GridEvent::Unrecognized(raw) => self.status_message = raw,
            GridEvent::Quit | GridEvent::Resize => {}
        }
        Flow::Continue
    }

    pub fn selected_moment(&self) -> DateTime<Utc> {
        self.grid.moment_at(self.grid.cursor.column)
    }

    pub fn formatted(&self) -> FormattedGrid {
        GridFormatter::format(&self.grid)
    }

    /// Shifts the selected moment by `delta`; negative moves it earlier.
    ///
    /// A shift past the representable range leaves the moment as it was.
    pub fn nudge(&mut self, delta: TimeDelta) {
        let col = self.grid.cursor.column;
        if let Some(moved) = self.grid.moment_at(col).checked_add_signed(delta) {
            self.grid.set_moment(col, moved);
        }
    }

    /// Selects the row above, wrapping from the first row to the last.
    pub fn row_up(&mut self) {
        let rows = self.grid.row_count();
        let row = &mut self.grid.cursor.row;
        *row = (*row + rows - 1) % rows;
    }

    /// Selects the row below, wrapping from the last row to the first.
    pub fn row_down(&mut self) {
        let rows = self.grid.row_count();
        let row = &mut self.grid.cursor.row;
        *row = (*row + 1) % rows;
    }

    pub fn cycle_column(&mut self, cycle: Cycle) {
        let cols = self.grid.column_count();
        let col = &mut self.grid.cursor.column;
        *col = match cycle {
            Cycle::Forward => (*col + 1) % cols,
            Cycle::Backward => (*col + cols - 1) % cols,
        };
    }

    /// Copies the whole grid and reports the selected moment in the first row's zone.
    pub fn confirm(&mut self, clipboard: &mut dyn ClipboardService) {
        match copy_grid(&self.formatted(), clipboard) {
            Ok(()) => {
                let home = self.grid.timezone_at(0);
                self.status_message = format!("Copied {}", format_moment(self.selected_moment(), home));
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                self.status_message = format!("Copy failed: {e}");
            }
        }
    }
}
