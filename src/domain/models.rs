use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use chrono_tz::Tz;

use super::errors::{GridError, GridResult};

/// IANA names of the rows shown by the grid, top to bottom.
pub const HOME_TIMEZONES: [&str; 8] = [
    "US/Pacific",
    "US/Mountain",
    "US/Central",
    "US/Eastern",
    "UTC",
    "Asia/Kolkata",
    "Australia/Sydney",
    "Pacific/Auckland",
];

/// Number of columns when none is requested.
pub const DEFAULT_COLUMNS: usize = 2;

/// Selected (column, row) pair. Always a valid index into the grid it belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub column: usize,
    pub row: usize,
}

/// Granularity of a single left/right nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Zero-length move, produced by modifier combinations with no binding.
    None,
    Minute,
    Hour,
    Day,
}

impl Step {
    pub fn delta(self) -> TimeDelta {
        match self {
            Step::None => TimeDelta::zero(),
            Step::Minute => TimeDelta::minutes(1),
            Step::Hour => TimeDelta::hours(1),
            Step::Day => TimeDelta::hours(24),
        }
    }
}

/// N moments by M timezones, plus the cursor over them.
///
/// Both sequences are fixed in length once the grid is built, so the cursor
/// only has to be kept in range by the wraparound arithmetic that moves it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzgrid::domain::TimeGrid;
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
/// let grid = TimeGrid::starting_at(base, 3, vec![chrono_tz::UTC]).unwrap();
/// assert_eq!(grid.column_count(), 3);
/// assert_eq!(grid.row_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TimeGrid {
    timezones: Vec<Tz>,
    moments: Vec<DateTime<Utc>>,
    pub cursor: Cursor,
}

impl TimeGrid {
    pub fn new(timezones: Vec<Tz>, moments: Vec<DateTime<Utc>>) -> GridResult<Self> {
        if timezones.is_empty() || moments.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            timezones,
            moments,
            cursor: Cursor::default(),
        })
    }

    /// Builds `columns` moments where column *i* is `base` plus *i* hours.
    pub fn starting_at(base: DateTime<Utc>, columns: usize, timezones: Vec<Tz>) -> GridResult<Self> {
        let moments = (0..columns)
            .map(|i| base + TimeDelta::hours(i as i64))
            .collect();
        Self::new(timezones, moments)
    }

    /// Builds the grid shown at startup: the home timezones, with the first
    /// column at the current minute.
    pub fn now(columns: usize) -> GridResult<Self> {
        let timezones = resolve_timezones(&HOME_TIMEZONES)?;
        Self::starting_at(truncate_to_minute(Utc::now()), columns, timezones)
    }

    pub fn timezone_at(&self, row: usize) -> Tz {
        self.timezones[row]
    }

    pub fn moment_at(&self, col: usize) -> DateTime<Utc> {
        self.moments[col]
    }

    pub fn set_moment(&mut self, col: usize, value: DateTime<Utc>) {
        self.moments[col] = value;
    }

    pub fn column_count(&self) -> usize {
        self.moments.len()
    }

    pub fn row_count(&self) -> usize {
        self.timezones.len()
    }

    pub fn timezones(&self) -> &[Tz] {
        &self.timezones
    }

    pub fn moments(&self) -> &[DateTime<Utc>] {
        &self.moments
    }
}

/// Resolves IANA names in order. The first unknown name aborts resolution.
pub fn resolve_timezones(names: &[&str]) -> GridResult<Vec<Tz>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Tz>()
                .map_err(|_| GridError::UnknownTimezone((*name).to_string()))
        })
        .collect()
}

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .duration_trunc(TimeDelta::minutes(1))
        .unwrap_or(instant)
}
