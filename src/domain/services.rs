//! Text layout for the time grid.
//!
//! The formatter is the single source of truth for what a grid looks like as
//! text. The terminal renderer and the clipboard export both consume a
//! [`FormattedGrid`], so what is on screen is exactly what gets copied.

use std::ops::Range;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::models::TimeGrid;

/// Layout of a single cell: date, 24-hour time, zone abbreviation.
pub const CELL_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Placed between adjacent columns, never before the first or after the last.
pub const COLUMN_SEPARATOR: &str = "   ";

/// Formats one moment as civil time in the given zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzgrid::domain::format_moment;
///
/// let moment = Utc.with_ymd_and_hms(2024, 1, 2, 22, 4, 0).unwrap();
/// assert_eq!(format_moment(moment, chrono_tz::US::Mountain), "2024-01-02 15:04 MST");
/// ```
pub fn format_moment(moment: DateTime<Utc>, timezone: Tz) -> String {
    moment.with_timezone(&timezone).format(CELL_FORMAT).to_string()
}

/// Every cell of a grid as padded text, with the width of each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedGrid {
    pub widths: Vec<usize>,
    /// Row-major, already right-padded to the column width.
    pub cells: Vec<Vec<String>>,
}

impl FormattedGrid {
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn line(&self, row: usize) -> String {
        self.cells[row].join(COLUMN_SEPARATOR)
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.row_count()).map(|row| self.line(row)).collect()
    }

    /// Character offsets of column `col` within any row line.
    ///
    /// Every row shares the same offsets because cells are padded to the
    /// column width.
    pub fn column_span(&self, col: usize) -> Range<usize> {
        let start: usize = self.widths[..col]
            .iter()
            .map(|w| w + COLUMN_SEPARATOR.len())
            .sum();
        start..start + self.widths[col]
    }
}

pub struct GridFormatter;

impl GridFormatter {
    /// Width of each column: the longest formatted cell over all rows.
    ///
    /// Abbreviation length varies by zone and across DST changes, so widths
    /// are recomputed on every call.
    pub fn column_widths(grid: &TimeGrid) -> Vec<usize> {
        (0..grid.column_count())
            .map(|col| {
                grid.timezones()
                    .iter()
                    .map(|tz| format_moment(grid.moment_at(col), *tz).chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn format(grid: &TimeGrid) -> FormattedGrid {
        let widths = Self::column_widths(grid);
        let cells = grid
            .timezones()
            .iter()
            .map(|tz| {
                grid.moments()
                    .iter()
                    .zip(&widths)
                    .map(|(moment, width)| pad_right(format_moment(*moment, *tz), *width))
                    .collect()
            })
            .collect();
        FormattedGrid { widths, cells }
    }
}

fn pad_right(text: String, width: usize) -> String {
    format!("{text:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{resolve_timezones, HOME_TIMEZONES};
    use chrono::{TimeDelta, TimeZone};

    fn home_grid(columns: usize) -> TimeGrid {
        let base = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
        TimeGrid::starting_at(base, columns, resolve_timezones(&HOME_TIMEZONES).unwrap()).unwrap()
    }

    #[test]
    fn test_format_moment_layout() {
        let moment = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
        assert_eq!(format_moment(moment, chrono_tz::UTC), "2024-01-02 15:00 UTC");
        assert_eq!(format_moment(moment, chrono_tz::US::Pacific), "2024-01-02 07:00 PST");
        assert_eq!(format_moment(moment, chrono_tz::Asia::Kolkata), "2024-01-02 20:30 IST");
        assert_eq!(format_moment(moment, chrono_tz::Pacific::Auckland), "2024-01-03 04:00 NZDT");
    }

    #[test]
    fn test_widths_are_row_maximum() {
        let grid = home_grid(2);
        let formatted = GridFormatter::format(&grid);
        for col in 0..grid.column_count() {
            let longest = grid
                .timezones()
                .iter()
                .map(|tz| format_moment(grid.moment_at(col), *tz).chars().count())
                .max()
                .unwrap();
            assert_eq!(formatted.widths[col], longest);
            for row in &formatted.cells {
                assert_eq!(row[col].chars().count(), longest);
            }
        }
        // AEDT / NZDT are the longest abbreviations in January.
        assert_eq!(formatted.widths[0], "2024-01-02 15:00 AEDT".len());
    }

    #[test]
    fn test_padding_is_trailing_spaces() {
        let formatted = GridFormatter::format(&home_grid(1));
        assert_eq!(formatted.cells[4][0], "2024-01-02 15:00 UTC ");
    }

    #[test]
    fn test_line_uses_three_space_separator() {
        let formatted = GridFormatter::format(&home_grid(3));
        for line in formatted.lines() {
            assert!(!line.starts_with(' '));
        }
        assert_eq!(
            formatted.line(4),
            "2024-01-02 15:00 UTC    2024-01-02 16:00 UTC    2024-01-02 17:00 UTC "
        );
    }

    #[test]
    fn test_column_span_matches_line() {
        let formatted = GridFormatter::format(&home_grid(3));
        for row in 0..formatted.row_count() {
            let chars: Vec<char> = formatted.line(row).chars().collect();
            for col in 0..3 {
                let span = formatted.column_span(col);
                let text: String = chars[span].iter().collect();
                assert_eq!(text, formatted.cells[row][col]);
            }
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let grid = home_grid(2);
        assert_eq!(GridFormatter::format(&grid), GridFormatter::format(&grid));
    }

    #[test]
    fn test_widths_follow_moment_changes() {
        // Lord Howe is "+11" in summer and "+1030" in winter.
        let zones = resolve_timezones(&["UTC", "Australia/Lord_Howe"]).unwrap();
        let base = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
        let mut grid = TimeGrid::starting_at(base, 1, zones).unwrap();
        assert_eq!(GridFormatter::column_widths(&grid), vec!["2024-01-03 02:00 +11".len()]);

        grid.set_moment(0, base + TimeDelta::days(180));
        let formatted = GridFormatter::format(&grid);
        assert_eq!(formatted.widths, vec!["2024-07-01 01:30 +1030".len()]);
        assert_eq!(formatted.cells[0][0], "2024-06-30 15:00 UTC  ");
    }
}
