use crate::domain::FormattedGrid;
use thiserror::Error;

/// Line terminator for exported text. Some clipboard consumers only split on CRLF.
pub const EXPORT_LINE_ENDING: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected text: {0}")]
    Rejected(String),
}

/// Something that can take over the system clipboard's text content.
pub trait ClipboardService {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard, via `arboard`.
///
/// The handle is opened on first use and then kept: on X11 and Wayland the
/// copied text is only served while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialised".to_string()))
    }
}

impl ClipboardService for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

/// Whole grid as text, every line CRLF-terminated.
pub fn export_text(formatted: &FormattedGrid) -> String {
    let mut out = String::new();
    for line in formatted.lines() {
        out.push_str(&line);
        out.push_str(EXPORT_LINE_ENDING);
    }
    out
}

/// Puts the entire grid on the clipboard. One attempt, no retry.
pub fn copy_grid(
    formatted: &FormattedGrid,
    clipboard: &mut dyn ClipboardService,
) -> Result<(), ClipboardError> {
    clipboard.set_text(&export_text(formatted))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Keeps everything it is given.
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub contents: Vec<String>,
    }

    impl ClipboardService for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents.push(text.to_string());
            Ok(())
        }
    }

    /// Refuses every write.
    pub struct BrokenClipboard;

    impl ClipboardService for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{BrokenClipboard, RecordingClipboard};
    use super::*;
    use crate::domain::{resolve_timezones, GridFormatter, TimeGrid, COLUMN_SEPARATOR, HOME_TIMEZONES};
    use chrono::{TimeZone, Utc};

    fn formatted(columns: usize) -> FormattedGrid {
        let base = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
        let grid =
            TimeGrid::starting_at(base, columns, resolve_timezones(&HOME_TIMEZONES).unwrap()).unwrap();
        GridFormatter::format(&grid)
    }

    #[test]
    fn test_export_terminates_each_line_with_crlf() {
        let text = export_text(&formatted(2));
        assert!(text.ends_with(EXPORT_LINE_ENDING));
        assert_eq!(text.matches(EXPORT_LINE_ENDING).count(), 8);
        assert!(!text.replace(EXPORT_LINE_ENDING, "").contains('\n'));
    }

    #[test]
    fn test_export_lines_have_one_separator_per_gap() {
        for columns in 1..=4 {
            let text = export_text(&formatted(columns));
            let lines: Vec<&str> = text.split_terminator(EXPORT_LINE_ENDING).collect();
            assert_eq!(lines.len(), 8);
            for line in lines {
                assert_eq!(line.matches(COLUMN_SEPARATOR).count(), columns - 1);
            }
        }
    }

    #[test]
    fn test_copy_grid_sends_whole_grid_once() {
        let grid = formatted(2);
        let mut clipboard = RecordingClipboard::default();
        copy_grid(&grid, &mut clipboard).unwrap();
        assert_eq!(clipboard.contents, vec![export_text(&grid)]);
    }

    #[test]
    fn test_copy_grid_reports_failure() {
        let err = copy_grid(&formatted(1), &mut BrokenClipboard).unwrap_err();
        assert_eq!(err, ClipboardError::Unavailable("no display".to_string()));
        assert_eq!(err.to_string(), "clipboard unavailable: no display");
    }
}
