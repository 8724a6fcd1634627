use crate::application::App;
use crate::domain::COLUMN_SEPARATOR;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let area = f.area();
    render_grid(f.buffer_mut(), area, app);
}

/// Paints every timezone row at its own terminal row, then the status line
/// directly below the last one.
///
/// The cursor row is reverse-video across its whole line, separators
/// included; the cursor cell inside it is also bold.
pub fn render_grid(buf: &mut Buffer, area: Rect, app: &App) {
    let formatted = app.formatted();
    let cursor = app.grid.cursor;

    for (row, cells) in formatted.cells.iter().enumerate() {
        let selected_row = row == cursor.row;
        let line_style = if selected_row {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let mut pos = (area.x, offset(area.y, row));
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                pos = draw_text(buf, area, pos, line_style, COLUMN_SEPARATOR);
            }
            let style = if selected_row && col == cursor.column {
                line_style.add_modifier(Modifier::BOLD)
            } else {
                line_style
            };
            pos = draw_text(buf, area, pos, style, cell);
        }
    }

    let status_row = offset(area.y, formatted.row_count());
    draw_text(buf, area, (area.x, status_row), Style::default(), &app.status_message);
}

/// Writes `text` one character per cell starting at `start`.
///
/// Wraps to the start of the next row at the right edge of `area` and drops
/// whatever would land below its bottom edge. Returns the position after the
/// last character.
pub fn draw_text(buf: &mut Buffer, area: Rect, start: (u16, u16), style: Style, text: &str) -> (u16, u16) {
    let (mut x, mut y) = start;
    for ch in text.chars() {
        if y >= area.bottom() {
            break;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
        x = x.saturating_add(1);
        if x >= area.right() {
            x = area.x;
            y = y.saturating_add(1);
        }
    }
    (x, y)
}

fn offset(origin: u16, rows: usize) -> u16 {
    origin.saturating_add(u16::try_from(rows).unwrap_or(u16::MAX))
}
