use crate::application::{Cycle, Direction, GridEvent, Modifiers};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Maps a terminal event onto the grid's input vocabulary.
    ///
    /// Returns `None` for events the grid ignores: key releases and repeats,
    /// mouse, focus and paste.
    pub fn translate(event: &Event) -> Option<GridEvent> {
        match event {
            Event::Resize(_, _) => Some(GridEvent::Resize),
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::translate_key(key)),
            _ => None,
        }
    }

    pub fn translate_key(key: &KeyEvent) -> GridEvent {
        match key.code {
            KeyCode::Esc => GridEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GridEvent::Quit,
            KeyCode::Enter => GridEvent::Confirm,
            KeyCode::Tab => GridEvent::CycleColumn(Cycle::Forward),
            KeyCode::BackTab => GridEvent::CycleColumn(Cycle::Backward),
            KeyCode::Left => GridEvent::MoveCursor(Direction::Left, Self::modifiers(key.modifiers)),
            KeyCode::Right => GridEvent::MoveCursor(Direction::Right, Self::modifiers(key.modifiers)),
            KeyCode::Up => GridEvent::MoveCursor(Direction::Up, Self::modifiers(key.modifiers)),
            KeyCode::Down => GridEvent::MoveCursor(Direction::Down, Self::modifiers(key.modifiers)),
            code => GridEvent::Unrecognized(format!("{code:?}")),
        }
    }

    fn modifiers(raw: KeyModifiers) -> Modifiers {
        Modifiers {
            control: raw.contains(KeyModifiers::CONTROL),
            shift: raw.contains(KeyModifiers::SHIFT),
            other: raw.intersects(
                KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::HYPER | KeyModifiers::META,
            ),
        }
    }
}
