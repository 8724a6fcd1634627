//! Input vocabulary of the grid, independent of the terminal library.

use crate::domain::Step;

/// Arrow direction. Left/Right change the selected moment, Up/Down change the selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Tab order over columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Backward,
}

/// Modifier keys held during an arrow press.
///
/// `other` covers anything that is neither Control nor Shift (Alt, Super, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub other: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { control: false, shift: false, other: false };
    pub const CONTROL: Modifiers = Modifiers { control: true, shift: false, other: false };
    pub const SHIFT: Modifiers = Modifiers { control: false, shift: true, other: false };

    /// Nudge size for a left/right press.
    ///
    /// Control gives a day and Shift an hour, whatever else is held; no
    /// modifier at all gives a minute. Control+Shift together, or only
    /// unbound modifiers such as Alt, move by zero.
    pub fn step(self) -> Step {
        match (self.control, self.shift, self.other) {
            (true, false, _) => Step::Day,
            (false, true, _) => Step::Hour,
            (false, false, false) => Step::Minute,
            _ => Step::None,
        }
    }
}

/// One discrete input to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    Quit,
    /// Copy the whole grid to the clipboard.
    Confirm,
    MoveCursor(Direction, Modifiers),
    CycleColumn(Cycle),
    /// The terminal changed size; nothing in the grid changes.
    Resize,
    /// A key with no binding, carried as its debug representation.
    Unrecognized(String),
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Resync,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_steps() {
        assert_eq!(Modifiers::NONE.step(), Step::Minute);
        assert_eq!(Modifiers::SHIFT.step(), Step::Hour);
        assert_eq!(Modifiers::CONTROL.step(), Step::Day);
    }

    #[test]
    fn test_unbound_combinations_do_not_move() {
        let both = Modifiers { control: true, shift: true, other: false };
        assert_eq!(both.step(), Step::None);

        let alt = Modifiers { other: true, ..Modifiers::NONE };
        assert_eq!(alt.step(), Step::None);

        let ctrl_shift_alt = Modifiers { control: true, shift: true, other: true };
        assert_eq!(ctrl_shift_alt.step(), Step::None);
    }

    #[test]
    fn test_extra_modifiers_keep_the_bound_step() {
        let ctrl_alt = Modifiers { other: true, ..Modifiers::CONTROL };
        assert_eq!(ctrl_alt.step(), Step::Day);

        let shift_alt = Modifiers { other: true, ..Modifiers::SHIFT };
        assert_eq!(shift_alt.step(), Step::Hour);
    }
}
