use crate::error::{Error, Result};

/// Cursor kinds the GUI library can request.
///
/// Discriminants are the library's raw values. `Wait` sits on the library's
/// trailing "count" slot, which some hosts use for a busy cursor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseCursor {
    None = -1,
    Arrow = 0,
    TextInput = 1,
    ResizeAll = 2,
    ResizeNS = 3,
    ResizeEW = 4,
    ResizeNESW = 5,
    ResizeNWSE = 6,
    Hand = 7,
    NotAllowed = 8,
    Wait = 9,
}

impl TryFrom<i32> for MouseCursor {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self> {
        Ok(match raw {
            -1 => MouseCursor::None,
            0 => MouseCursor::Arrow,
            1 => MouseCursor::TextInput,
            2 => MouseCursor::ResizeAll,
            3 => MouseCursor::ResizeNS,
            4 => MouseCursor::ResizeEW,
            5 => MouseCursor::ResizeNESW,
            6 => MouseCursor::ResizeNWSE,
            7 => MouseCursor::Hand,
            8 => MouseCursor::NotAllowed,
            9 => MouseCursor::Wait,
            other => return Err(Error::UnsupportedCursor(other)),
        })
    }
}
