/// Keys the GUI library needs for navigation and text editing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GuiKey {
    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Backspace,
    Enter,
    Escape,

    // Clipboard and undo shortcuts.
    A,
    C,
    V,
    X,
    Y,
    Z,
}

impl GuiKey {
    pub const COUNT: usize = 19;

    pub const ALL: [GuiKey; Self::COUNT] = [
        GuiKey::Tab,
        GuiKey::LeftArrow,
        GuiKey::RightArrow,
        GuiKey::UpArrow,
        GuiKey::DownArrow,
        GuiKey::PageUp,
        GuiKey::PageDown,
        GuiKey::Home,
        GuiKey::End,
        GuiKey::Delete,
        GuiKey::Backspace,
        GuiKey::Enter,
        GuiKey::Escape,
        GuiKey::A,
        GuiKey::C,
        GuiKey::V,
        GuiKey::X,
        GuiKey::Y,
        GuiKey::Z,
    ];

    /// Slot in [`GuiIo::keys_down`](super::GuiIo::keys_down).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_key_at_its_index() {
        for (i, key) in GuiKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }
}
