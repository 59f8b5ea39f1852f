use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Receives typed characters from the host.
///
/// Clones share one queue: the host keeps a clone and pushes as events
/// arrive, the input bridge drains it at the next frame. Tab is dropped here
/// because the GUI library handles it as a navigation key.
#[derive(Debug, Clone, Default)]
pub struct TextInputSink {
    queue: Rc<RefCell<VecDeque<char>>>,
}

impl TextInputSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, c: char) {
        if c == '\t' {
            return;
        }
        self.queue.borrow_mut().push_back(c);
    }

    pub fn push_str(&self, text: &str) {
        text.chars().for_each(|c| self.push(c));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Removes and returns everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<char> {
        self.queue.borrow_mut().drain(..).collect()
    }
}
