//! Line-oriented question input.
//!
//! Enter submits. A line ending in a backslash stands in for Shift+Enter:
//! the backslash is dropped, a newline is kept, and input continues.

/// What a fed line amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The buffered text, ready to submit as-is (not yet trimmed).
    Submit(String),
    /// More lines are expected.
    Continue,
}

#[derive(Debug, Default)]
pub struct InputBuffer {
    pending: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, without its trailing newline.
    pub fn feed(&mut self, line: &str) -> InputEvent {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line.strip_suffix('\\') {
            Some(head) => {
                self.pending.push_str(head);
                self.pending.push('\n');
                InputEvent::Continue
            }
            None => {
                self.pending.push_str(line);
                InputEvent::Submit(std::mem::take(&mut self.pending))
            }
        }
    }

    /// A multi-line question is in progress.
    pub fn is_continuing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take whatever is buffered, e.g. at end of input.
    pub fn flush(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}
