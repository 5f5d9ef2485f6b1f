//! Segmented numeric code input.
//!
//! The collector owns one optional digit per cell plus the index of the
//! focused cell. The DOM only mirrors this state, so every keystroke,
//! paste or click is routed through the methods below.

/// Key presses the collector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpKey {
    Char(char),
    Backspace,
    ArrowLeft,
    ArrowRight,
    Enter,
}

impl OtpKey {
    /// Maps a `KeyboardEvent.key` value. Unhandled keys yield `None`.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(OtpKey::Backspace),
            "ArrowLeft" => Some(OtpKey::ArrowLeft),
            "ArrowRight" => Some(OtpKey::ArrowRight),
            "Enter" => Some(OtpKey::Enter),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(OtpKey::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorOutcome {
    Updated,
    Ignored,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCollector {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl OtpCollector {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len.max(1)],
            focus: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.last_index());
    }

    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.focus = 0;
    }

    /// Stores `digit` in `index` and moves focus to the next cell.
    pub fn type_digit(&mut self, index: usize, digit: char) -> CollectorOutcome {
        if !digit.is_ascii_digit() || index >= self.cells.len() {
            return CollectorOutcome::Ignored;
        }
        self.cells[index] = Some(digit);
        self.focus = (index + 1).min(self.last_index());
        CollectorOutcome::Updated
    }

    /// Handles the value an `input` event left in cell `index`.
    ///
    /// Browsers may leave more than one character in the field, the most
    /// recent keystroke is the last one. An emptied field clears the cell.
    pub fn input_value(&mut self, index: usize, value: &str) -> CollectorOutcome {
        if index >= self.cells.len() {
            return CollectorOutcome::Ignored;
        }
        match value.chars().last() {
            None => {
                if self.cells[index].take().is_some() {
                    self.focus = index;
                    CollectorOutcome::Updated
                } else {
                    CollectorOutcome::Ignored
                }
            }
            Some(c) => self.type_digit(index, c),
        }
    }

    pub fn key(&mut self, key: OtpKey) -> CollectorOutcome {
        match key {
            OtpKey::Char(c) => self.type_digit(self.focus, c),
            OtpKey::Backspace => self.backspace(),
            OtpKey::ArrowLeft => {
                if self.focus == 0 {
                    return CollectorOutcome::Ignored;
                }
                self.focus -= 1;
                CollectorOutcome::Updated
            }
            OtpKey::ArrowRight => {
                if self.focus >= self.last_index() {
                    return CollectorOutcome::Ignored;
                }
                self.focus += 1;
                CollectorOutcome::Updated
            }
            OtpKey::Enter => CollectorOutcome::Submit,
        }
    }

    fn backspace(&mut self) -> CollectorOutcome {
        if self.cells[self.focus].take().is_some() {
            return CollectorOutcome::Updated;
        }
        if self.focus == 0 {
            return CollectorOutcome::Ignored;
        }
        self.focus -= 1;
        self.cells[self.focus] = None;
        CollectorOutcome::Updated
    }

    /// Spreads the digits of `text` forward from the focused cell.
    pub fn paste(&mut self, text: &str) -> CollectorOutcome {
        let start = self.focus;
        let mut last = None;
        for (index, digit) in (start..self.cells.len()).zip(text.chars().filter(char::is_ascii_digit)) {
            self.cells[index] = Some(digit);
            last = Some(index);
        }
        match last {
            Some(index) => {
                self.focus = index;
                CollectorOutcome::Updated
            }
            None => CollectorOutcome::Ignored,
        }
    }
}
