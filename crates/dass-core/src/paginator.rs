//! Group Paginator
//!
//! Shows one subscale group at a time. Advancing past the last group
//! wraps back to the first one and signals that the sheet is due for
//! submission.

use crate::inventory::Subscale;

/// Result of advancing the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved forward to a later group
    Moved(Subscale),
    /// Was on the last group; reset to the first one, submission due
    Wrapped,
}

/// Styling of the return control, derived from the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStyle {
    /// On the first group, nothing to return to
    Inactive,
    Active,
}

/// Current group index, always in `[0, 2]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paginator {
    index: usize,
}

impl Paginator {
    const LAST: usize = Subscale::ALL.len() - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Subscale {
        Subscale::ALL[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == Self::LAST
    }

    pub fn advance(&mut self) -> Step {
        if self.index < Self::LAST {
            self.index += 1;
            Step::Moved(self.current())
        } else {
            self.index = 0;
            Step::Wrapped
        }
    }

    /// Returns false at the first group, where nothing changes
    pub fn retreat(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Label of the advance control
    pub fn action_label(&self) -> &'static str {
        if self.is_last() {
            "SUBMIT"
        } else {
            "NEXT"
        }
    }

    pub fn return_style(&self) -> ReturnStyle {
        if self.index == 0 {
            ReturnStyle::Inactive
        } else {
            ReturnStyle::Active
        }
    }
}
