//! Answer Sheet
//!
//! Selected choices keyed by item ordinal, independent of rendering order.

use crate::error::QuestionnaireError;
use crate::inventory::{Choice, Subscale, ITEM_COUNT};

/// One choice per item, every item pre-selected to the first choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    choices: [Choice; ITEM_COUNT],
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self { choices: [Choice::default(); ITEM_COUNT] }
    }

    fn slot(ordinal: u8) -> Result<usize, QuestionnaireError> {
        match ordinal as usize {
            n @ 1..=ITEM_COUNT => Ok(n - 1),
            _ => Err(QuestionnaireError::UnknownItem(ordinal)),
        }
    }

    pub fn get(&self, ordinal: u8) -> Result<Choice, QuestionnaireError> {
        Ok(self.choices[Self::slot(ordinal)?])
    }

    pub fn set(&mut self, ordinal: u8, choice: Choice) -> Result<(), QuestionnaireError> {
        self.choices[Self::slot(ordinal)?] = choice;
        Ok(())
    }

    /// The seven choices of a subscale, in item order
    pub fn for_subscale(&self, subscale: Subscale) -> Vec<Choice> {
        subscale
            .ordinals()
            .map(|ordinal| self.choices[ordinal as usize - 1])
            .collect()
    }
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self::new()
    }
}
