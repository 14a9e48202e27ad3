//! Questionnaire Inventory
//!
//! The fixed 21-item DASS inventory, its three subscales and the
//! four-label answer scale.

use serde::{Deserialize, Serialize};

/// Number of items per subscale
pub const ITEMS_PER_SUBSCALE: usize = 7;

/// Total number of items
pub const ITEM_COUNT: usize = ITEMS_PER_SUBSCALE * Subscale::ALL.len();

/// Item prompts in display order
pub const QUESTIONS: [&str; ITEM_COUNT] = [
    // Depression
    "I felt that I had nothing to look forward to",
    "I was unable to become enthusiastic about anything",
    "I feel like I am not worth anything as a person",
    "I believe that life is meaningless",
    "I couldn’t seem to experience any positive feelings at all",
    "I found it difficult to work up the initiative to do things",
    "I was downhearted and blue",
    // Anxiety
    "I was aware of dryness of my mouth",
    "I experienced breathing difficulty (e.g. excessively rapid breathing, breathlessness in the absence of physical exertion)",
    "I experienced trembling (e.g. in the hands)",
    "I was worried about situations in which I might panic and make a fool of myself",
    "I felt I was close to panic",
    "I was aware of the action of my heart in the absence of physical exertion (e.g. sense of heart rate increase, heart missing a beat)",
    "I felt scared without any good reason",
    // Stress
    "I found it hard to wind down",
    "I tended to over-react to situations",
    "I felt that I was using a lot of nervous energy",
    "I found myself getting agitated",
    "I found it difficult to relax",
    "I was intolerant of anything that kept me from getting on with what I was doing",
    "I felt that I was rather touchy",
];

// ========================
// Subscale
// ========================

/// One of the three symptom categories. Each one is also a display group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subscale {
    Depression,
    Anxiety,
    Stress,
}

impl Subscale {
    /// Display order
    pub const ALL: [Subscale; 3] = [Subscale::Depression, Subscale::Anxiety, Subscale::Stress];

    pub fn index(self) -> usize {
        match self {
            Subscale::Depression => 0,
            Subscale::Anxiety => 1,
            Subscale::Stress => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Category name as used by the analysis service
    pub fn label(self) -> &'static str {
        match self {
            Subscale::Depression => "Depression",
            Subscale::Anxiety => "Anxiety",
            Subscale::Stress => "Stress",
        }
    }

    /// Item ordinals belonging to this subscale
    pub fn ordinals(self) -> std::ops::RangeInclusive<u8> {
        let first = (self.index() * ITEMS_PER_SUBSCALE) as u8 + 1;
        first..=first + ITEMS_PER_SUBSCALE as u8 - 1
    }
}

// ========================
// Choice
// ========================

/// Frequency answer. The numeric 0-3 mapping is owned by the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Choice {
    #[default]
    Never,
    Sometimes,
    Often,
    #[serde(rename = "Very Often")]
    VeryOften,
}

impl Choice {
    /// Scale order, matching the order of the options in a selector
    pub const ALL: [Choice; 4] = [Choice::Never, Choice::Sometimes, Choice::Often, Choice::VeryOften];

    pub fn label(self) -> &'static str {
        match self {
            Choice::Never => "Never",
            Choice::Sometimes => "Sometimes",
            Choice::Often => "Often",
            Choice::VeryOften => "Very Often",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ========================
// Item / Questionnaire
// ========================

/// A single inventory item. Only [`Questionnaire`] creates them, so the
/// ordinal is always within 1..=21.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    ordinal: u8,
    prompt: &'static str,
    subscale: Subscale,
}

impl Item {
    /// 1-based position
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Group assignment is purely positional
    pub fn subscale(&self) -> Subscale {
        self.subscale
    }

    /// Numbered label as shown above the selector
    pub fn label(&self) -> String {
        format!("{}. {}", self.ordinal, self.prompt)
    }
}

/// The ordered, immutable list of items
#[derive(Debug, Clone)]
pub struct Questionnaire {
    items: Vec<Item>,
}

impl Questionnaire {
    pub fn new() -> Self {
        let items = Subscale::ALL
            .into_iter()
            .flat_map(|subscale| subscale.ordinals().map(move |ordinal| (ordinal, subscale)))
            .zip(QUESTIONS)
            .map(|((ordinal, subscale), prompt)| Item { ordinal, prompt, subscale })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, ordinal: u8) -> Option<&Item> {
        (ordinal as usize).checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn subscale_items(&self, subscale: Subscale) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.subscale() == subscale)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_partition() {
        let q = Questionnaire::new();
        assert_eq!(q.items().len(), 21);
        for item in q.items() {
            let expected = match item.ordinal() {
                1..=7 => Subscale::Depression,
                8..=14 => Subscale::Anxiety,
                _ => Subscale::Stress,
            };
            assert_eq!(item.subscale(), expected, "item {}", item.ordinal());
        }
    }

    #[test]
    fn test_items_cover_every_ordinal_once() {
        let q = Questionnaire::new();
        let ordinals: Vec<u8> = q.items().iter().map(Item::ordinal).collect();
        assert_eq!(ordinals, (1..=21).collect::<Vec<u8>>());
        assert_eq!(q.get(15).map(Item::subscale), Some(Subscale::Stress));
        assert_eq!(q.get(15).map(Item::prompt), Some(QUESTIONS[14]));
    }

    #[test]
    fn test_subscale_items_keep_order() {
        let q = Questionnaire::new();
        let ordinals: Vec<u8> = q.subscale_items(Subscale::Anxiety).map(Item::ordinal).collect();
        assert_eq!(ordinals, (8..=14).collect::<Vec<u8>>());
        assert_eq!(Subscale::Stress.ordinals(), 15..=21);
    }

    #[test]
    fn test_item_label_is_numbered() {
        let q = Questionnaire::new();
        assert_eq!(q.get(1).unwrap().label(), "1. I felt that I had nothing to look forward to");
        assert!(q.get(21).unwrap().label().starts_with("21. "));
        assert!(q.get(0).is_none());
        assert!(q.get(22).is_none());
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(Choice::default(), Choice::Never);
        assert_eq!(Choice::from_label("Very Often"), Some(Choice::VeryOften));
        assert_eq!(Choice::from_label("always"), None);
        assert_eq!(serde_json::to_string(&Choice::VeryOften).unwrap(), "\"Very Often\"");
    }
}
