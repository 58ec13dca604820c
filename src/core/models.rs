use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

/// Card identifier in the Anki collection. Only value that outlives a single
/// annotation call; feed it back into [`crate::submit_review`].
pub type CardId = u64;

/// Review state of one vocabulary entry, derived from the coarse queue
/// encoding of the local collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardState {
    New,
    Learning,
    Known,
    Due,
    NotInDeck,
}

/// The learner's relationship to one vocabulary entry. Built fresh on every
/// annotation call, never deduplicated across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// `None` when no card in the collection matches the spelling.
    pub id: Option<CardId>,
    pub spelling: String,
    pub state: CardState,
}

/// One furigana span, addressed in UTF-16 code units of the submitted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruby {
    /// `None` means the base text is shown without an override reading.
    pub text: Option<String>,
    pub start: u32,
    pub end: u32,
    pub length: u32,
}

/// A contiguous span of the submitted text, linked to its resolved card.
/// `rubies` is ordered, non-overlapping and strictly increasing in `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub start: u32,
    pub end: u32,
    pub length: u32,
    pub card: Card,
    pub rubies: Vec<Ruby>,
}

/// Review grade on AnkiConnect's ease scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
}

impl Grade {
    /// The scale is non-contiguous: 3 is never sent.
    pub fn ease(self) -> u8 {
        match self {
            Grade::Again => 1,
            Grade::Hard => 2,
            Grade::Good => 4,
            Grade::Easy => 5,
        }
    }
}

/// Result of one annotation call. Token nesting mirrors the submitted text
/// list 1:1; `cards` has one entry per vocabulary entry in the parse.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub tokens: Vec<Vec<Token>>,
    pub cards: Vec<Card>,
    /// Suggested minimum delay before the next outbound call. Reported, not
    /// enforced.
    pub rate_limit: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_ease_scale_skips_three() {
        assert_eq!(Grade::Again.ease(), 1);
        assert_eq!(Grade::Hard.ease(), 2);
        assert_eq!(Grade::Good.ease(), 4);
        assert_eq!(Grade::Easy.ease(), 5);

        for grade in [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy] {
            assert_ne!(grade.ease(), 3);
        }
    }

    #[test]
    fn card_state_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&CardState::NotInDeck).unwrap(), "\"not-in-deck\"");
        assert_eq!(serde_json::to_string(&CardState::New).unwrap(), "\"new\"");
        assert_eq!(
            serde_json::from_str::<CardState>("\"known\"").unwrap(),
            CardState::Known
        );
    }
}
