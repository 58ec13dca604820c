use serde::Deserialize;

// Positional field sets sent with the parse request. The raw types below
// decode the response in the same order, so both must change together.
pub const TOKEN_FIELDS: [&str; 4] = ["vocabulary_index", "position", "length", "furigana"];
pub const VOCABULARY_FIELDS: [&str; 1] = ["spelling"];

/// One segment of a furigana annotation: plain text advances the offset
/// cursor, an annotated pair carries a reading over its base text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FuriganaPart {
    Plain(String),
    Annotated(String, String),
}

/// Token row as returned by the parse endpoint: a positional array matching
/// `TOKEN_FIELDS`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawToken(usize, u32, u32, Option<Vec<FuriganaPart>>);

impl RawToken {
    pub fn vocabulary_index(&self) -> usize {
        self.0
    }

    pub fn position(&self) -> u32 {
        self.1
    }

    pub fn length(&self) -> u32 {
        self.2
    }

    pub fn furigana(&self) -> Option<&[FuriganaPart]> {
        self.3.as_deref()
    }
}

/// Vocabulary row, a positional array matching `VOCABULARY_FIELDS`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVocabulary((String,));

impl RawVocabulary {
    pub fn spelling(&self) -> &str {
        &self.0 .0
    }
}

/// Successful parse response: one token list per submitted text, plus one
/// vocabulary list shared across all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParse {
    pub tokens: Vec<Vec<RawToken>>,
    pub vocabulary: Vec<RawVocabulary>,
}

/// Body of a non-2xx parse response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub error_message: String,
}
