use reqwest::Client;

use super::api::{
    cards_info,
    find_cards,
    CardInfo,
};
use crate::core::{
    models::CardState,
    Config,
    YomikataError,
};

/// Review intervals above this many days count as known.
pub const KNOWN_INTERVAL_DAYS: i64 = 30;

/// Map a card record, or its absence, onto the annotation state.
///
/// Type codes outside 0..=3 classify the same as a missing card, so a newer
/// Anki schema degrades to an unannotated word instead of an error.
pub fn classify(card: Option<&CardInfo>) -> CardState {
    match card {
        None => CardState::NotInDeck,
        Some(card) => match card.queue_type {
            0 => CardState::New,
            1 | 3 => CardState::Learning,
            2 if card.interval > KNOWN_INTERVAL_DAYS => CardState::Known,
            2 => CardState::Due,
            _ => CardState::NotInDeck,
        },
    }
}

/// Fetch every card whose word field matches one of `spellings`, in a single
/// findCards + cardsInfo round trip. Source order is preserved so that the
/// first match wins downstream.
pub async fn matching_cards(
    client: &Client,
    config: &Config,
    spellings: &[&str],
) -> Result<Vec<CardInfo>, YomikataError> {
    if spellings.is_empty() {
        return Ok(Vec::new());
    }

    let query = card_query(&config.word_field, spellings);
    let card_ids = find_cards(client, config, &query).await?;
    if card_ids.is_empty() {
        return Ok(Vec::new());
    }

    cards_info(client, config, &card_ids).await
}

pub fn card_query(field: &str, spellings: &[&str]) -> String {
    spellings
        .iter()
        .map(|spelling| query_term(field, spelling))
        .collect::<Vec<_>>()
        .join(" OR ")
}

fn query_term(field: &str, spelling: &str) -> String {
    if spelling.contains(' ') || spelling.contains(':') || spelling.contains('"') {
        format!("{}:\"{}\"", field, spelling.replace('"', "\\\""))
    } else {
        format!("{}:{}", field, spelling)
    }
}
