pub mod furigana;

use crate::{
    anki::{
        api::CardInfo,
        state::classify,
    },
    core::{
        models::{
            Card,
            Token,
        },
        YomikataError,
    },
    segmentation::response::RawParse,
};

/// Cross-reference a parse response with the cards fetched for its
/// vocabulary. Produces one card per vocabulary entry and one token list per
/// submitted text, with furigana resolved into ruby spans.
pub fn reconcile(
    parse: &RawParse,
    anki_cards: &[CardInfo],
    word_field: &str,
) -> Result<(Vec<Vec<Token>>, Vec<Card>), YomikataError> {
    let cards: Vec<Card> = parse
        .vocabulary
        .iter()
        .map(|entry| {
            let spelling = entry.spelling();
            // Several cards can share a spelling; the first in source order wins.
            let matched =
                anki_cards.iter().find(|card| card.field_value(word_field) == Some(spelling));

            Card {
                id: matched.map(|card| card.card_id),
                spelling: spelling.to_string(),
                state: classify(matched),
            }
        })
        .collect();

    let tokens = parse
        .tokens
        .iter()
        .map(|segment| {
            segment
                .iter()
                .map(|raw| {
                    let card = cards.get(raw.vocabulary_index()).ok_or_else(|| {
                        YomikataError::malformed(
                            "parse",
                            format!(
                                "token references vocabulary entry {} of {}",
                                raw.vocabulary_index(),
                                cards.len()
                            ),
                        )
                    })?;

                    Ok(Token {
                        start: raw.position(),
                        end: raw.position() + raw.length(),
                        length: raw.length(),
                        card: card.clone(),
                        rubies: furigana::ruby_spans(raw.furigana(), raw.position()),
                    })
                })
                .collect::<Result<Vec<_>, YomikataError>>()
        })
        .collect::<Result<Vec<_>, YomikataError>>()?;

    Ok((tokens, cards))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        anki::api::Field,
        core::models::{
            CardState,
            Ruby,
        },
    };

    fn parse_fixture(json: &str) -> RawParse {
        serde_json::from_str(json).unwrap()
    }

    fn anki_card(card_id: u64, word: &str, queue_type: i64, interval: i64) -> CardInfo {
        let mut fields = HashMap::new();
        fields.insert("Word".to_string(), Field { value: word.to_string(), order: 0 });
        CardInfo { card_id, fields, queue_type, interval }
    }

    #[test]
    fn unmatched_vocabulary_resolves_to_absent_card() {
        // The 食べる example end to end, with an empty collection.
        let parse = parse_fixture(
            r#"{
                "tokens": [[[0, 0, 3, ["食", ["べ", "べ"], "る"]]]],
                "vocabulary": [["食べる"]]
            }"#,
        );

        let (tokens, cards) = reconcile(&parse, &[], "Word").unwrap();

        assert_eq!(
            cards,
            vec![Card { id: None, spelling: "食べる".to_string(), state: CardState::NotInDeck }]
        );
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].len(), 1);

        let token = &tokens[0][0];
        assert_eq!((token.start, token.end, token.length), (0, 3, 3));
        assert_eq!(token.card, cards[0]);
        assert_eq!(
            token.rubies,
            vec![Ruby { text: Some("べ".to_string()), start: 1, end: 2, length: 1 }]
        );
    }

    #[test]
    fn matched_vocabulary_carries_card_id_and_state() {
        let parse = parse_fixture(
            r#"{
                "tokens": [[[0, 0, 3, null], [1, 3, 1, null]]],
                "vocabulary": [["食べる"], ["猫"]]
            }"#,
        );
        let collection = [anki_card(42, "猫", 2, 90)];

        let (tokens, cards) = reconcile(&parse, &collection, "Word").unwrap();

        assert_eq!(cards[0].id, None);
        assert_eq!(cards[0].state, CardState::NotInDeck);
        assert_eq!(cards[1].id, Some(42));
        assert_eq!(cards[1].state, CardState::Known);
        assert_eq!(tokens[0][1].card, cards[1]);
        assert!(tokens[0][0].rubies.is_empty());
    }

    #[test]
    fn first_card_in_source_order_wins() {
        let parse = parse_fixture(r#"{ "tokens": [[]], "vocabulary": [["猫"]] }"#);
        let collection = [anki_card(7, "猫", 0, 0), anki_card(8, "猫", 2, 60)];

        let (_, cards) = reconcile(&parse, &collection, "Word").unwrap();
        assert_eq!(cards[0].id, Some(7));
        assert_eq!(cards[0].state, CardState::New);
    }

    #[test]
    fn nesting_and_counts_mirror_the_parse() {
        // Three texts, the middle one without tokens; four vocabulary
        // entries, none of them in the collection.
        let parse = parse_fixture(
            r#"{
                "tokens": [
                    [[0, 0, 2, null], [1, 2, 3, null]],
                    [],
                    [[2, 0, 1, null], [3, 1, 2, null], [0, 3, 2, null]]
                ],
                "vocabulary": [["一つ"], ["二つ"], ["三"], ["四つ"]]
            }"#,
        );

        let (tokens, cards) = reconcile(&parse, &[], "Word").unwrap();

        assert_eq!(cards.len(), 4);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].len(), 2);
        assert_eq!(tokens[1].len(), 0);
        assert_eq!(tokens[2].len(), 3);
    }

    #[test]
    fn out_of_range_vocabulary_index_is_malformed() {
        let parse = parse_fixture(
            r#"{ "tokens": [[[1, 0, 2, null]]], "vocabulary": [["猫"]] }"#,
        );

        let outcome = reconcile(&parse, &[], "Word");
        assert!(matches!(outcome, Err(YomikataError::MalformedResponse { .. })));
    }

    #[test]
    fn match_uses_the_configured_word_field() {
        let parse = parse_fixture(r#"{ "tokens": [[]], "vocabulary": [["猫"]] }"#);
        let mut fields = HashMap::new();
        fields.insert("Expression".to_string(), Field { value: "猫".to_string(), order: 0 });
        let collection = [CardInfo { card_id: 9, fields, queue_type: 1, interval: 0 }];

        let (_, by_word) = reconcile(&parse, &collection, "Word").unwrap();
        assert_eq!(by_word[0].id, None);

        let (_, by_expression) = reconcile(&parse, &collection, "Expression").unwrap();
        assert_eq!(by_expression[0].id, Some(9));
        assert_eq!(by_expression[0].state, CardState::Learning);
    }
}
