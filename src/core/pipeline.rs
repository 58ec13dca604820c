use std::time::{
    Duration,
    Instant,
};

use reqwest::Client;

use crate::{
    anki::{
        api::answer_cards,
        state::matching_cards,
    },
    core::{
        models::{
            Annotation,
            CardId,
            Grade,
        },
        Config,
        YomikataError,
    },
    reconcile::reconcile,
    segmentation::client::parse_texts,
};

/// Suggested minimum delay between parse calls. Reported with every
/// annotation; enforcement is the caller's job.
pub const API_RATE_LIMIT: Duration = Duration::from_millis(200);

/// Annotate `texts`: one parse request, one batched card lookup, then
/// reconciliation. The lookup needs the parsed vocabulary, so the two
/// requests are sequential. No state is shared between calls.
pub async fn annotate(
    client: &Client,
    config: &Config,
    texts: &[String],
) -> Result<Annotation, YomikataError> {
    let start = Instant::now();

    let parse = parse_texts(client, config, texts).await?;
    println!(
        "Parsed {} texts into {} vocabulary entries ({:.2}s)",
        texts.len(),
        parse.vocabulary.len(),
        start.elapsed().as_secs_f32()
    );

    let spellings: Vec<&str> = parse.vocabulary.iter().map(|entry| entry.spelling()).collect();
    let lookup_start = Instant::now();
    let anki_cards = matching_cards(client, config, &spellings).await?;
    println!(
        "Card lookup matched {} cards ({:.2}s)",
        anki_cards.len(),
        lookup_start.elapsed().as_secs_f32()
    );

    let (tokens, cards) = reconcile(&parse, &anki_cards, &config.word_field)?;

    Ok(Annotation { tokens, cards, rate_limit: API_RATE_LIMIT })
}

/// Submit one review grade for a card found by an earlier annotation.
/// Returns the suggested delay before the next call.
pub async fn submit_review(
    client: &Client,
    config: &Config,
    card_id: CardId,
    grade: Grade,
) -> Result<Duration, YomikataError> {
    answer_cards(client, config, card_id, grade.ease()).await?;
    Ok(Duration::ZERO)
}
