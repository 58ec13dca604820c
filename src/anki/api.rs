use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{
    models::CardId,
    Config,
    YomikataError,
};

const ANKI_CONNECT_VERSION: u32 = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub value: String,
    pub order: u32,
}

/// Card detail record from `cardsInfo`. AnkiConnect sends more members than
/// these; only the ones the reconciliation reads are modeled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub card_id: CardId,
    pub fields: HashMap<String, Field>,
    /// 0=new, 1=learning, 2=review, 3=relearning.
    #[serde(rename = "type")]
    pub queue_type: i64,
    /// Days between reviews once the card has graduated.
    pub interval: i64,
}

impl CardInfo {
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.value.as_str())
    }
}

async fn invoke<T: for<'de> Deserialize<'de>>(
    client: &Client,
    config: &Config,
    action: &str,
    params: Option<Value>,
) -> Result<T, YomikataError> {
    let mut body = serde_json::Map::new();
    body.insert("action".to_string(), Value::String(action.to_string()));
    body.insert("version".to_string(), Value::Number(ANKI_CONNECT_VERSION.into()));

    if let Some(params) = params {
        body.insert("params".to_string(), params);
    }

    let text = client
        .post(&config.anki_connect_url)
        .json(&Value::Object(body))
        .send()
        .await?
        .text()
        .await?;

    let response: Value = serde_json::from_str(&text)
        .map_err(|e| YomikataError::malformed("AnkiConnect", e.to_string()))?;
    read_result(response)
}

/// An AnkiConnect reply is an object with exactly the members `result` and
/// `error`. Anything else means we are not talking to AnkiConnect.
fn read_result<T: for<'de> Deserialize<'de>>(response: Value) -> Result<T, YomikataError> {
    let object = response
        .as_object()
        .ok_or_else(|| YomikataError::malformed("AnkiConnect", "response is not an object"))?;

    if object.len() != 2 {
        return Err(YomikataError::malformed(
            "AnkiConnect",
            "response has an unexpected number of fields",
        ));
    }
    let error = object
        .get("error")
        .ok_or_else(|| {
            YomikataError::malformed("AnkiConnect", "response is missing required error field")
        })?;
    let result = object
        .get("result")
        .ok_or_else(|| {
            YomikataError::malformed("AnkiConnect", "response is missing required result field")
        })?;

    if !error.is_null() {
        let message = error.as_str().unwrap_or("unknown error");
        return Err(YomikataError::Custom(format!("AnkiConnect error: {message}")));
    }

    serde_json::from_value(result.clone())
        .map_err(|e| YomikataError::malformed("AnkiConnect", e.to_string()))
}

// Used to check whether AnkiConnect is online.
pub async fn get_version(client: &Client, config: &Config) -> Result<u32, YomikataError> {
    invoke(client, config, "version", None).await
}

pub async fn find_cards(
    client: &Client,
    config: &Config,
    query: &str,
) -> Result<Vec<CardId>, YomikataError> {
    let params = serde_json::json!({ "query": query });
    invoke(client, config, "findCards", Some(params)).await
}

pub async fn cards_info(
    client: &Client,
    config: &Config,
    card_ids: &[CardId],
) -> Result<Vec<CardInfo>, YomikataError> {
    let params = serde_json::json!({ "cards": card_ids });
    invoke(client, config, "cardsInfo", Some(params)).await
}

/// Apply one review grade to one card. Not idempotent: answering twice
/// re-applies the rating.
pub async fn answer_cards(
    client: &Client,
    config: &Config,
    card_id: CardId,
    ease: u8,
) -> Result<(), YomikataError> {
    let params = serde_json::json!({ "answers": [{ "cardId": card_id, "ease": ease }] });
    let answered: Vec<bool> = invoke(client, config, "answerCards", Some(params))
        .await
        .map_err(|e| YomikataError::SubmissionFailed { card_id, reason: e.to_string() })?;

    if answered.first().copied() != Some(true) {
        return Err(YomikataError::SubmissionFailed {
            card_id,
            reason: "card was not answered".to_string(),
        });
    }
    Ok(())
}
