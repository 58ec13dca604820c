use reqwest::Client;
use serde_json::json;

use crate::{
    core::{
        utils::truncate_chars,
        Config,
        YomikataError,
    },
    segmentation::response::{
        ApiErrorBody,
        RawParse,
        TOKEN_FIELDS,
        VOCABULARY_FIELDS,
    },
};

/// Characters of input echoed back in a segmentation error.
const PREVIEW_CHARS: usize = 20;

/// Submit `texts` to the parse endpoint. One request per call, no retry;
/// any non-2xx reply is authoritative failure.
pub async fn parse_texts(
    client: &Client,
    config: &Config,
    texts: &[String],
) -> Result<RawParse, YomikataError> {
    let token = config
        .api_token
        .as_deref()
        .ok_or_else(|| YomikataError::Custom("API token is not configured".to_string()))?;

    let body = json!({
        "text": texts,
        "position_length_encoding": "utf16",
        "token_fields": TOKEN_FIELDS,
        "vocabulary_fields": VOCABULARY_FIELDS,
    });

    let response =
        client.post(&config.parse_endpoint).bearer_auth(token).json(&body).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(error) => error.error_message,
            Err(_) => format!("HTTP {status}"),
        };
        return Err(YomikataError::SegmentationFailed {
            message,
            preview: truncate_chars(&texts.join(" "), PREVIEW_CHARS),
        });
    }

    serde_json::from_str(&body).map_err(|e| YomikataError::malformed("parse", e.to_string()))
}
