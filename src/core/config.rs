use serde::{
    Deserialize,
    Serialize,
};

pub const CONFIG_FILE: &str = "config.json";

/// Everything the annotation entry points need from the environment. Passed
/// explicitly into every call; there is no process-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bearer token for the parse API. Parsing fails without one.
    pub api_token: Option<String>,
    pub parse_endpoint: String,
    pub anki_connect_url: String,
    /// Note field holding the written form, used to match vocabulary
    /// spellings against the collection.
    pub word_field: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            parse_endpoint: "https://jpdb.io/api/v1/parse".to_string(),
            anki_connect_url: "http://127.0.0.1:8765/".to_string(),
            word_field: "Word".to_string(),
            timeout_secs: 120,
        }
    }
}
