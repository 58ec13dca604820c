use std::time::Duration;

use reqwest::Client;

use crate::core::{
    Config,
    YomikataError,
};

pub fn http_client(config: &Config) -> Result<Client, YomikataError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| YomikataError::Custom(format!("HTTP client build failed: {e}")))
}
