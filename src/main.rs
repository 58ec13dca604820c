use std::env;

use yomikata::{
    anki::api::get_version,
    annotate,
    core::{
        config::CONFIG_FILE,
        http::http_client,
    },
    persistence::load_json_or_default,
    Config,
};

#[tokio::main]
async fn main() {
    let texts: Vec<String> = env::args().skip(1).collect();
    if texts.is_empty() {
        eprintln!("Usage: yomikata <sentence> [sentence ...]");
        std::process::exit(2);
    }

    let config: Config = load_json_or_default(CONFIG_FILE);

    let client = match http_client(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match get_version(&client, &config).await {
        Ok(version) => println!("AnkiConnect is online. Version: {}", version),
        Err(e) => {
            eprintln!("AnkiConnect is unreachable: {e}");
            std::process::exit(1);
        }
    }

    match annotate(&client, &config, &texts).await {
        Ok(annotation) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&annotation)
                    .expect("annotation serializes to JSON")
            );
            println!(
                "Suggested delay before the next call: {}ms",
                annotation.rate_limit.as_millis()
            );
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
