//! Reading properties straight into Rust types.
//!
//! Run with: cargo run --example typed_config

use serde::Deserialize;
use serde_props::from_str;
use std::error::Error;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Deserialize)]
struct Logging {
    level: Level,
    file: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Http {
    port: u16,
    origins: Vec<String>,
    timeout: f64,
}

#[derive(Debug, Deserialize)]
struct Config {
    logging: Logging,
    http: Http,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config: Config = from_str(
        "logging.level = warn\n\
         http.port = 8080\n\
         http.origins = https://a.example,https://b.example\n\
         http.timeout = 2.5\n",
    )?;

    println!("{:#?}", config);
    assert!(matches!(config.logging.level, Level::Warn));
    assert!(config.logging.file.is_none());
    assert_eq!(config.http.origins.len(), 2);
    println!("✓ Typed config loaded");

    Ok(())
}
