//! Driving the processor from a JSON configuration object.
//!
//! Run with: cargo run --example processor

use serde_json::json;
use serde_props::{to_json_string, PropertiesProcessor};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let processor = PropertiesProcessor::new();
    let input = b"cache.size=128\ncache.ttl=30s\n";

    for config in [
        json!({}),
        json!({"raw-data": true}),
        json!({"hierarchical": true}),
        json!({"hierarchical": true, "raw-data": true}),
    ] {
        let doc = processor.process(&config, input)?;
        println!("{:<45} -> {}", config.to_string(), to_json_string(&doc)?);
    }

    Ok(())
}
