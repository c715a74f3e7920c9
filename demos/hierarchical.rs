//! Dotted keys to nested JSON.
//!
//! Run with: cargo run --example hierarchical

use serde_props::{parse, to_json_string_pretty};
use std::error::Error;

const INPUT: &str = "\
# Database
db.primary.host = db1.internal
db.primary.port = 5432
db.replicas = db2.internal,db3.internal

! Feature flags
features.search = true
features.ratio = 0.25
";

fn main() -> Result<(), Box<dyn Error>> {
    let typed = parse(false, INPUT.as_bytes())?;
    println!("Typed:\n{}\n", to_json_string_pretty(&typed)?);

    // Raw mode keeps strings and nests dotted keys one level only
    let raw = parse(true, INPUT.as_bytes())?;
    println!("Raw:\n{}", to_json_string_pretty(&raw)?);

    Ok(())
}
