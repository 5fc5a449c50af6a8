//! Basic flattening, re-nesting, and sparse-key fetching.
//!
//! Run with: cargo run --example basics

use serde::Serialize;
use sparsekey::{sparse, sparse_fetch, sparse_get, to_value, unsparse, SparseOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    server: Server,
}

#[derive(Debug, Serialize)]
struct Server {
    host: String,
    port: u16,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        server: Server {
            host: "localhost".to_string(),
            port: 8080,
        },
    };

    // Bring any Serialize type into the codec
    let tree = to_value(&config)?;
    let map = tree.as_object().expect("structs become objects");
    let options = SparseOptions::default();

    // Flatten to sparse form
    let flat = sparse(map, &options);
    println!("Sparse form:");
    for (key, value) in flat.iter() {
        println!("  {} = {}", key, value);
    }

    // Re-nest
    let back = unsparse(&flat, &options)?;
    assert_eq!(&back, map);
    println!("✓ Round-trip successful\n");

    // Fetch by sparse key without flattening
    let host = sparse_fetch(map, "server.host", &options)?;
    println!("server.host = {}", host);

    // sparse_get never fails
    assert!(sparse_get(map, "server.nope", &options).is_none());
    println!("server.nope is absent");

    Ok(())
}
