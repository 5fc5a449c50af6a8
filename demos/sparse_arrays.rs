//! Array traversal modes: opaque, indexed, and zero-padded.
//!
//! Run with: cargo run --example sparse_arrays

use sparsekey::{nested, sparse, unsparse, ArrayMode, SparseOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = nested!({
        "foo": ["bar", "baz", { "bingo": "baby" }]
    });
    let map = tree.as_object().expect("object literal");

    // By default, arrays are opaque leaf values
    println!("Opaque (default):");
    for (key, value) in sparse(map, &SparseOptions::default()).iter() {
        println!("  {} = {}", key, value);
    }

    // Indexed mode descends into arrays by position
    println!("\nIndexed:");
    let options = SparseOptions::new().with_sparse_array(ArrayMode::Indexed);
    let flat = sparse(map, &options);
    for (key, value) in flat.iter() {
        println!("  {} = {}", key, value);
    }
    assert_eq!(&unsparse(&flat, &options)?, map);

    // Zero-padded indices sort lexically even past ten elements
    let long = nested!({
        "xs": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    });
    println!("\nZero-padded:");
    let options = SparseOptions::new().with_sparse_array(ArrayMode::ZeroPadded);
    for (key, value) in sparse(long.as_object().unwrap(), &options).iter() {
        println!("  {} = {}", key, value);
    }

    Ok(())
}
