//! Partial re-nesting of a flat map with expand.
//!
//! Run with: cargo run --example expanding

use sparsekey::{expand, expand_in_place, nested, SparseOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let flat = nested!({
        "foo.bar.baz": "bingo",
        "foo.bar.whee": {},
        "asdf": "qwer"
    })
    .into_object()
    .expect("object literal");
    let options = SparseOptions::default();

    // Collapse just the foo.bar branch; asdf stays flat
    let expanded = expand(&flat, "foo.bar", &options)?;
    println!("After expand(\"foo.bar\"):");
    for (key, value) in expanded.iter() {
        println!("  {} = {}", key, value);
    }

    // Expanding an address that is already an exact key is a no-op
    let unchanged = expand(&flat, "foo.bar.baz", &options)?;
    assert_eq!(unchanged, flat);
    println!("\n✓ expand of an exact key is a no-op");

    // The in-place variant replaces the receiver's contents
    let mut mutable = flat.clone();
    expand_in_place(&mut mutable, "foo.bar", &options)?;
    assert!(mutable.contains_key("foo.bar"));
    assert!(!mutable.contains_key("foo.bar.baz"));
    println!("✓ expand_in_place rewrote the receiver");

    Ok(())
}
