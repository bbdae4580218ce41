//! Example: keeping a wordlist in a trie.
//!
//! Adds a handful of words, including some that hold the terminator and are
//! rejected, then looks words and prefixes up and removes a few again.
//!
//! Run with: RUST_LOG=libtrie=trace cargo run --example wordlist

use libtrie::{AddError, Trie};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut trie = Trie::new('*');

    // Adding words
    println!("Adding words:");
    for word in ["BAKE", "BAKED", "BAKER", "CAKE", "BA*KE", "CAKE", "LAKE*"] {
        let outcome = match trie.try_add(word) {
            Ok(()) => "added".to_string(),
            Err(AddError::AlreadyPresent) => "already present".to_string(),
            Err(err) => format!("rejected ({err})"),
        };
        println!("  {word}: {outcome}");
    }

    // Word lookup
    println!("\nWord lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "BA"] {
        println!("  {word}: {}", if trie.contains(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "LA", "MA"] {
        println!("  {prefix}*: {}", if trie.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Removing words
    println!("\nRemoving BAKER and BAKED:");
    trie.delete("BAKER");
    trie.delete("BAKED");
    println!("  BAKE: {}", trie.contains("BAKE"));
    println!("  BAKER: {}", trie.contains("BAKER"));
    println!("  {trie:?}");
    let pruned = trie.prune();
    println!("  pruned {pruned} nodes, {trie:?}");
}
