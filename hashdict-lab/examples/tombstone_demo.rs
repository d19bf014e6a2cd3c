//! Demo of open addressing with tombstones
//!
//! Demonstrates:
//! - Duplicate rejection
//! - Removing an entry in the middle of a probe chain
//! - Lookups stepping over the tombstone it leaves
//! - Chain statistics of the same data under separate chaining

use hashdict_core::{ChainingTable, HashMethod, ProbingMode, ProbingTable, TableError};

fn main() -> Result<(), TableError> {
    println!("=== Open addressing demo ===\n");

    let mut table = ProbingTable::new(10, ProbingMode::Linear, HashMethod::Division, None)?;

    table.add("1".to_string(), "Kate".to_string())?;
    match table.add("1".to_string(), "Karolina".to_string()) {
        Err(e) => println!("second add of \"1\": {}", e),
        Ok(()) => println!("second add of \"1\" unexpectedly succeeded"),
    }
    table.add("2".to_string(), "Peter".to_string())?;
    table.add("3".to_string(), "Misha".to_string())?;
    println!("slots:   {}", table);

    table.remove(&"2".to_string())?;
    println!("removed \"2\"");
    println!("slots:   {}", table);
    println!("get 2 -> {:?}", table.get(&"2".to_string()));
    println!("get 3 -> {:?}", table.get(&"3".to_string()));
    println!("max cluster: {}", table.max_cluster_length());

    println!("\n=== Separate chaining demo ===\n");
    let mut chained = ChainingTable::new(5, HashMethod::Multiplicative)?;
    for (key, value) in [
        ("Little Prince", "tame me"),
        ("Fox", "what is essential is invisible to the eye"),
        ("Rose", "caterpillars"),
        ("King", "subjects"),
    ] {
        chained.add(key, value)?;
    }
    println!("fill factor: {:.2}", chained.fill_factor());
    println!("chain lengths: {:?}", chained.chain_lengths().collect::<Vec<_>>());
    println!("longest chain: {:?}", chained.max_chain_length());
    println!("Fox says: {}", chained.get(&"Fox").copied().unwrap_or("nothing"));

    Ok(())
}
