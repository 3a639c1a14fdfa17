//! Basic Chunking
//!
//! The minimal example: split a document into context-sized pieces.
//!
//! ```bash
//! cargo run --example basic_chunking
//! ```

use serde_json::json;
use wafers::{json as json_chunking, FixedChunker};

fn main() -> Result<(), wafers::Error> {
    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    // Fixed-size chunks, 80 chars each, 15 chars of overlap
    let chunker = FixedChunker::new(80, 15)?;
    let chunks = chunker.chunk(document);

    println!("Document: {} chars", document.len());
    println!("Chunks: {}\n", chunks.len());

    for chunk in &chunks {
        println!("[{}] {} chars: \"{}\"", chunk.index, chunk.len(), chunk.text);
    }

    // A large JSON report splits by records, not characters, so every
    // piece stays valid JSON.
    let report = json!([
        {"id": 1, "severity": "high"},
        {"id": 2, "severity": "low"},
        {"id": 3, "severity": "medium"},
    ]);
    let pieces = json_chunking::chunk_value(&report, 2)?;

    println!("\nJSON report in {} pieces:", pieces.len());
    for piece in &pieces {
        println!("  {piece}");
    }

    Ok(())
}
