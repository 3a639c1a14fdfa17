//! # wafers
//!
//! Chunking oversized inputs down to pieces that fit an LLM context window.
//!
//! ## The Problem
//!
//! Language models have context limits. A multi-megabyte JSON report or a
//! long document doesn't fit. Feeding it in anyway truncates silently or
//! errors loudly; either way the model never sees most of the data.
//!
//! The workable pattern is to split the input into bounded pieces, process
//! each piece in its own call, and merge the per-piece results. This crate
//! provides the splitting half:
//!
//! - **Fixed-size text chunking** with overlap, so context at chunk
//!   boundaries isn't lost between calls.
//! - **JSON value chunking**, which splits a large array or object into
//!   groups of at most N items/keys instead of cutting raw text mid-value.
//! - **Character-safe truncation**, for the cruder "just take the first
//!   N characters" budget cap.
//!
//! ## Fixed-Size Chunking
//!
//! Split every N characters with M characters of overlap:
//!
//! ```text
//! size = 4, overlap = 1
//!
//! Document: "abcdefghij"
//!
//! Chunk 0: "abcd"   [0..4]
//! Chunk 1: "defg"   [3..7]   <- starts one char back, repeating "d"
//! Chunk 2: "ghij"   [6..10]  <- final chunk ends the scan
//! ```
//!
//! Why overlap? Without it, information straddling a boundary is split
//! across two chunks and neither sees it whole:
//!
//! ```text
//! "The answer is 42"
//!         ↓
//! No overlap:   ["The answer i", "s 42"]            <- broken!
//! With overlap: ["The answer is", "answer is 42"]   <- both have context
//! ```
//!
//! A common heuristic is 10-20% overlap (e.g. size=500, overlap=50-100).
//!
//! ## JSON Chunking
//!
//! Character-level splitting is wrong for structured data: it cuts strings
//! mid-escape and objects mid-key, and no piece parses on its own. For JSON
//! the unit is the array element or object entry:
//!
//! ```text
//! [r1, r2, r3, r4, r5]  with max_items = 2
//!
//! Chunk 0: [r1, r2]
//! Chunk 1: [r3, r4]
//! Chunk 2: [r5]
//! ```
//!
//! Every chunk is itself valid JSON and can be serialized and analyzed
//! independently.
//!
//! ## Quick Start
//!
//! ```rust
//! use wafers::FixedChunker;
//!
//! let text = "The quick brown fox jumps over the lazy dog. \
//!             Pack my box with five dozen liquor jugs.";
//!
//! let chunker = FixedChunker::new(50, 10)?;
//! for chunk in chunker.chunk(text) {
//!     println!("[{}..{}] {}", chunk.start, chunk.end, chunk.text);
//! }
//! # Ok::<(), wafers::Error>(())
//! ```
//!
//! Parameters are validated up front: a zero size or an overlap that is not
//! strictly smaller than the size would stall the scan, so `new` rejects
//! them with [`Error`] instead of looping forever.
//!
//! ```rust
//! use wafers::FixedChunker;
//!
//! assert!(FixedChunker::new(3, 3).is_err()); // overlap must be < size
//! assert!(FixedChunker::new(0, 0).is_err()); // size must be > 0
//! ```

mod chunk;
mod error;
mod fixed;
pub mod json;
mod truncate;

pub use chunk::Chunk;
pub use error::{Error, Result};
pub use fixed::FixedChunker;
pub use truncate::truncate_chars;
