//! Structure-aware chunking for JSON values.
//!
//! Character-level chunking is the wrong tool for structured data: a cut
//! can land mid-string or mid-key, and none of the resulting pieces parse
//! on their own. For JSON the natural unit is the array element or the
//! object entry.
//!
//! [`chunk_value`] splits a large array into consecutive sub-arrays and a
//! large object into sub-objects, each holding at most `max_items`
//! elements or entries. Every chunk is a complete, independently valid
//! JSON value:
//!
//! ```rust
//! use serde_json::json;
//!
//! let report = json!([1, 2, 3, 4, 5]);
//! let chunks = wafers::json::chunk_value(&report, 2)?;
//!
//! assert_eq!(chunks, vec![json!([1, 2]), json!([3, 4]), json!([5])]);
//! # Ok::<(), wafers::Error>(())
//! ```
//!
//! Scalars (and anything already within budget) pass through as a single
//! chunk, so callers can feed arbitrary parsed JSON without special-casing
//! the shape.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Split a JSON value into chunks of at most `max_items` elements.
///
/// - Arrays become consecutive sub-arrays of at most `max_items` elements.
/// - Objects become sub-objects of at most `max_items` entries, grouped in
///   map iteration order.
/// - Scalars (null, bool, number, string) become a single one-value chunk.
///
/// An empty array or object yields an empty vector, mirroring how chunking
/// empty text yields no chunks.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `max_items == 0`.
pub fn chunk_value(value: &Value, max_items: usize) -> Result<Vec<Value>> {
    if max_items == 0 {
        return Err(Error::InvalidChunkSize(0));
    }

    let chunks = match value {
        Value::Array(items) => items
            .chunks(max_items)
            .map(|group| Value::Array(group.to_vec()))
            .collect(),
        Value::Object(entries) => {
            let mut chunks = Vec::with_capacity(entries.len().div_ceil(max_items));
            let mut current = Map::new();
            for (key, item) in entries {
                current.insert(key.clone(), item.clone());
                if current.len() == max_items {
                    chunks.push(Value::Object(std::mem::take(&mut current)));
                }
            }
            if !current.is_empty() {
                chunks.push(Value::Object(current));
            }
            chunks
        }
        scalar => vec![scalar.clone()],
    };

    Ok(chunks)
}

/// The number of chunkable items in a JSON value.
///
/// Array length, object entry count, or 1 for a scalar. Useful for deciding
/// whether chunking is needed at all.
#[must_use]
pub fn item_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(entries) => entries.len(),
        _ => 1,
    }
}
