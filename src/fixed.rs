//! Fixed-size chunking with overlap.
//!
//! The simplest chunking strategy: emit at most N characters per chunk,
//! rewinding M characters between chunks so adjacent chunks share context.
//!
//! ## How It Works
//!
//! A cursor scans left to right. Each step takes up to `size` characters,
//! emits them, and moves the cursor back `overlap` characters from the end
//! of the emitted chunk:
//!
//! ```text
//! size = 10, overlap = 3
//!
//! Document: "abcdefghijklmnopqrstuvwxyz"
//!
//! Chunk 0: "abcdefghij"   [0..10]
//! Chunk 1: "hijklmnopq"   [7..17]   <- starts at 10 - 3 = 7
//! Chunk 2: "opqrstuvwx"   [14..24]  <- starts at 17 - 3 = 14
//! Chunk 3: "vwxyz"        [21..26]  <- final chunk may be shorter
//! ```
//!
//! The scan terminates when a chunk's end reaches the end of the text, so
//! every character is covered and the final chunk is never empty.
//!
//! ## Characters, Not Bytes
//!
//! `size` and `overlap` count `char`s. Chunk boundaries therefore always
//! land on UTF-8 character boundaries, and multi-byte text chunks without
//! panicking. The offsets recorded on each [`Chunk`] are byte offsets, per
//! Rust slicing convention.

use crate::{Chunk, Error, Result};

/// Fixed-size chunker with configurable overlap.
///
/// ## Example
///
/// ```rust
/// use wafers::FixedChunker;
///
/// let chunker = FixedChunker::new(4, 1)?;
/// let chunks = chunker.chunk("abcdefghij");
///
/// let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, ["abcd", "defg", "ghij"]);
/// # Ok::<(), wafers::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FixedChunker {
    size: usize,
    overlap: usize,
}

impl FixedChunker {
    /// Create a new fixed-size chunker.
    ///
    /// # Arguments
    ///
    /// * `size` - Maximum chunk size in characters
    /// * `overlap` - Characters repeated between adjacent chunks
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size == 0` and
    /// [`Error::OverlapExceedsSize`] if `overlap >= size`. Either would
    /// leave the scan cursor unable to advance.
    pub fn new(size: usize, overlap: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize(size));
        }
        if overlap >= size {
            return Err(Error::OverlapExceedsSize { size, overlap });
        }
        Ok(Self { size, overlap })
    }

    /// Create a chunker with no overlap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size == 0`.
    pub fn no_overlap(size: usize) -> Result<Self> {
        Self::new(size, 0)
    }

    /// The configured maximum chunk size in characters.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The configured overlap in characters.
    #[must_use]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split text into chunks.
    ///
    /// Every character of the input appears in at least one chunk, chunks
    /// are emitted in source order, and consecutive chunks share exactly
    /// `overlap` characters (except possibly at the final chunk, which may
    /// be shorter). Empty input yields an empty vector.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return vec![];
        }

        let mut chunks = Vec::with_capacity(self.estimate_chunks(text.len()));
        let mut cursor = 0; // byte offset, always on a char boundary
        let mut index = 0;

        while cursor < text.len() {
            // End of the next `size` characters, clamped to the text length
            let end = match text[cursor..].char_indices().nth(self.size) {
                Some((offset, _)) => cursor + offset,
                None => text.len(),
            };

            chunks.push(Chunk::new(&text[cursor..end], cursor, end, index));
            index += 1;

            // The end-of-text check is the sole stop condition; before it
            // fires every chunk holds exactly `size` characters, so the
            // rewind below always advances the cursor.
            if end == text.len() {
                break;
            }

            let rewind: usize = text[cursor..end]
                .chars()
                .rev()
                .take(self.overlap)
                .map(char::len_utf8)
                .sum();
            cursor = end - rewind;
        }

        chunks
    }

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May overestimate for multi-byte text,
    /// since it treats the length as a character count.
    #[must_use]
    pub fn estimate_chunks(&self, text_len: usize) -> usize {
        if text_len == 0 {
            return 0;
        }
        text_len.div_ceil(self.size - self.overlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_basic_chunking() {
        let chunker = FixedChunker::new(10, 2).unwrap();
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunks = chunker.chunk(text);

        assert_eq!(chunks[0].text, "abcdefghij");
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, 10);

        assert_eq!(chunks[1].start, 8); // 10 - 2 overlap
    }

    #[test]
    fn test_overlap_of_one() {
        let chunker = FixedChunker::new(4, 1).unwrap();
        let chunks = chunker.chunk("abcdefghij");
        // Cursor walk: 0..4, rewind to 3, 3..7, rewind to 6, 6..10, stop.
        assert_eq!(texts(&chunks), ["abcd", "defg", "ghij"]);
    }

    #[test]
    fn test_empty_text() {
        let chunker = FixedChunker::new(10, 2).unwrap();
        let chunks = chunker.chunk("");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_text_smaller_than_chunk() {
        let chunker = FixedChunker::new(10, 2).unwrap();
        let chunks = chunker.chunk("abc");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "abc");
    }

    #[test]
    fn test_zero_overlap_tiles_input() {
        let chunker = FixedChunker::no_overlap(4).unwrap();
        let chunks = chunker.chunk("abcdefghij");
        assert_eq!(texts(&chunks), ["abcd", "efgh", "ij"]);
        for window in chunks.windows(2) {
            assert_eq!(window[0].end, window[1].start);
        }
    }

    #[test]
    fn test_final_chunk_shorter() {
        let chunker = FixedChunker::new(4, 1).unwrap();
        let chunks = chunker.chunk("abcdefgh");
        // 0..4, 3..7, 6..8 (final chunk has 2 chars)
        assert_eq!(texts(&chunks), ["abcd", "defg", "gh"]);
    }

    #[test]
    fn test_unicode_boundaries() {
        let chunker = FixedChunker::new(5, 1).unwrap();
        let text = "a日本語b語本日a"; // mixed single- and multi-byte
        let chunks = chunker.chunk(text);

        for chunk in &chunks {
            // Offsets must be valid slice bounds into the source
            assert_eq!(&text[chunk.start..chunk.end], chunk.text);
            assert!(chunk.text.chars().count() <= 5);
        }
    }

    #[test]
    fn test_size_counts_chars_not_bytes() {
        let chunker = FixedChunker::new(2, 0).unwrap();
        let chunks = chunker.chunk("日本語"); // 3 chars, 9 bytes
        assert_eq!(texts(&chunks), ["日本", "語"]);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            FixedChunker::new(0, 0),
            Err(Error::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn test_overlap_equals_size_rejected() {
        assert!(matches!(
            FixedChunker::new(3, 3),
            Err(Error::OverlapExceedsSize { size: 3, overlap: 3 })
        ));
    }

    #[test]
    fn test_overlap_exceeds_size_rejected() {
        assert!(FixedChunker::new(10, 11).is_err());
    }

    #[test]
    fn test_maximum_overlap_terminates() {
        // overlap == size - 1 advances one char per chunk, the worst case
        let chunker = FixedChunker::new(3, 2).unwrap();
        let chunks = chunker.chunk("abcdef");
        assert_eq!(texts(&chunks), ["abc", "bcd", "cde", "def"]);
    }
}
