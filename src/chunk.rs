//! The Chunk type: a piece of text with position metadata.

/// A piece of text with its position in the original document.
///
/// Each chunk is self-contained: it owns its text and remembers where in
/// the source it came from, so results computed per chunk can be mapped
/// back to source positions.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use wafers::Chunk;
///
/// let text = "Hello, world!";
/// let chunk = Chunk::new("world", 7, 12, 0);
///
/// // The offsets let you recover the original position
/// assert_eq!(&text[chunk.start..chunk.end], "world");
/// ```
///
/// ## Overlap Handling
///
/// When chunks overlap, adjacent chunks share some text. The `index` field
/// identifies each chunk's position in the sequence:
///
/// ```text
/// Original: "The quick brown fox"
/// Chunk 0:  "The quick b"     [0..11]
/// Chunk 1:  "ck brown fox"    [8..19]  <- overlaps with chunk 0
///               ^
///           overlap region [8..11]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the original document.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original document.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}
