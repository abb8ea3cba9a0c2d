//! Collation keys and their byte encoding.
//!
//! # Invariants
//!
//! 1. **Bytes-only identity**: `Eq`, `Ord`, and `Hash` are defined over
//!    the encoded byte sequence alone. The original string never
//!    participates, so two keys built from different spellings that
//!    normalize identically are equal and hash identically.
//!
//! 2. **Exclusive ownership**: a key owns its byte buffer; nothing can
//!    alias or mutate it after construction.
//!
//! 3. **Unsigned lexicographic order**: comparison is byte-wise unsigned,
//!    shorter-is-less when one sequence is a strict prefix of the other.
//!    This is a total order consistent with `Eq`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

/// Inline capacity for key bytes; typical words encode without a heap
/// allocation.
pub(crate) type KeyBytes = SmallVec<[u8; 24]>;

/// Encode a canonical string: one byte per `char`, the low 8 bits of its
/// code point.
///
/// Characters above U+00FF collide with their low-byte counterparts.
/// That truncation is part of the key format — "fixing" it would change
/// collation results for out-of-range input.
pub(crate) fn encode(canonical: &str) -> KeyBytes {
    canonical.chars().map(|c| (c as u32) as u8).collect()
}

/// An immutable, reusable encoding of a string's position in a locale's
/// collation order.
///
/// Built by [`crate::create_key`]. Comparing keys is a plain byte-slice
/// comparison, so sorting a large collection by key avoids renormalizing
/// each string on every comparison.
#[derive(Debug, Clone)]
pub struct CollationKey {
    original: String,
    bytes: KeyBytes,
}

impl CollationKey {
    pub(crate) fn from_parts(original: &str, bytes: KeyBytes) -> Self {
        Self {
            original: original.to_string(),
            bytes,
        }
    }

    /// The original (non-normalized) string this key was built from.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The encoded byte sequence.
    ///
    /// Not a persistence format: bytes are only meaningful for comparing
    /// against keys built by the same crate version, since rule-table
    /// changes change encodings.
    #[must_use]
    pub fn collation_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for CollationKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for CollationKey {}

impl Hash for CollationKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.collation_bytes().hash(state);
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Slice Ord on u8 is unsigned byte-wise lexicographic with the
        // standard strict-prefix tie-break.
        self.bytes.cmp(&other.bytes)
    }
}

impl fmt::Display for CollationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
