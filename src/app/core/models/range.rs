// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

/// Amount of words each selectable [`WordRange`] holds unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 300;

/// Whether a [`WordRange`] spans the whole catalog or only one chunk of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    Full,
    Chunk,
}

/// A contiguous, inclusive interval of catalog sequence numbers (`1 <= start <= end`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRange {
    pub start: usize,
    pub end: usize,
    pub kind: RangeKind,
}

impl WordRange {
    /// Amount of words covered by the [`WordRange`]
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_full(&self) -> bool {
        self.kind == RangeKind::Full
    }

    /// Numeric bounds of the range, e.g. `301 - 600`
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

impl fmt::Display for WordRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The single [`WordRange`] covering the whole catalog
pub fn full_range(catalog_size: usize) -> WordRange {
    WordRange {
        start: 1,
        end: catalog_size,
        kind: RangeKind::Full,
    }
}

/// Splits `[1, catalog_size]` into ordered, non-overlapping chunks of `chunk_size` words,
/// the last chunk may be shorter. A `chunk_size` of zero falls back to [`DEFAULT_CHUNK_SIZE`].
pub fn chunked_ranges(catalog_size: usize, chunk_size: usize) -> Vec<WordRange> {
    let chunk_size = sanitize_chunk_size(chunk_size);

    (1..=catalog_size)
        .step_by(chunk_size)
        .map(|start| WordRange {
            start,
            end: (start + chunk_size - 1).min(catalog_size),
            kind: RangeKind::Chunk,
        })
        .collect()
}

pub fn sanitize_chunk_size(chunk_size: usize) -> usize {
    if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    }
}
