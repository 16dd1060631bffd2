// SPDX-License-Identifier: GPL-3.0-only

/// A single vocabulary entry of the bundled catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    /// 1-based position of the word inside the catalog
    pub number: usize,
    /// Text in the language the user already knows
    pub source: String,
    /// Text in the language being studied
    pub target: String,
}

impl WordEntry {
    pub fn new(number: usize, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            number,
            source: source.into(),
            target: target.into(),
        }
    }
}
