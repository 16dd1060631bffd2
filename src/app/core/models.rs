// SPDX-License-Identifier: GPL-3.0-only

pub mod range;
pub mod word;

pub use range::{RangeKind, WordRange};
pub use word::WordEntry;
