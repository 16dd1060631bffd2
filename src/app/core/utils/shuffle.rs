// SPDX-License-Identifier: GPL-3.0-only

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a new vector with the given items in uniformly random order, the input is left untouched
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut deck = items.to_vec();
    deck.shuffle(rng);
    deck
}
