//! Deck construction and shuffling.

use crate::core::{GameRng, DECK_SIZE};

use super::card::{Card, CardId, Rank, Suit};

/// An ordered deck. The top is the end of the vector.
pub type Deck = Vec<Card>;

/// All 52 cards in suit-major order, ids `0..52`.
#[must_use]
pub fn ordered_deck() -> Deck {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(CardId::new(deck.len() as u8), suit, rank));
        }
    }
    deck
}

/// Build a shuffled 52-card deck from the given RNG.
///
/// ```
/// use crazy_aces::cards::create_deck_with;
/// use crazy_aces::core::GameRng;
///
/// let a = create_deck_with(&mut GameRng::new(1));
/// let b = create_deck_with(&mut GameRng::new(1));
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 52);
/// ```
#[must_use]
pub fn create_deck_with(rng: &mut GameRng) -> Deck {
    shuffle_with(&ordered_deck(), rng)
}

/// Build a shuffled 52-card deck seeded from OS entropy.
#[must_use]
pub fn create_deck() -> Deck {
    create_deck_with(&mut GameRng::from_entropy())
}

/// Return a uniformly random permutation of `items`, leaving the input intact.
#[must_use]
pub fn shuffle_with<T: Clone>(items: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut out = items.to_vec();
    rng.shuffle(&mut out);
    out
}

/// [`shuffle_with`] seeded from OS entropy.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut GameRng::from_entropy())
}
