//! Move legality.
//!
//! Aces are wild and always playable. Any other card must match the
//! effective suit (the declared suit if one is set, else the top card's
//! suit) or the top card's rank.

use smallvec::SmallVec;

use crate::cards::{Card, Suit};

/// Can `card` be played onto `top_card`?
///
/// With no top card every card is legal.
///
/// ```
/// use crazy_aces::cards::{Card, CardId, Rank, Suit};
/// use crazy_aces::rules::is_valid_move;
///
/// let top = Card::new(CardId::new(0), Suit::Hearts, Rank::Nine);
/// let nine = Card::new(CardId::new(1), Suit::Clubs, Rank::Nine);
/// let two = Card::new(CardId::new(2), Suit::Clubs, Rank::Two);
///
/// assert!(is_valid_move(&nine, Some(&top), None));
/// assert!(!is_valid_move(&two, Some(&top), None));
/// assert!(is_valid_move(&two, Some(&top), Some(Suit::Clubs)));
/// ```
#[must_use]
pub fn is_valid_move(card: &Card, top_card: Option<&Card>, declared_suit: Option<Suit>) -> bool {
    if card.is_ace() {
        return true;
    }
    let Some(top) = top_card else {
        return true;
    };
    let target_suit = declared_suit.unwrap_or(top.suit);
    card.suit == target_suit || card.rank == top.rank
}

/// Does any card in `hand` have a legal play?
#[must_use]
pub fn has_valid_move<'a>(
    hand: impl IntoIterator<Item = &'a Card>,
    top_card: Option<&Card>,
    declared_suit: Option<Suit>,
) -> bool {
    hand.into_iter()
        .any(|card| is_valid_move(card, top_card, declared_suit))
}

/// Cards in `hand` that are legal to play, in hand order.
///
/// SmallVec keeps typical hands off the heap.
#[must_use]
pub fn valid_cards<'a>(
    hand: impl IntoIterator<Item = &'a Card>,
    top_card: Option<&Card>,
    declared_suit: Option<Suit>,
) -> SmallVec<[Card; 8]> {
    hand.into_iter()
        .filter(|card| is_valid_move(card, top_card, declared_suit))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rank};

    fn card(id: u8, suit: Suit, rank: Rank) -> Card {
        Card::new(CardId::new(id), suit, rank)
    }

    #[test]
    fn test_ace_always_legal() {
        let top = card(0, Suit::Hearts, Rank::Five);
        for suit in Suit::ALL {
            let ace = card(1, suit, Rank::Ace);
            assert!(is_valid_move(&ace, Some(&top), None));
            assert!(is_valid_move(&ace, Some(&top), Some(Suit::Clubs)));
            assert!(is_valid_move(&ace, None, None));
        }
    }

    #[test]
    fn test_no_top_card_allows_anything() {
        assert!(is_valid_move(&card(0, Suit::Clubs, Rank::Two), None, None));
        assert!(is_valid_move(&card(0, Suit::Clubs, Rank::Two), None, Some(Suit::Hearts)));
    }

    #[test]
    fn test_suit_or_rank_match() {
        let top = card(0, Suit::Hearts, Rank::Nine);

        assert!(is_valid_move(&card(1, Suit::Hearts, Rank::Two), Some(&top), None));
        assert!(is_valid_move(&card(2, Suit::Spades, Rank::Nine), Some(&top), None));
        assert!(!is_valid_move(&card(3, Suit::Spades, Rank::Two), Some(&top), None));
    }

    #[test]
    fn test_declared_suit_overrides_top_suit() {
        let top = card(0, Suit::Hearts, Rank::Ace);

        assert!(is_valid_move(&card(1, Suit::Clubs, Rank::Four), Some(&top), Some(Suit::Clubs)));
        assert!(!is_valid_move(&card(2, Suit::Hearts, Rank::Four), Some(&top), Some(Suit::Clubs)));
    }

    #[test]
    fn test_rank_match_survives_declared_suit() {
        let top = card(0, Suit::Hearts, Rank::Seven);
        let seven = card(1, Suit::Spades, Rank::Seven);
        assert!(is_valid_move(&seven, Some(&top), Some(Suit::Diamonds)));
    }

    #[test]
    fn test_valid_cards_filters_in_order() {
        let top = card(0, Suit::Diamonds, Rank::Jack);
        let hand = vec![
            card(1, Suit::Clubs, Rank::Two),
            card(2, Suit::Diamonds, Rank::Three),
            card(3, Suit::Spades, Rank::Ace),
            card(4, Suit::Hearts, Rank::Jack),
        ];

        let ids: Vec<_> = valid_cards(&hand, Some(&top), None).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(2), CardId::new(3), CardId::new(4)]);
        assert!(has_valid_move(&hand, Some(&top), None));
        assert!(!has_valid_move(&hand[..1], Some(&top), None));
    }
}
