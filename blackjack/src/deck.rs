use crate::card::{Card, Rank, Suit};
use crate::GameError;

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::thread_rng;

/// A single 52-card deck. Cards are dealt from the back and never put
/// back within a round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck with one card of every suit and rank, uniformly
    /// shuffled.
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(&mut thread_rng());
        Deck { cards }
    }

    /// Creates a deck with a known order, the last card given being the
    /// first one dealt. Used for scripted rounds.
    pub fn stacked(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    /// Removes and returns `count` cards from the back of the deck.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.split_off(self.cards.len() - count))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_deck_has_52_unique_cards() {
        let deck = Deck::new();
        assert_eq!(deck.remaining(), 52);
        let pairs: HashSet<(Suit, Rank)> =
            deck.cards.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(pairs.len(), 52);
    }

    #[test]
    fn dealing_shrinks_the_deck_and_keeps_cards_disjoint() {
        let mut deck = Deck::new();
        let dealt = deck.deal(5).unwrap();
        assert_eq!(dealt.len(), 5);
        assert_eq!(deck.remaining(), 47);
        for card in &dealt {
            assert!(!deck.cards.contains(card));
        }
    }

    #[test]
    fn dealing_more_than_remaining_fails() {
        let mut deck = Deck::new();
        deck.deal(50).unwrap();
        let result = deck.deal(3);
        assert_eq!(
            result,
            Err(GameError::DeckExhausted {
                requested: 3,
                remaining: 2
            })
        );
        // A failed deal leaves the deck untouched.
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn stacked_deck_deals_from_the_back() {
        let bottom = Card::new(Suit::Clubs, Rank::Two);
        let middle = Card::new(Suit::Hearts, Rank::Five);
        let top = Card::new(Suit::Spades, Rank::Ace);
        let mut deck = Deck::stacked(vec![bottom, middle, top]);
        assert_eq!(deck.deal(1).unwrap(), vec![top]);
        assert_eq!(deck.deal(2).unwrap(), vec![bottom, middle]);
        assert_eq!(deck.remaining(), 0);
    }
}
