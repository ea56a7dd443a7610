use crate::card::{Card, Rank};

/// Who a hand belongs to. Only the rendering layer cares: dealer hands
/// are shown with the hole card concealed until the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOwner {
    Player,
    Dealer,
}

/// The cards held by one participant during a round. Append-only; a
/// hand never outlives its round.
#[derive(Debug, Clone)]
pub struct Hand {
    owner: HandOwner,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(owner: HandOwner) -> Hand {
        Hand {
            owner,
            cards: Vec::with_capacity(4),
        }
    }

    pub fn add_cards(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Total hand value. Every ace counts as 11 until the total would
    /// bust, then aces drop to 1 one at a time.
    pub fn value(&self) -> u8 {
        let mut total: u16 = self.cards.iter().map(|c| c.value() as u16).sum();
        let mut aces = self.cards.iter().filter(|c| c.rank == Rank::Ace).count();
        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total as u8
    }

    /// A natural: exactly two cards worth 21. A three-card 21 never
    /// qualifies.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn owner(&self) -> HandOwner {
        self.owner
    }
}
