use crate::deck::Deck;
use crate::hand::{Hand, HandOwner};
use crate::{Action, Card, GameError, Outcome, RoundSummary, Rule};

/// Phases a round moves through. `BlackjackResolved` and `Settled` are
/// both terminal; the former marks a round ended by a player natural.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    BlackjackResolved,
    Settled,
}

/// Chooses the player's next move. The console driver blocks on stdin
/// here; tests use scripted implementations.
pub trait Decisions {
    fn next_action(&mut self, player: &Hand, dealer_up: Card) -> Action;
}

/// Receives display-worthy events as a round progresses. The engine
/// never formats anything itself. All methods default to doing nothing.
pub trait EventHandler {
    fn on_deal(&mut self, _player: &Hand, _dealer: &Hand) {}
    fn on_player_hit(&mut self, _player: &Hand) {}
    fn on_player_bust(&mut self, _player: &Hand) {}
    fn on_dealer_reveal(&mut self, _dealer: &Hand) {}
    fn on_round_summary(&mut self, _summary: &RoundSummary) {}
}

/// One seat playing one round against the dealer. The table owns its
/// deck and both hands; none of them survive the round.
pub struct Table {
    rule: Rule,
    phase: RoundPhase,
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl Table {
    /// Creates a table with a freshly shuffled deck.
    pub fn new(rule: &Rule) -> Table {
        Table::with_deck(rule, Deck::new())
    }

    /// Creates a table drawing from the given deck.
    pub fn with_deck(rule: &Rule, deck: Deck) -> Table {
        Table {
            rule: *rule,
            phase: RoundPhase::Dealing,
            deck,
            player: Hand::new(HandOwner::Player),
            dealer: Hand::new(HandOwner::Dealer),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Plays one full round for the given bet. Can be called once per
    /// table; the caller is responsible for the bet being within the
    /// player's bankroll (see [`crate::Session::validate_bet`]).
    ///
    /// A player natural ends the round immediately with the blackjack
    /// payout. The dealer's own natural is deliberately not consulted
    /// there: in this variant a player blackjack always wins.
    pub fn play_round<D, H>(
        &mut self,
        bet: u32,
        decisions: &mut D,
        handler: &mut H,
    ) -> Result<RoundSummary, GameError>
    where
        D: Decisions,
        H: EventHandler,
    {
        self.ensure_phase(RoundPhase::Dealing)?;

        self.deal_initial()?;
        handler.on_deal(&self.player, &self.dealer);

        if self.player.is_blackjack() {
            let winnings = (bet as f64 * self.rule.payout_blackjack) as i64;
            return Ok(self.settle(Outcome::BlackjackWin, bet, winnings, handler));
        }

        self.player_turn(decisions, handler)?;
        if self.player.is_bust() {
            handler.on_player_bust(&self.player);
            return Ok(self.settle(Outcome::PlayerBust, bet, -(bet as i64), handler));
        }

        self.dealer_turn()?;
        handler.on_dealer_reveal(&self.dealer);

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let (outcome, delta) = if dealer_value > 21 || player_value > dealer_value {
            (Outcome::PlayerWin, bet as i64)
        } else if dealer_value > player_value {
            (Outcome::DealerWin, -(bet as i64))
        } else {
            (Outcome::Tie, 0)
        };
        Ok(self.settle(outcome, bet, delta, handler))
    }

    /// Two cards to the player, then two to the dealer.
    fn deal_initial(&mut self) -> Result<(), GameError> {
        let cards = self.deck.deal(2)?;
        self.player.add_cards(cards);
        let cards = self.deck.deal(2)?;
        self.dealer.add_cards(cards);
        self.phase = RoundPhase::PlayerTurn;
        Ok(())
    }

    /// Offers hit/stand while the player sits below 21. Reaching 21 on
    /// a hit exits the loop without an explicit stand.
    fn player_turn<D, H>(&mut self, decisions: &mut D, handler: &mut H) -> Result<(), GameError>
    where
        D: Decisions,
        H: EventHandler,
    {
        while self.player.value() < 21 {
            let dealer_up = self.dealer.cards()[0];
            match decisions.next_action(&self.player, dealer_up) {
                Action::Hit => {
                    let cards = self.deck.deal(1)?;
                    self.player.add_cards(cards);
                    handler.on_player_hit(&self.player);
                }
                Action::Stand => break,
            }
        }
        Ok(())
    }

    /// Fixed dealer policy: hit while below the stand threshold.
    fn dealer_turn(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::DealerTurn;
        while self.dealer.value() < self.rule.dealer_stand_min {
            let cards = self.deck.deal(1)?;
            self.dealer.add_cards(cards);
        }
        Ok(())
    }

    fn settle<H: EventHandler>(
        &mut self,
        outcome: Outcome,
        bet: u32,
        delta: i64,
        handler: &mut H,
    ) -> RoundSummary {
        self.phase = if outcome == Outcome::BlackjackWin {
            RoundPhase::BlackjackResolved
        } else {
            RoundPhase::Settled
        };
        let summary = RoundSummary {
            outcome,
            bet,
            delta,
        };
        handler.on_round_summary(&summary);
        summary
    }

    fn ensure_phase(&self, expected: RoundPhase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }
}
