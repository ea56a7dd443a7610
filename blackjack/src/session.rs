use crate::{GameError, Outcome, RoundSummary};

/// Cross-round player state: the bankroll plus win/loss/tie tallies.
/// Lives exactly as long as the process; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    balance: u32,
    wins: u32,
    losses: u32,
    ties: u32,
}

impl Session {
    pub fn new(starting_balance: u32) -> Session {
        Session {
            balance: starting_balance,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Checks a bet against the table minimum of 1 and the current
    /// bankroll.
    pub fn validate_bet(&self, bet: u32) -> Result<(), GameError> {
        if bet == 0 || bet > self.balance {
            return Err(GameError::InvalidBet {
                bet,
                max: self.balance,
            });
        }
        Ok(())
    }

    /// Applies a settled round: adjusts the bankroll and bumps exactly
    /// one tally.
    pub fn apply(&mut self, summary: &RoundSummary) {
        if summary.delta >= 0 {
            self.balance += summary.delta as u32;
        } else {
            // The bet bound keeps losses within the bankroll.
            self.balance = self.balance.saturating_sub(summary.delta.unsigned_abs() as u32);
        }
        match summary.outcome {
            Outcome::BlackjackWin | Outcome::PlayerWin => self.wins += 1,
            Outcome::DealerWin | Outcome::PlayerBust => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// The session ends without asking anything further once the
    /// bankroll hits zero.
    pub fn is_broke(&self) -> bool {
        self.balance == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(outcome: Outcome, bet: u32, delta: i64) -> RoundSummary {
        RoundSummary {
            outcome,
            bet,
            delta,
        }
    }

    #[test]
    fn wins_and_losses_move_the_balance() {
        let mut session = Session::new(100);
        session.apply(&summary(Outcome::BlackjackWin, 10, 15));
        assert_eq!(session.balance(), 115);
        assert_eq!(session.wins(), 1);

        session.apply(&summary(Outcome::DealerWin, 15, -15));
        assert_eq!(session.balance(), 100);
        assert_eq!(session.losses(), 1);

        session.apply(&summary(Outcome::Tie, 20, 0));
        assert_eq!(session.balance(), 100);
        assert_eq!(session.ties(), 1);
    }

    #[test]
    fn bust_counts_as_a_loss() {
        let mut session = Session::new(50);
        session.apply(&summary(Outcome::PlayerBust, 50, -50));
        assert_eq!(session.losses(), 1);
        assert_eq!(session.balance(), 0);
        assert!(session.is_broke());
    }

    #[test]
    fn bet_must_be_within_one_and_the_bankroll() {
        let session = Session::new(30);
        assert!(session.validate_bet(1).is_ok());
        assert!(session.validate_bet(30).is_ok());
        assert_eq!(
            session.validate_bet(0),
            Err(GameError::InvalidBet { bet: 0, max: 30 })
        );
        assert_eq!(
            session.validate_bet(31),
            Err(GameError::InvalidBet { bet: 31, max: 30 })
        );
    }

    #[test]
    fn a_funded_session_is_not_broke() {
        assert!(!Session::new(1).is_broke());
        assert!(Session::new(0).is_broke());
    }
}
