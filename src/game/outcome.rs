//! Hand and round outcomes

use serde::{Deserialize, Serialize};

/// Outcome of a single hand, judged against the bust threshold only
///
/// Training and evaluation count a hand as won when the final total does
/// not exceed the target. This is a non-bust heuristic, not a comparison
/// against an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandOutcome {
    Won,
    Lost,
}

impl HandOutcome {
    /// Judge a finished hand by its final total
    pub fn from_total(total: u32, target: u32) -> Self {
        if total <= target {
            HandOutcome::Won
        } else {
            HandOutcome::Lost
        }
    }
}

/// Outcome of a head-to-head round between two finished hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWins,
    OpponentWins,
    Tie,
}

impl RoundOutcome {
    /// Settle a round: a bust forfeits immediately, otherwise the higher
    /// total wins and equal totals tie.
    pub fn settle(player_total: u32, opponent_total: u32, target: u32) -> Self {
        if player_total > target {
            return RoundOutcome::OpponentWins;
        }
        if opponent_total > target {
            return RoundOutcome::PlayerWins;
        }
        match player_total.cmp(&opponent_total) {
            std::cmp::Ordering::Greater => RoundOutcome::PlayerWins,
            std::cmp::Ordering::Less => RoundOutcome::OpponentWins,
            std::cmp::Ordering::Equal => RoundOutcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_outcome_uses_bust_threshold() {
        assert_eq!(HandOutcome::from_total(21, 21), HandOutcome::Won);
        assert_eq!(HandOutcome::from_total(15, 21), HandOutcome::Won);
        assert_eq!(HandOutcome::from_total(22, 21), HandOutcome::Lost);
    }

    #[test]
    fn bust_forfeits_regardless_of_opponent_total() {
        assert_eq!(
            RoundOutcome::settle(25, 30, 21),
            RoundOutcome::OpponentWins
        );
        assert_eq!(RoundOutcome::settle(18, 22, 21), RoundOutcome::PlayerWins);
    }

    #[test]
    fn higher_total_wins_and_equal_totals_tie() {
        assert_eq!(RoundOutcome::settle(20, 18, 21), RoundOutcome::PlayerWins);
        assert_eq!(RoundOutcome::settle(17, 19, 21), RoundOutcome::OpponentWins);
        assert_eq!(RoundOutcome::settle(19, 19, 21), RoundOutcome::Tie);
    }
}
