//! Win/loss/tie counts over a run of games.

use crate::orchestrator::Outcome;
use derive_getters::Getters;
use tictactoe_core::Mark;

/// Results accumulated by the caller across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Number of games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "After {} games X won {} times, O won {} times and tied {} times",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}
