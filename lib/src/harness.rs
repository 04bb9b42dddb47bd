use crate::data::Dictionary;
use crate::engine::*;
use crate::judge::Judge;
use crate::results::WordleError;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plays many independent, seeded games with fresh strategists and aggregates the results.
///
/// Run `i` is seeded with `seed + i`. That seed picks the target, and the same random stream
/// then provides the seed passed to the strategist factory, so every run is reproducible no
/// matter how the runs are scheduled. Runs are played in parallel.
///
/// ```
/// use wordle_bots::*;
///
/// let dictionary = Dictionary::from_iterator(&["alpha", "allot", "begot", "below"]).unwrap();
/// let harness = BatchHarness::new(12, 20);
///
/// let report = harness
///     .run(&dictionary, |seed| EliminationStrategist::from_seed(dictionary.clone(), seed))
///     .unwrap();
///
/// assert_eq!(report.stats.run_count, 20);
/// assert_eq!(report.outcomes.len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchHarness {
    pub seed: u64,
    pub run_count: u32,
    pub max_guesses: u32,
}

impl BatchHarness {
    /// Creates a harness that plays `run_count` standard games of [`MAX_GUESSES`] guesses.
    pub fn new(seed: u64, run_count: u32) -> BatchHarness {
        BatchHarness {
            seed,
            run_count,
            max_guesses: MAX_GUESSES,
        }
    }

    pub fn with_max_guesses(self, max_guesses: u32) -> BatchHarness {
        BatchHarness {
            max_guesses,
            ..self
        }
    }

    /// Plays every run. The first error from any game aborts the batch.
    pub fn run<S, F>(
        &self,
        dictionary: &Dictionary,
        make_strategist: F,
    ) -> Result<BatchReport, WordleError>
    where
        S: Strategist,
        F: Fn(u64) -> S + Sync,
    {
        let outcomes = (0..self.run_count)
            .into_par_iter()
            .map(|run| {
                let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(run as u64));
                let judge = Judge::random(dictionary.clone(), &mut rng);
                let mut strategist = make_strategist(rng.gen());
                play_game(&judge, &mut strategist, self.max_guesses)
            })
            .collect::<Result<Vec<GameOutcome>, WordleError>>()?;
        let stats = BatchStats::from_outcomes(&outcomes);
        log::debug!(
            "finished {} runs from seed {}: win rate {:.4}",
            stats.run_count,
            self.seed,
            stats.win_rate
        );
        Ok(BatchReport { outcomes, stats })
    }
}

/// Every game played by a [`BatchHarness`], in run order, along with summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<GameOutcome>,
    pub stats: BatchStats,
}

/// Summary statistics for a batch of games.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchStats {
    pub run_count: u32,
    /// The fraction of games that were won, from 0 to 1.
    pub win_rate: f64,
    /// The average number of guesses among won games, or `None` if nothing was won.
    pub avg_guesses: Option<f64>,
    /// The number of games for each guess count. Lost games are counted under
    /// `max_guesses + 1`.
    pub guess_counts: BTreeMap<u32, u32>,
}

impl BatchStats {
    pub fn from_outcomes(outcomes: &[GameOutcome]) -> BatchStats {
        let mut guess_counts: BTreeMap<u32, u32> = BTreeMap::new();
        let mut num_wins = 0;
        let mut win_guesses = 0;
        for outcome in outcomes {
            *guess_counts.entry(outcome.guess_count()).or_insert(0) += 1;
            if outcome.is_win() {
                num_wins += 1;
                win_guesses += outcome.guess_count();
            }
        }
        let run_count = outcomes.len() as u32;
        BatchStats {
            run_count,
            win_rate: if run_count == 0 {
                0.0
            } else {
                num_wins as f64 / run_count as f64
            },
            avg_guesses: if num_wins == 0 {
                None
            } else {
                Some(win_guesses as f64 / num_wins as f64)
            },
            guess_counts,
        }
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Iterations: {}", self.run_count)?;
        writeln!(f, "Win Rate: {:.2}%", self.win_rate * 100.0)?;
        match self.avg_guesses {
            Some(average) => writeln!(f, "Avg Guesses: {:.2}", average)?,
            None => writeln!(f, "Avg Guesses: n/a")?,
        }
        let counts: Vec<String> = self
            .guess_counts
            .iter()
            .map(|(num_guesses, num_games)| format!("{}: {}", num_guesses, num_games))
            .collect();
        write!(f, "Guess counts (losses counted as max + 1): {{{}}}", counts.join(", "))
    }
}
