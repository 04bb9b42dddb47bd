use crate::data::*;
use crate::judge::Judge;
use crate::restrictions::filter_candidates;
use crate::results::*;
use crate::scorers::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum number of guesses in a standard game.
pub const MAX_GUESSES: u32 = 6;

/// Guesses words in order to solve a single Wordle game.
pub trait Strategist {
    /// Clears any per-game state, so the strategist can start a new game.
    fn reset(&mut self);

    /// Proposes the next guess, given every verdict so far in this game, oldest first.
    ///
    /// An empty history starts a new game.
    fn next_guess(&mut self, history: &[GuessRecord]) -> Result<Word, WordleError>;

    /// The words this strategist still considers possible, if it tracks them.
    fn candidates(&self) -> Option<&[Word]>;

    /// A short, human-readable name for reports.
    fn name(&self) -> &'static str;
}

/// Guesses uniformly at random from the whole dictionary, ignoring all verdicts.
#[derive(Clone, Debug)]
pub struct RandomStrategist<R: Rng = StdRng> {
    dictionary: Dictionary,
    rng: R,
}

impl<R: Rng> RandomStrategist<R> {
    pub fn new(dictionary: Dictionary, rng: R) -> RandomStrategist<R> {
        RandomStrategist { dictionary, rng }
    }
}

impl RandomStrategist<StdRng> {
    pub fn from_seed(dictionary: Dictionary, seed: u64) -> RandomStrategist<StdRng> {
        RandomStrategist::new(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategist for RandomStrategist<R> {
    fn reset(&mut self) {}

    fn next_guess(&mut self, _history: &[GuessRecord]) -> Result<Word, WordleError> {
        Ok(self.dictionary.choose(&mut self.rng).clone())
    }

    fn candidates(&self) -> Option<&[Word]> {
        None
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// The candidate words for one game, narrowed by each verdict as it arrives.
#[derive(Clone, Debug)]
struct CandidateTracker {
    dictionary: Dictionary,
    candidates: Vec<Word>,
    num_records_applied: usize,
}

impl CandidateTracker {
    fn new(dictionary: Dictionary) -> CandidateTracker {
        CandidateTracker {
            candidates: dictionary.to_vec(),
            dictionary,
            num_records_applied: 0,
        }
    }

    fn reset(&mut self) {
        self.candidates = self.dictionary.to_vec();
        self.num_records_applied = 0;
    }

    /// Filters the candidates by every record not yet applied. In a normal game this is just
    /// the latest one.
    fn update(&mut self, history: &[GuessRecord]) -> Result<(), WordleError> {
        if history.len() < self.num_records_applied || history.is_empty() {
            self.reset();
        }
        for record in &history[self.num_records_applied..] {
            self.candidates = filter_candidates(&self.candidates, record);
            log::trace!(
                "{} candidates remain after {}",
                self.candidates.len(),
                record
            );
        }
        self.num_records_applied = history.len();
        if self.candidates.is_empty() {
            return Err(WordleError::NoCandidates);
        }
        Ok(())
    }
}

/// Filters out words that contradict the verdicts, then guesses at random from what remains.
#[derive(Clone, Debug)]
pub struct EliminationStrategist<R: Rng = StdRng> {
    tracker: CandidateTracker,
    rng: R,
}

impl<R: Rng> EliminationStrategist<R> {
    pub fn new(dictionary: Dictionary, rng: R) -> EliminationStrategist<R> {
        EliminationStrategist {
            tracker: CandidateTracker::new(dictionary),
            rng,
        }
    }
}

impl EliminationStrategist<StdRng> {
    pub fn from_seed(dictionary: Dictionary, seed: u64) -> EliminationStrategist<StdRng> {
        EliminationStrategist::new(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategist for EliminationStrategist<R> {
    fn reset(&mut self) {
        self.tracker.reset();
    }

    fn next_guess(&mut self, history: &[GuessRecord]) -> Result<Word, WordleError> {
        self.tracker.update(history)?;
        let candidates = &self.tracker.candidates;
        Ok(candidates[self.rng.gen_range(0..candidates.len())].clone())
    }

    fn candidates(&self) -> Option<&[Word]> {
        Some(&self.tracker.candidates)
    }

    fn name(&self) -> &'static str {
        "elimination"
    }
}

/// Filters out words that contradict the verdicts, then guesses the remaining word with the
/// highest score according to the given [`WordScorer`].
///
/// Ties go to the word that comes first in the dictionary.
#[derive(Clone, Debug)]
pub struct MaxScoreStrategist<S: WordScorer> {
    tracker: CandidateTracker,
    scorer: S,
    name: &'static str,
}

/// Guesses the candidate with the most common letters.
pub type FrequencyStrategist = MaxScoreStrategist<LetterFrequencyScorer>;

/// Guesses the candidate with the most common letters, favouring letters in common locations.
pub type PositionalFrequencyStrategist = MaxScoreStrategist<PositionalFrequencyScorer>;

impl<S: WordScorer> MaxScoreStrategist<S> {
    /// Constructs a strategist with a custom scorer.
    ///
    /// ```
    /// use wordle_bots::Dictionary;
    /// use wordle_bots::MaxScoreStrategist;
    /// use wordle_bots::Strategist;
    /// use wordle_bots::scorers::LetterFrequencyScorer;
    ///
    /// let dictionary = Dictionary::from_iterator(&["whack", "crank", "smore"]).unwrap();
    /// let scorer = LetterFrequencyScorer::new(&dictionary);
    /// let mut strategist = MaxScoreStrategist::new(dictionary, scorer, "custom");
    ///
    /// assert_eq!(strategist.next_guess(&[]).unwrap().as_str(), "crank");
    /// ```
    pub fn new(dictionary: Dictionary, scorer: S, name: &'static str) -> MaxScoreStrategist<S> {
        MaxScoreStrategist {
            tracker: CandidateTracker::new(dictionary),
            scorer,
            name,
        }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl FrequencyStrategist {
    pub fn frequency(dictionary: Dictionary) -> FrequencyStrategist {
        let scorer = LetterFrequencyScorer::new(&dictionary);
        MaxScoreStrategist::new(dictionary, scorer, "frequency")
    }
}

impl PositionalFrequencyStrategist {
    /// Fails with [`WordleError::InvalidWeight`] unless `pos_weight` is finite and positive.
    pub fn positional(
        dictionary: Dictionary,
        pos_weight: f64,
    ) -> Result<PositionalFrequencyStrategist, WordleError> {
        let scorer = PositionalFrequencyScorer::new(&dictionary, pos_weight)?;
        Ok(MaxScoreStrategist::new(dictionary, scorer, "positional"))
    }
}

impl<S: WordScorer> Strategist for MaxScoreStrategist<S> {
    fn reset(&mut self) {
        self.tracker.reset();
        self.scorer.update(&self.tracker.candidates);
    }

    fn next_guess(&mut self, history: &[GuessRecord]) -> Result<Word, WordleError> {
        self.tracker.update(history)?;
        self.scorer.update(&self.tracker.candidates);
        let mut best: Option<(&Word, f64)> = None;
        for word in &self.tracker.candidates {
            let score = self.scorer.score_word(word);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((word, score)),
            }
        }
        best.map(|(word, _)| word.clone())
            .ok_or(WordleError::NoCandidates)
    }

    fn candidates(&self) -> Option<&[Word]> {
        Some(&self.tracker.candidates)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// The state of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// The game continues. Contains the number of guesses made so far.
    InProgress(u32),
    /// The target was guessed. Contains the number of guesses it took.
    Won(u32),
    /// Every allowed guess was used without finding the target.
    Lost,
}

impl GameState {
    /// Returns the state after one more guess. Finished games stay finished.
    pub fn advance(self, is_win: bool, max_guesses: u32) -> GameState {
        match self {
            GameState::InProgress(num_guesses) => {
                let num_guesses = num_guesses + 1;
                if is_win {
                    GameState::Won(num_guesses)
                } else if num_guesses >= max_guesses {
                    GameState::Lost
                } else {
                    GameState::InProgress(num_guesses)
                }
            }
            finished => finished,
        }
    }

    pub fn is_finished(self) -> bool {
        !matches!(self, GameState::InProgress(_))
    }
}

/// Whether the game was won or lost by the strategist, and how it got there.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    pub target: Word,
    pub state: GameState,
    pub max_guesses: u32,
    /// Every graded guess, in the order they were made.
    pub history: Vec<GuessRecord>,
}

impl GameOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self.state, GameState::Won(_))
    }

    /// The number of guesses it took to win, or `max_guesses + 1` for a loss.
    pub fn guess_count(&self) -> u32 {
        match self.state {
            GameState::Won(num_guesses) | GameState::InProgress(num_guesses) => num_guesses,
            GameState::Lost => self.max_guesses + 1,
        }
    }
}

/// Plays one game, alternating between the strategist and the judge until the strategist wins or
/// runs out of guesses.
///
/// The strategist is reset first. Any error from either side ends the game immediately.
///
/// ```
/// use wordle_bots::*;
///
/// let dictionary = Dictionary::from_iterator(&["whack", "crank", "smore"]).unwrap();
/// let judge = Judge::new(dictionary.clone(), "whack").unwrap();
/// let mut strategist = FrequencyStrategist::frequency(dictionary);
///
/// let outcome = play_game(&judge, &mut strategist, MAX_GUESSES).unwrap();
///
/// assert!(outcome.is_win());
/// assert_eq!(outcome.history.last().unwrap().guess.as_str(), "whack");
/// ```
pub fn play_game<S: Strategist + ?Sized>(
    judge: &Judge,
    strategist: &mut S,
    max_guesses: u32,
) -> Result<GameOutcome, WordleError> {
    strategist.reset();
    let mut history: Vec<GuessRecord> = Vec::new();
    let mut state = GameState::InProgress(0);
    while !state.is_finished() {
        let guess = strategist.next_guess(&history)?;
        let record = judge.grade(guess.as_str())?;
        log::trace!("{} guessed {}", strategist.name(), record);
        state = state.advance(record.is_win(), max_guesses);
        history.push(record);
    }
    log::debug!(
        "{} finished game for '{}' in state {:?}",
        strategist.name(),
        judge.target(),
        state
    );
    Ok(GameOutcome {
        target: judge.target().clone(),
        state,
        max_guesses,
        history,
    })
}
