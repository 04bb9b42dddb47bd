use crate::data::*;
use crate::results::WordleError;
use std::result::Result;

/// Gives words a score, where the maximum score indicates the best guess.
///
/// Scorers are recomputed from the current candidate words every turn. Neither scorer below
/// looks at the verdicts directly: everything they know comes from which candidates remain.
pub trait WordScorer {
    /// Recomputes the scorer's statistics from the current candidate words.
    fn update(&mut self, candidates: &[Word]);
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Word) -> f64;
}

/// Scores words by the fraction of candidates that contain each letter, summed across each
/// unique letter in the word. Repeated letters only count once.
#[derive(Clone, Debug)]
pub struct LetterFrequencyScorer {
    counter: WordCounter,
}

impl LetterFrequencyScorer {
    /// Constructs a `LetterFrequencyScorer` from the starting candidates, which are usually the
    /// whole dictionary.
    ///
    /// ```
    /// use wordle_bots::Dictionary;
    /// use wordle_bots::scorers::LetterFrequencyScorer;
    /// use wordle_bots::scorers::WordScorer;
    ///
    /// let dictionary = Dictionary::from_iterator(&["whack", "crank", "smore"]).unwrap();
    /// let scorer = LetterFrequencyScorer::new(&dictionary);
    ///
    /// assert!(scorer.score_word(&dictionary[1]) > scorer.score_word(&dictionary[2]));
    /// ```
    pub fn new(candidates: &[Word]) -> LetterFrequencyScorer {
        LetterFrequencyScorer {
            counter: WordCounter::new(candidates),
        }
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn update(&mut self, candidates: &[Word]) {
        self.counter = WordCounter::new(candidates);
    }

    fn score_word(&self, word: &Word) -> f64 {
        let num_words = self.counter.num_words();
        if num_words == 0 {
            return 0.0;
        }
        // Sum the integer counts first so that words with the same letters tie exactly.
        let mut sum = 0;
        for (index, letter) in word.letters().enumerate() {
            let letter_already_scored = word
                .letters()
                .take(index)
                .any(|other_letter| other_letter == letter);
            if !letter_already_scored {
                sum += self.counter.num_words_with_letter(letter);
            }
        }
        sum as f64 / num_words as f64
    }
}

/// Scores words by letter frequency, with a bonus for letters that commonly appear at the same
/// location in the candidate words.
///
/// For each location in the word, the letter contributes:
///
/// *{fraction of candidates containing the letter}* / *{occurrences of the letter in this word}*
/// \* (1 + *{share of the letter's located occurrences that are at this location}* /
/// *{pos_weight}*)
///
/// Larger `pos_weight` values shrink the location bonus. Letters that never appear in the
/// candidates get no bonus.
#[derive(Clone, Debug)]
pub struct PositionalFrequencyScorer {
    counter: WordCounter,
    pos_weight: f64,
}

impl PositionalFrequencyScorer {
    /// Constructs a `PositionalFrequencyScorer` from the starting candidates.
    ///
    /// Fails with [`WordleError::InvalidWeight`] unless `pos_weight` is finite and positive.
    pub fn new(
        candidates: &[Word],
        pos_weight: f64,
    ) -> Result<PositionalFrequencyScorer, WordleError> {
        if !pos_weight.is_finite() || pos_weight <= 0.0 {
            return Err(WordleError::InvalidWeight(pos_weight));
        }
        Ok(PositionalFrequencyScorer {
            counter: WordCounter::new(candidates),
            pos_weight,
        })
    }

    pub fn pos_weight(&self) -> f64 {
        self.pos_weight
    }

    fn location_bonus(&self, letter: char, location: usize) -> f64 {
        let total = self.counter.num_located_occurrences(letter);
        if total == 0 {
            return 0.0;
        }
        let here = self.counter.num_words_with_located_letter(letter, location);
        here as f64 / total as f64 / self.pos_weight
    }
}

impl WordScorer for PositionalFrequencyScorer {
    fn update(&mut self, candidates: &[Word]) {
        self.counter = WordCounter::new(candidates);
    }

    fn score_word(&self, word: &Word) -> f64 {
        let num_words = self.counter.num_words();
        if num_words == 0 {
            return 0.0;
        }
        word.letters()
            .enumerate()
            .map(|(index, letter)| {
                let letter_frequency =
                    self.counter.num_words_with_letter(letter) as f64 / num_words as f64;
                letter_frequency / word.count(letter) as f64
                    * (1.0 + self.location_bonus(letter, index))
            })
            .sum()
    }
}
