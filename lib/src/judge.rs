use crate::data::*;
use crate::results::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Determines the verdict for each letter of `guess` when played against `target`.
///
/// A letter that is not an exact match is `Present` whenever it occurs anywhere in the target.
/// Repeated letters are not counted against the number of times they occur in the target, so a
/// guess like `eerie` against `there` marks every `e` that isn't an exact match as `Present`.
///
/// ```
/// use wordle_bots::grade_words;
/// use wordle_bots::LetterStatus::*;
/// use wordle_bots::Word;
///
/// let record = grade_words(&Word::new("whack").unwrap(), &Word::new("crank").unwrap());
/// assert_eq!(record.statuses(), [Present, NoMatch, ExactMatch, NoMatch, ExactMatch]);
/// assert!(!record.is_win());
/// ```
pub fn grade_words(target: &Word, guess: &Word) -> GuessRecord {
    let verdicts = std::array::from_fn(|index| {
        let letter = guess.letter(index);
        let status = if target.letter(index) == letter {
            LetterStatus::ExactMatch
        } else if target.contains(letter) {
            LetterStatus::Present
        } else {
            LetterStatus::NoMatch
        };
        LetterVerdict::new(letter, status)
    });
    GuessRecord {
        guess: guess.clone(),
        verdicts,
    }
}

/// The grading authority for a single game. Holds the target word, which never changes.
#[derive(Clone, Debug)]
pub struct Judge {
    dictionary: Dictionary,
    target: Word,
}

impl Judge {
    /// Creates a judge for an explicit target word, which must be in the dictionary.
    pub fn new(dictionary: Dictionary, target: &str) -> Result<Judge, WordleError> {
        let target = match Word::new(target) {
            Ok(word) if dictionary.contains(word.as_str()) => word,
            _ => return Err(WordleError::InvalidTarget(target.to_string())),
        };
        Ok(Judge { dictionary, target })
    }

    /// Creates a judge with a target chosen uniformly at random from the dictionary.
    pub fn random<R: Rng + ?Sized>(dictionary: Dictionary, rng: &mut R) -> Judge {
        let target = dictionary.choose(rng).clone();
        Judge { dictionary, target }
    }

    /// Creates a judge with a random target. The same seed always picks the same target.
    pub fn from_seed(dictionary: Dictionary, seed: u64) -> Judge {
        Judge::random(dictionary, &mut StdRng::seed_from_u64(seed))
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Grades the given guess against the target.
    ///
    /// Fails with [`WordleError::InvalidGuess`] if the guess isn't five letters long, or with
    /// [`WordleError::UnknownWord`] if it isn't in the dictionary.
    pub fn grade(&self, guess: &str) -> Result<GuessRecord, WordleError> {
        let length = guess.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::InvalidGuess { length });
        }
        if !self.dictionary.contains(guess) {
            return Err(WordleError::UnknownWord(guess.to_string()));
        }
        let guess = Word::new(guess)?;
        Ok(grade_words(&self.target, &guess))
    }
}
