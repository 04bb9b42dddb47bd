use crate::results::WordleError;
use rand::Rng;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// The letters that words may be built from, in order.
pub const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

const ALPHABET_SIZE: usize = 26;

/// A five-letter, lower-case word.
///
/// Words are immutable, and cloning one only clones a pointer to the shared text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word(Arc<str>);

impl Word {
    /// Validates and constructs a word. Surrounding whitespace is trimmed and the word is
    /// converted to lower case.
    ///
    /// ```
    /// use wordle_bots::Word;
    /// use wordle_bots::WordleError;
    ///
    /// assert_eq!(Word::new(" Whack").unwrap().as_str(), "whack");
    /// assert_eq!(Word::new("cat"), Err(WordleError::InvalidGuess { length: 3 }));
    /// ```
    pub fn new(text: &str) -> Result<Word, WordleError> {
        let normalized = text.trim().to_lowercase();
        let length = normalized.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::InvalidGuess { length });
        }
        if !normalized.chars().all(|letter| ALPHABET.contains(&letter)) {
            return Err(WordleError::InvalidCharacter(normalized));
        }
        Ok(Word(Arc::from(normalized.as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the letter at the given zero-based index.
    ///
    /// Panics if `index >= WORD_LENGTH`.
    pub fn letter(&self, index: usize) -> char {
        self.0.as_bytes()[index] as char
    }

    /// Iterates over the letters in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Returns `true` iff the letter occurs anywhere in this word.
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Returns the number of times the letter occurs in this word.
    pub fn count(&self, letter: char) -> usize {
        self.letters().filter(|other| *other == letter).count()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Word::new(&text)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Word::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.0.to_string()
    }
}

/// Contains all the possible words for a game, in their original order.
///
/// The dictionary is read-only. Cloning it is cheap, and clones share the same storage, so one
/// dictionary can back any number of judges and strategists, including across threads.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Arc<[Word]>,
    lookup: Arc<HashSet<Word>>,
}

impl Dictionary {
    /// Constructs a new `Dictionary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Blank lines are skipped, duplicates after the
    /// first occurrence are dropped, and each word is converted to lower case.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader.lines().collect::<Result<Vec<String>, _>>()?;
        Dictionary::from_iterator(lines)
    }

    /// Constructs a new `Dictionary` using the words from the given iterator.
    ///
    /// Empty entries are skipped, duplicates after the first occurrence are dropped, and each
    /// word is converted to lower case.
    ///
    /// ```
    /// use wordle_bots::Dictionary;
    ///
    /// let dictionary = Dictionary::from_iterator(&["whack", "", "Crank", "whack"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut lookup = HashSet::new();
        let mut ordered = Vec::new();
        for maybe_word in words {
            let text = maybe_word.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            let word = Word::new(text)?;
            if lookup.insert(word.clone()) {
                ordered.push(word);
            }
        }
        if ordered.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }
        log::debug!("loaded dictionary with {} words", ordered.len());
        Ok(Dictionary {
            words: Arc::from(ordered),
            lookup: Arc::new(lookup),
        })
    }

    /// Returns all words, in their original order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns `true` iff the given text is exactly a word in this dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Selects a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

impl Deref for Dictionary {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Counts the number of words that have letters in certain locations.
#[derive(Clone, Debug, PartialEq)]
pub struct WordCounter {
    num_words: u32,
    num_words_by_letter: [u32; ALPHABET_SIZE],
    num_words_by_located_letter: [[u32; WORD_LENGTH]; ALPHABET_SIZE],
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new(words: &[Word]) -> WordCounter {
        let mut counter = WordCounter {
            num_words: 0,
            num_words_by_letter: [0; ALPHABET_SIZE],
            num_words_by_located_letter: [[0; WORD_LENGTH]; ALPHABET_SIZE],
        };
        for word in words {
            counter.num_words += 1;
            for (index, letter) in word.letters().enumerate() {
                let Some(slot) = letter_index(letter) else {
                    continue;
                };
                counter.num_words_by_located_letter[slot][index] += 1;
                let first_occurrence = word
                    .letters()
                    .take(index)
                    .all(|other_letter| other_letter != letter);
                if first_occurrence {
                    counter.num_words_by_letter[slot] += 1;
                }
            }
        }
        counter
    }

    /// Returns the number of words that were counted.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Retrieves the count of words that contain the given letter at least once.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        letter_index(letter).map_or(0, |index| self.num_words_by_letter[index])
    }

    /// Retrieves the count of words with the given letter at the given location.
    pub fn num_words_with_located_letter(&self, letter: char, location: usize) -> u32 {
        match letter_index(letter) {
            Some(index) if location < WORD_LENGTH => {
                self.num_words_by_located_letter[index][location]
            }
            _ => 0,
        }
    }

    /// Retrieves the count of located occurrences of the letter, summed across every location.
    pub fn num_located_occurrences(&self, letter: char) -> u32 {
        letter_index(letter).map_or(0, |index| {
            self.num_words_by_located_letter[index].iter().sum()
        })
    }
}

fn letter_index(letter: char) -> Option<usize> {
    if ALPHABET.contains(&letter) {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}
