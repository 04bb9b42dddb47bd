use crate::data::Word;
use crate::data::WORD_LENGTH;
use std::fmt;
use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterStatus {
    /// The letter does not occur anywhere in the target.
    NoMatch,
    /// The letter occurs in the target, but not at this location.
    Present,
    /// The letter is at this exact location in the target.
    ExactMatch,
}

impl LetterStatus {
    /// The single-character marker used when printing a [`GuessRecord`].
    pub fn marker(self) -> char {
        match self {
            LetterStatus::NoMatch => '.',
            LetterStatus::Present => 'y',
            LetterStatus::ExactMatch => 'g',
        }
    }
}

/// A letter from a guess along with its status.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterVerdict {
    pub letter: char,
    pub status: LetterStatus,
}

impl LetterVerdict {
    pub fn new(letter: char, status: LetterStatus) -> LetterVerdict {
        LetterVerdict { letter, status }
    }
}

/// The graded result of a single guess.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessRecord {
    pub guess: Word,
    /// One verdict per letter, provided in the same letter order as in the guess.
    pub verdicts: [LetterVerdict; WORD_LENGTH],
}

impl GuessRecord {
    /// Returns `true` iff every letter was an exact match.
    pub fn is_win(&self) -> bool {
        self.verdicts
            .iter()
            .all(|verdict| verdict.status == LetterStatus::ExactMatch)
    }

    /// Returns just the status of each letter, in guess order.
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.verdicts.map(|verdict| verdict.status)
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers: String = self
            .verdicts
            .iter()
            .map(|verdict| verdict.status.marker())
            .collect();
        write!(f, "{} {}", self.guess, markers)
    }
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum WordleError {
    /// A word or guess had the wrong number of letters. Contains the length that was given.
    #[error("words must have 5 letters, but this one has {length}")]
    InvalidGuess { length: usize },
    /// A word contained something other than the letters `a` through `z`.
    #[error("'{0}' contains an unsupported character")]
    InvalidCharacter(String),
    /// A guess was well-formed but is not in the dictionary.
    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),
    /// An explicit target word was not in the dictionary.
    #[error("invalid target word '{0}': not in the dictionary")]
    InvalidTarget(String),
    #[error("the dictionary contains no words")]
    EmptyDictionary,
    /// The candidate set was emptied, which only happens for an inconsistent history.
    #[error("no candidate words remain")]
    NoCandidates,
    #[error("positional weight must be a positive number, got {0}")]
    InvalidWeight(f64),
    #[error("could not read words: {0}")]
    Io(String),
}

impl From<io::Error> for WordleError {
    fn from(e: io::Error) -> Self {
        WordleError::Io(e.to_string())
    }
}
