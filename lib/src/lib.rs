//! Simulates games of Wordle and evaluates automated guessing strategies against them.
//!
//! A [`Judge`] holds the target word and grades guesses. A [`Strategist`] proposes guesses based
//! on the verdicts so far, and [`play_game`] alternates between the two. [`BatchHarness`] plays
//! many seeded games to compare strategists.
//!
//! Grading follows a simplified rule: a letter that isn't an exact match is marked
//! [`LetterStatus::Present`] whenever it occurs anywhere in the target, without counting repeated
//! letters. The candidate filter in [`restrictions`] follows the same rule, so it never removes
//! the real target.

mod data;
mod engine;
mod harness;
mod judge;
pub mod restrictions;
mod results;
pub mod scorers;

pub use data::Dictionary;
pub use data::Word;
pub use data::WordCounter;
pub use data::ALPHABET;
pub use data::WORD_LENGTH;
pub use engine::*;
pub use harness::*;
pub use judge::*;
pub use results::*;
