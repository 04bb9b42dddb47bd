use crate::data::Word;
use crate::results::GuessRecord;
use crate::results::LetterStatus;

/// Returns `true` iff `word` could still be the target given the verdicts in `record`.
///
/// Each verdict restricts the word as follows:
///
/// * `NoMatch`: the letter must not appear anywhere in the word.
/// * `Present`: the letter must appear in the word, but not at this location.
/// * `ExactMatch`: the letter must be at this location.
///
/// Failing any single restriction disqualifies the word.
///
/// A `NoMatch` excludes every word containing the letter, even when the same letter was
/// matched elsewhere in the guess. This agrees with how [`grade_words`](crate::grade_words)
/// marks repeated letters, so the real target is never excluded.
pub fn is_consistent(word: &Word, record: &GuessRecord) -> bool {
    record
        .verdicts
        .iter()
        .enumerate()
        .all(|(index, verdict)| match verdict.status {
            LetterStatus::NoMatch => !word.contains(verdict.letter),
            LetterStatus::Present => {
                word.contains(verdict.letter) && word.letter(index) != verdict.letter
            }
            LetterStatus::ExactMatch => word.letter(index) == verdict.letter,
        })
}

/// Returns the candidates that are consistent with `record`, preserving their order.
pub fn filter_candidates(candidates: &[Word], record: &GuessRecord) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::judge::grade_words;
    use crate::results::LetterVerdict;
    use LetterStatus::*;

    fn to_words(words: &[&str]) -> Vec<Word> {
        words.iter().map(|word| Word::new(word).unwrap()).collect()
    }

    fn record(guess: &str, statuses: [LetterStatus; 5]) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        GuessRecord {
            verdicts: std::array::from_fn(|index| {
                LetterVerdict::new(guess.letter(index), statuses[index])
            }),
            guess,
        }
    }

    #[test]
    fn no_match_excludes_letter_anywhere() {
        let candidates = to_words(&["worda", "wordb", "other", "smore"]);

        let still_possible = filter_candidates(
            &candidates,
            &record("waltz", [NoMatch, NoMatch, NoMatch, NoMatch, NoMatch]),
        );

        assert_eq!(still_possible, to_words(&["smore"]));
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let candidates = to_words(&["worda", "wordb", "other", "smore"]);

        let still_possible = filter_candidates(
            &candidates,
            &record("oxlip", [Present, NoMatch, NoMatch, NoMatch, NoMatch]),
        );

        // "other" has the 'o' at the guessed location.
        assert_eq!(still_possible, to_words(&["worda", "wordb", "smore"]));

        let still_possible = filter_candidates(
            &candidates,
            &record("blitz", [Present, NoMatch, NoMatch, NoMatch, NoMatch]),
        );

        assert_eq!(still_possible, to_words(&["wordb"]));
    }

    #[test]
    fn exact_match_requires_letter_here() {
        let candidates = to_words(&["worda", "wordb", "other", "smore"]);

        let still_possible = filter_candidates(
            &candidates,
            &record("board", [ExactMatch, ExactMatch, Present, Present, Present]),
        );
        assert!(still_possible.is_empty());

        let still_possible = filter_candidates(
            &candidates,
            &record("wordb", [ExactMatch, ExactMatch, ExactMatch, ExactMatch, NoMatch]),
        );
        assert_eq!(still_possible, to_words(&["worda"]));
    }

    #[test]
    fn no_match_on_repeated_letter_excludes_words_with_that_letter() {
        // A stricter rule than the real game: a gray 'e' excludes all words with an 'e', even
        // though another 'e' in the same guess was matched.
        let candidates = to_words(&["sheep", "shelf", "shirt"]);

        let still_possible = filter_candidates(
            &candidates,
            &record("sheen", [ExactMatch, ExactMatch, ExactMatch, NoMatch, NoMatch]),
        );

        assert!(still_possible.is_empty());
    }

    #[test]
    fn never_filters_out_the_target() {
        let words = to_words(&[
            "whack", "crank", "eerie", "there", "sheep", "shelf", "alpha", "allot", "begot",
            "below", "endow", "ingot", "mamma", "llama",
        ]);
        for target in &words {
            let mut candidates = words.clone();
            for guess in &words {
                candidates = filter_candidates(&candidates, &grade_words(target, guess));
                assert!(
                    candidates.contains(target),
                    "{} was removed after guessing {}",
                    target,
                    guess
                );
            }
        }
    }
}
