#[macro_use]
extern crate assert_matches;

use wordle_bots::*;

use std::fs::File;
use std::io;
use std::result::Result;

fn load_dictionary() -> Result<Dictionary, WordleError> {
    Dictionary::from_reader(io::BufReader::new(File::open("../data/words.txt")?))
}

/// Plays a game by hand, checking the candidate set after every guess.
fn check_candidates_shrink<S: Strategist>(
    dictionary: &Dictionary,
    target: &str,
    mut strategist: S,
) -> Result<(), WordleError> {
    let judge = Judge::new(dictionary.clone(), target)?;
    let target = judge.target().clone();
    let mut history: Vec<GuessRecord> = Vec::new();
    let mut previous_size = dictionary.len();
    for _ in 0..MAX_GUESSES {
        let guess = strategist.next_guess(&history)?;
        let candidates = strategist.candidates().unwrap();

        assert!(candidates.len() <= previous_size);
        assert!(candidates.contains(&target), "{} was eliminated", target);
        assert!(candidates.contains(&guess), "{} is not a candidate", guess);
        previous_size = candidates.len();

        let record = judge.grade(guess.as_str())?;
        let is_win = record.is_win();
        history.push(record);
        if is_win {
            break;
        }
    }
    Ok(())
}

macro_rules! test_filtering_strategist {
    ($construct_strategist_fn:ident) => {
        #[test]
        fn candidates_shrink_and_keep_target() -> Result<(), WordleError> {
            let dictionary = load_dictionary()?;
            for target in ["whack", "sheet", "teeth", "alarm", "youth", "quiet"] {
                check_candidates_shrink(
                    &dictionary,
                    target,
                    $construct_strategist_fn(&dictionary),
                )?;
            }
            Ok(())
        }

        #[test]
        fn solves_single_word_dictionary() -> Result<(), WordleError> {
            let dictionary = Dictionary::from_iterator(&["whack"])?;
            let judge = Judge::new(dictionary.clone(), "whack")?;

            let outcome = play_game(
                &judge,
                &mut $construct_strategist_fn(&dictionary),
                MAX_GUESSES,
            )?;

            assert_eq!(outcome.state, GameState::Won(1));
            assert_eq!(outcome.guess_count(), 1);
            Ok(())
        }

        #[test]
        fn reports_inconsistent_history() -> Result<(), WordleError> {
            let dictionary = load_dictionary()?;
            let mut strategist = $construct_strategist_fn(&dictionary);
            // An 'e' can't be both in the word and missing from it.
            let record = GuessRecord {
                guess: Word::new("sheet")?,
                verdicts: [
                    LetterVerdict::new('s', LetterStatus::ExactMatch),
                    LetterVerdict::new('h', LetterStatus::NoMatch),
                    LetterVerdict::new('e', LetterStatus::Present),
                    LetterVerdict::new('e', LetterStatus::NoMatch),
                    LetterVerdict::new('t', LetterStatus::NoMatch),
                ],
            };

            assert_matches!(
                strategist.next_guess(&[record]),
                Err(WordleError::NoCandidates)
            );
            // A new game starts over with the whole dictionary.
            assert_matches!(strategist.next_guess(&[]), Ok(_));
            assert_eq!(strategist.candidates().unwrap().len(), dictionary.len());
            Ok(())
        }

        #[test]
        fn reset_restores_full_dictionary() -> Result<(), WordleError> {
            let dictionary = load_dictionary()?;
            let judge = Judge::new(dictionary.clone(), "whack")?;
            let mut strategist = $construct_strategist_fn(&dictionary);

            strategist.next_guess(&[judge.grade("sport")?])?;
            assert!(strategist.candidates().unwrap().len() < dictionary.len());

            strategist.reset();
            assert_eq!(strategist.candidates().unwrap(), dictionary.words());
            Ok(())
        }
    };
}

mod elimination {

    use super::*;

    fn create_strategist(dictionary: &Dictionary) -> EliminationStrategist {
        EliminationStrategist::from_seed(dictionary.clone(), 12)
    }

    test_filtering_strategist!(create_strategist);

    #[test]
    fn same_seed_same_guesses() -> Result<(), WordleError> {
        let dictionary = load_dictionary()?;
        let judge = Judge::new(dictionary.clone(), "whack")?;

        let first = play_game(&judge, &mut create_strategist(&dictionary), MAX_GUESSES)?;
        let second = play_game(&judge, &mut create_strategist(&dictionary), MAX_GUESSES)?;

        assert_eq!(first, second);
        Ok(())
    }
}

mod frequency {

    use super::*;

    fn create_strategist(dictionary: &Dictionary) -> FrequencyStrategist {
        FrequencyStrategist::frequency(dictionary.clone())
    }

    test_filtering_strategist!(create_strategist);

    #[test]
    fn picks_highest_scoring_candidate() -> Result<(), WordleError> {
        let dictionary =
            Dictionary::from_iterator(&["alpha", "allot", "begot", "below", "endow", "ingot"])?;
        let mut strategist = create_strategist(&dictionary);

        // "begot" and "below" tie, and "begot" comes first.
        assert_eq!(strategist.next_guess(&[])?.as_str(), "begot");
        Ok(())
    }

    #[test]
    fn ties_go_to_dictionary_order() -> Result<(), WordleError> {
        // These all have the same letters, so they all have the same score.
        let dictionary = Dictionary::from_iterator(&["trace", "crate", "react"])?;
        assert_eq!(create_strategist(&dictionary).next_guess(&[])?.as_str(), "trace");

        let dictionary = Dictionary::from_iterator(&["react", "crate", "trace"])?;
        assert_eq!(create_strategist(&dictionary).next_guess(&[])?.as_str(), "react");
        Ok(())
    }
}

mod positional_frequency {

    use super::*;

    fn create_strategist(dictionary: &Dictionary) -> PositionalFrequencyStrategist {
        PositionalFrequencyStrategist::positional(dictionary.clone(), 1.0).unwrap()
    }

    test_filtering_strategist!(create_strategist);

    #[test]
    fn plays_whack() -> Result<(), WordleError> {
        let dictionary = load_dictionary()?;
        let judge = Judge::new(dictionary.clone(), "whack")?;

        let outcome = play_game(&judge, &mut create_strategist(&dictionary), MAX_GUESSES)?;

        assert!(outcome.history.len() <= MAX_GUESSES as usize);
        assert!(outcome.guess_count() <= MAX_GUESSES + 1);
        assert_eq!(outcome.is_win(), outcome.guess_count() <= MAX_GUESSES);
        assert_eq!(
            outcome.is_win(),
            outcome.history.last().map_or(false, GuessRecord::is_win)
        );
        Ok(())
    }

    #[test]
    fn is_deterministic() -> Result<(), WordleError> {
        let dictionary = load_dictionary()?;
        let judge = Judge::new(dictionary.clone(), "sheet")?;

        let first = play_game(&judge, &mut create_strategist(&dictionary), MAX_GUESSES)?;
        let second = play_game(&judge, &mut create_strategist(&dictionary), MAX_GUESSES)?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn rejects_bad_weight() -> Result<(), WordleError> {
        assert_matches!(
            PositionalFrequencyStrategist::positional(load_dictionary()?, 0.0),
            Err(WordleError::InvalidWeight(_))
        );
        Ok(())
    }
}

mod random {

    use super::*;

    #[test]
    fn same_seed_same_guesses() -> Result<(), WordleError> {
        let dictionary = load_dictionary()?;
        let mut first = RandomStrategist::from_seed(dictionary.clone(), 12);
        let mut second = RandomStrategist::from_seed(dictionary.clone(), 12);

        for _ in 0..10 {
            let guess = first.next_guess(&[])?;
            assert_eq!(guess, second.next_guess(&[])?);
            assert!(dictionary.contains(guess.as_str()));
        }
        Ok(())
    }

    #[test]
    fn does_not_track_candidates() -> Result<(), WordleError> {
        let dictionary = load_dictionary()?;
        let judge = Judge::new(dictionary.clone(), "whack")?;
        let mut strategist = RandomStrategist::from_seed(dictionary, 12);

        let outcome = play_game(&judge, &mut strategist, MAX_GUESSES)?;

        assert!(strategist.candidates().is_none());
        assert!(outcome.guess_count() >= 1 && outcome.guess_count() <= MAX_GUESSES + 1);
        Ok(())
    }

    #[test]
    fn loses_after_max_guesses() -> Result<(), WordleError> {
        let dictionary = Dictionary::from_iterator(&["whack", "crank"])?;
        let judge = Judge::new(dictionary.clone(), "whack")?;

        // With only one guess allowed, every game ends after the first guess.
        for seed in 0..10 {
            let mut strategist = RandomStrategist::from_seed(dictionary.clone(), seed);
            let outcome = play_game(&judge, &mut strategist, 1)?;

            assert_eq!(outcome.history.len(), 1);
            if outcome.is_win() {
                assert_eq!(outcome.state, GameState::Won(1));
            } else {
                assert_eq!(outcome.state, GameState::Lost);
                assert_eq!(outcome.guess_count(), 2);
            }
        }
        Ok(())
    }
}

#[test]
fn strategists_work_as_trait_objects() -> Result<(), WordleError> {
    let dictionary = load_dictionary()?;
    let judge = Judge::new(dictionary.clone(), "whack")?;
    let mut strategists: Vec<Box<dyn Strategist>> = vec![
        Box::new(RandomStrategist::from_seed(dictionary.clone(), 12)),
        Box::new(EliminationStrategist::from_seed(dictionary.clone(), 12)),
        Box::new(FrequencyStrategist::frequency(dictionary.clone())),
        Box::new(PositionalFrequencyStrategist::positional(dictionary, 1.0)?),
    ];

    for strategist in strategists.iter_mut() {
        let outcome = play_game(&judge, strategist.as_mut(), MAX_GUESSES)?;
        assert!(!outcome.history.is_empty());
    }
    Ok(())
}
