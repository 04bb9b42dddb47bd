#[cfg(test)]
mod tests {

    use std::error::Error;
    use std::fs::File;
    use std::io;

    use ron;
    use wordle_bots::*;

    #[test]
    fn game_outcome_history_serde() -> Result<(), Box<dyn Error>> {
        let dictionary =
            Dictionary::from_reader(io::BufReader::new(File::open("../data/words.txt")?))?;
        let judge = Judge::new(dictionary.clone(), "whack")?;
        let mut strategist = PositionalFrequencyStrategist::positional(dictionary, 1.0)?;
        let outcome = play_game(&judge, &mut strategist, MAX_GUESSES)?;

        let ser = ron::to_string(&(outcome.state, &outcome.history))?;
        let (state, history) = ron::from_str::<(GameState, Vec<GuessRecord>)>(&ser)?;

        assert_eq!(state, outcome.state);
        assert_eq!(history, outcome.history);
        Ok(())
    }

    #[test]
    fn batch_stats_serde() -> Result<(), Box<dyn Error>> {
        let dictionary = Dictionary::from_iterator(&["alpha", "allot", "begot", "below"])?;
        let report = BatchHarness::new(12, 10).run(&dictionary, |seed: u64| {
            EliminationStrategist::from_seed(dictionary.clone(), seed)
        })?;

        let ser = ron::to_string(&report.stats)?;
        let deser = ron::from_str::<BatchStats>(&ser)?;

        assert_eq!(deser, report.stats);
        Ok(())
    }

    #[test]
    fn word_deserialization_is_validated() {
        assert_eq!(
            ron::from_str::<Word>("\"whack\"").ok(),
            Some(Word::new("whack").unwrap())
        );
        assert!(ron::from_str::<Word>("\"toolong\"").is_err());
        assert!(ron::from_str::<Word>("\"wh4ck\"").is_err());
    }
}
