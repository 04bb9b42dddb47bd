use clap::{ArgEnum, Parser, Subcommand};
use log::{LevelFilter, Metadata, Record};
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant;
use wordle_bots::*;

/// Simulates Wordle games to compare automated guessing strategies.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Seed for choosing targets and for any random guessing.
    #[clap(short, long, default_value_t = 12)]
    seed: u64,

    /// Prints debug logs to stderr.
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plays many seeded games with every strategy and reports how each one did.
    Compare {
        /// Number of games to play per strategy.
        #[clap(short, long, default_value_t = 1000)]
        runs: u32,
        /// Dampens the location bonus of the positional strategy. Larger values mean a smaller
        /// bonus.
        #[clap(short, long, default_value_t = 1.0)]
        pos_weight: f64,
    },
    /// Plays one game against the given target word and prints every guess.
    Single {
        target: String,
        #[clap(long, arg_enum, default_value = "positional")]
        strategy: Strategy,
        #[clap(short, long, default_value_t = 1.0)]
        pos_weight: f64,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Strategy {
    Random,
    Elimination,
    Frequency,
    Positional,
}

impl Strategy {
    fn all() -> [Strategy; 4] {
        [
            Strategy::Random,
            Strategy::Elimination,
            Strategy::Frequency,
            Strategy::Positional,
        ]
    }

    fn description(self) -> &'static str {
        match self {
            Strategy::Random => "Randomly chooses words",
            Strategy::Elimination => "Filters down based on rules, then randomly chooses",
            Strategy::Frequency => "Prioritize words with high letter frequencies",
            Strategy::Positional => "Account for letter positional frequency",
        }
    }

    fn create(
        self,
        dictionary: &Dictionary,
        seed: u64,
        pos_weight: f64,
    ) -> Result<Box<dyn Strategist>, WordleError> {
        Ok(match self {
            Strategy::Random => Box::new(RandomStrategist::from_seed(dictionary.clone(), seed)),
            Strategy::Elimination => {
                Box::new(EliminationStrategist::from_seed(dictionary.clone(), seed))
            }
            Strategy::Frequency => Box::new(FrequencyStrategist::frequency(dictionary.clone())),
            Strategy::Positional => Box::new(PositionalFrequencyStrategist::positional(
                dictionary.clone(),
                pos_weight,
            )?),
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    if args.verbose {
        log::set_logger(&STDERR_LOGGER)?;
        log::set_max_level(LevelFilter::Debug);
    }
    println!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = Dictionary::from_reader(words_reader)?;
    println!("There are {} possible words.", dictionary.len());

    match args.command {
        Command::Compare { runs, pos_weight } => {
            compare_strategies(&dictionary, args.seed, runs, pos_weight)?
        }
        Command::Single {
            target,
            strategy,
            pos_weight,
        } => play_single_game(&dictionary, &target, strategy, args.seed, pos_weight)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn compare_strategies(
    dictionary: &Dictionary,
    seed: u64,
    runs: u32,
    pos_weight: f64,
) -> Result<(), WordleError> {
    println!("Testing Wordle bots");
    let harness = BatchHarness::new(seed, runs);
    for strategy in Strategy::all() {
        let report = match strategy {
            Strategy::Random => harness.run(dictionary, |run_seed| {
                RandomStrategist::from_seed(dictionary.clone(), run_seed)
            })?,
            Strategy::Elimination => harness.run(dictionary, |run_seed| {
                EliminationStrategist::from_seed(dictionary.clone(), run_seed)
            })?,
            Strategy::Frequency => {
                let prototype = FrequencyStrategist::frequency(dictionary.clone());
                harness.run(dictionary, |_| prototype.clone())?
            }
            Strategy::Positional => {
                let prototype =
                    PositionalFrequencyStrategist::positional(dictionary.clone(), pos_weight)?;
                harness.run(dictionary, |_| prototype.clone())?
            }
        };
        println!("\n{}", strategy.description());
        println!("{}", report.stats);
    }
    Ok(())
}

fn play_single_game(
    dictionary: &Dictionary,
    target: &str,
    strategy: Strategy,
    seed: u64,
    pos_weight: f64,
) -> Result<(), WordleError> {
    let judge = Judge::new(dictionary.clone(), target)?;
    let mut strategist = strategy.create(dictionary, seed, pos_weight)?;

    println!("\n{:?} strategy simulation for word '{}'", strategy, judge.target());
    let outcome = play_game(&judge, strategist.as_mut(), MAX_GUESSES)?;
    println!("Win: {}", outcome.is_win());
    println!("Guesses: {}", outcome.guess_count());
    println!("Gameplay:");
    for record in outcome.history.iter() {
        println!("\t{}", record);
    }
    Ok(())
}

struct StderrLogger;

static STDERR_LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}
