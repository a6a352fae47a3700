//! Word Scramble - CLI
//!
//! Word-derivation game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{check_words, reveal_words, run_simple},
    core::DEFAULT_BONUS_THRESHOLD,
    dictionary::WordSet,
    output::{print_check_result, print_reveal_result},
    session::{GameConfig, Session},
    wordlists::WordListSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    root_words: String,

    /// Dictionary: 'all' (default, embedded list) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "all")]
    dictionary: String,

    /// Accepted-word count above which words score double
    #[arg(long, global = true, default_value_t = DEFAULT_BONUS_THRESHOLD)]
    bonus_threshold: usize,

    /// Seed for picking root words (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Submit words in order against a root word and report each verdict
    Check {
        /// The root word to play on
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word that can be made from a root word
    Reveal {
        /// The root word to search
        root: String,

        /// Only list the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig {
        bonus_threshold: cli.bonus_threshold,
        seed: cli.seed,
        ..GameConfig::default()
    };

    let dictionary_words = WordListSource::from_arg(&cli.dictionary)
        .load_dictionary()
        .context("could not load dictionary")?;
    if dictionary_words.is_empty() {
        tracing::warn!("dictionary is empty, every word will be rejected");
    }
    let dictionary = WordSet::english(dictionary_words);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = Session::new(&config, dictionary, load_root_words(&cli.root_words)?);
            run_play_command(session)
        }
        Commands::Simple => {
            let mut session =
                Session::new(&config, dictionary, load_root_words(&cli.root_words)?);
            run_simple(&mut session)
        }
        Commands::Check { root, words } => {
            let mut session = new_fixed_session(&config, dictionary, &root)?;
            let result = check_words(&mut session, &words);
            print_check_result(&result);
            Ok(())
        }
        Commands::Reveal { root, limit } => {
            let session = new_fixed_session(&config, dictionary, &root)?;
            let candidates: Vec<&str> = session.dictionary().iter().collect();
            let result = reveal_words(
                session.state(),
                session.pipeline(),
                session.dictionary(),
                &candidates,
            );
            print_reveal_result(&result, limit);
            Ok(())
        }
    }
}

fn load_root_words(arg: &str) -> Result<Vec<String>> {
    WordListSource::from_arg(arg)
        .load_root_words()
        .context("could not load root words")
}

fn new_fixed_session(
    config: &GameConfig,
    dictionary: WordSet,
    root: &str,
) -> Result<Session<WordSet>> {
    anyhow::ensure!(!root.trim().is_empty(), "root word must not be blank");
    Ok(Session::with_root(config, dictionary, root))
}

fn run_play_command(session: Session<WordSet>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    run_tui(App::new(session))
}
