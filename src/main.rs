//! Word Scramble - CLI
//!
//! Find every word hiding in the letters of a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{CheckConfig, analyze_root, run_check, run_play},
    game::{GameConfig, WordListSource},
    logging::init_logging,
    output::{print_analysis_result, print_check_result},
    rules::Language,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordListSource,

    /// Dictionary: 'embedded' (default, English) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: WordListSource,

    /// Language tag the dictionary answers for
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,

    /// Seed for reproducible root words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Submit words in order against a fixed root
    Check {
        /// Root word to play against
        #[arg(short, long)]
        root: String,

        /// Words to submit
        words: Vec<String>,
    },

    /// List every dictionary word that can be made from a root
    Analyze {
        /// Root word to analyze
        root: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig {
        start_words: cli.wordlist,
        dictionary: cli.dictionary,
        language: Language::new(&cli.language),
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Check { root, words } => run_check_command(&config, root, words),
        Commands::Analyze { root } => run_analyze_command(&config, &root),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let mut engine = config
        .build_engine()
        .context("Failed to load dictionary")?;
    run_play(&mut engine).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(config: &GameConfig, root: String, words: Vec<String>) -> Result<()> {
    let mut engine = config
        .build_engine()
        .context("Failed to load dictionary")?;
    let result =
        run_check(CheckConfig::new(root, words), &mut engine).map_err(|e| anyhow::anyhow!(e))?;

    print_check_result(&result);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, root: &str) -> Result<()> {
    let dictionary = config
        .load_dictionary()
        .context("Failed to load dictionary")?;
    let words: Vec<&str> = dictionary.words().collect();

    let result = analyze_root(root, &words).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}
