//! Interactive play mode
//!
//! Line-based game loop: every line typed is a submission, except a handful
//! of `:` commands.

use crate::game::Engine;
use crate::output::formatters::{format_rejection, length_badge};
use crate::rules::Dictionary;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit";

/// Run interactive play on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D: Dictionary>(engine: &mut Engine<D>) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(engine, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive a game from `input`, writing everything the player sees to `output`
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`.
pub fn play_session<D, R, W>(engine: &mut Engine<D>, input: R, mut output: W) -> io::Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "{}",
        "              W O R D   S C R A M B L E".bright_green().bold()
    )?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "\nEnter all the words you can think of that can be made from the letters of the given word."
    )?;
    writeln!(output, "{HELP}")?;
    announce_root(engine, &mut output)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                engine.start_game();
                announce_root(engine, &mut output)?;
            }
            ":words" | ":w" => print_words(engine, &mut output)?,
            ":help" | ":h" => writeln!(output, "{HELP}")?,
            raw => match engine.submit(raw) {
                Ok(Some(word)) => {
                    writeln!(
                        output,
                        "{} {}  {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("Score: {}", engine.score()).bright_yellow()
                    )?;
                }
                Ok(None) => {}
                Err(reason) => {
                    writeln!(output, "{}", format_rejection(reason, engine.root().text()))?;
                }
            },
        }
    }

    writeln!(
        output,
        "\n👋 Final score: {}\n",
        engine.score().to_string().bright_cyan().bold()
    )?;
    Ok(())
}

fn announce_root<D: Dictionary, W: Write>(engine: &Engine<D>, output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Your word: {}",
        engine.root().text().to_uppercase().bright_yellow().bold()
    )?;
    if engine.root().is_fallback() {
        writeln!(
            output,
            "{}",
            "(start words unavailable, using the default word)".bright_black()
        )?;
    }
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

fn print_words<D: Dictionary, W: Write>(engine: &Engine<D>, output: &mut W) -> io::Result<()> {
    if engine.used_words().is_empty() {
        writeln!(output, "No words yet!")?;
        return Ok(());
    }

    for word in engine.used_words() {
        writeln!(output, "  {} {}", length_badge(word).bright_cyan(), word)?;
    }
    writeln!(
        output,
        "Score: {}",
        engine.score().to_string().bright_yellow().bold()
    )?;
    Ok(())
}
