//! Display functions for command results

use super::formatters::{create_progress_bar, format_rejection, length_badge};
use crate::commands::{AnalysisResult, CheckResult};
use colored::Colorize;

/// Print the result of checking a list of words
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking against: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.outcome {
            Ok(Some(word)) => println!(
                "{} {} {}  {}",
                "✓".green().bold(),
                length_badge(word).bright_cyan(),
                word.bright_white().bold(),
                format!("Score: {}", step.score_after).bright_black()
            ),
            Ok(None) => println!("{}", "(blank, ignored)".bright_black()),
            Err(reason) => {
                println!("{} {}", "→".bright_black(), step.input.trim());
                println!("{}", format_rejection(*reason, &result.root));
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} of {} accepted, score {}",
            result.accepted(),
            result.steps.len(),
            result.score
        )
        .green()
        .bold()
    );
}

/// Print the result of root analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} dictionary words:",
        result.dictionary_size
    );
    println!("   Playable words:  {}", result.words.len());
    println!(
        "   Max score:       {}",
        result.max_score.to_string().bright_yellow().bold()
    );

    if result.words.is_empty() {
        return;
    }

    let most = result.distribution.values().copied().max().unwrap_or(0);
    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for (&len, &count) in result.distribution.iter().rev() {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for word in &result.words {
        println!("   {} {}", length_badge(word).bright_cyan(), word);
    }
}
