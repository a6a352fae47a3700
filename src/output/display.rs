//! Display functions for command results

use super::formatters::{bonus_bar, length_badge, points_label};
use crate::commands::{CheckResult, RevealResult};
use crate::core::{GameState, letter_count};
use colored::Colorize;

/// Print the verdict for every checked word and the final score
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for verdict in &result.verdicts {
        match &verdict.outcome {
            Ok(Some(scored)) => println!(
                "  {} {:<16} {}",
                "✓".green().bold(),
                scored.word,
                points_label(scored.points, scored.bonus).green()
            ),
            Ok(None) => println!(
                "  {} {:<16} {}",
                "·".bright_black(),
                "",
                "ignored".bright_black()
            ),
            Err(rejection) => println!(
                "  {} {:<16} {} {}",
                "✗".red().bold(),
                verdict.input.trim(),
                rejection.code().red(),
                format!("({})", rejection.message(&result.root_word)).bright_black()
            ),
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Accepted {} {}, score {}",
            result.accepted,
            if result.accepted == 1 { "word" } else { "words" },
            result.score
        )
        .bold()
    );
}

/// Print the words still available in a game
///
/// `limit` caps how many words are listed; the totals always cover all of them.
pub fn print_reveal_result(result: &RevealResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS FROM".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("  {} {}", length_badge(letter_count(word)).bright_cyan(), word);
    }
    if shown < result.words.len() {
        println!(
            "  {}",
            format!("... and {} more", result.words.len() - shown).bright_black()
        );
    }

    println!("\n📊 {} words available", result.words.len());
    println!(
        "   Best possible score: {}",
        result.available_points.to_string().bright_yellow().bold()
    );
}

/// Print the current score and used words, newest first
pub fn print_scoreboard(state: &GameState) {
    let words = if state.word_count() == 1 { "word" } else { "words" };
    println!(
        "\nScore: {}   ({} {words})",
        state.score().to_string().bright_yellow().bold(),
        state.word_count()
    );
    println!(
        "Bonus: [{}] {}",
        bonus_bar(state, 20).bright_blue(),
        if state.bonus_active() {
            "double points!".bright_blue().bold()
        } else {
            format!("after {} words", state.bonus_threshold()).normal()
        }
    );

    for word in state.used_words() {
        let badge = length_badge(letter_count(word));
        if state.bonus_active() {
            println!("  {} {}", badge, word.bright_blue());
        } else {
            println!("  {badge} {word}");
        }
    }
    println!();
}
