//! Simple interactive CLI mode
//!
//! Line-oriented game on stdin/stdout without the TUI

use crate::dictionary::DictionaryOracle;
use crate::output::display::print_scoreboard;
use crate::session::Session;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    StartOver,
    ShowWords,
    Help,
    /// Anything else is a word to submit
    Submit(String),
}

impl SimpleCommand {
    /// Parse a line; commands start with `:` so they never shadow real words
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" | ":restart" => Self::StartOver,
            ":w" | ":words" => Self::ShowWords,
            ":h" | ":help" | ":?" => Self::Help,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<D: DictionaryOracle>(session: &mut Session<D>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    print_help();
    print_root(session.root_word());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            // EOF
            println!();
            break;
        };
        let line = line.context("failed to read from stdin")?;

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => break,
            SimpleCommand::StartOver => {
                let root = session.start_over().to_string();
                println!("\n🔄 New game started!");
                print_root(&root);
            }
            SimpleCommand::ShowWords => print_scoreboard(session.state()),
            SimpleCommand::Help => print_help(),
            SimpleCommand::Submit(input) => match session.submit(&input) {
                Ok(None) => {}
                Ok(Some(scored)) => {
                    let bonus = if scored.bonus { " (double!)" } else { "" };
                    println!(
                        "{} {} +{}{}   Score: {}",
                        "✓".green().bold(),
                        scored.word.bright_white().bold(),
                        scored.points,
                        bonus.bright_blue(),
                        session.score().to_string().bright_yellow()
                    );
                }
                Err(rejection) => {
                    println!(
                        "{} {}: {}",
                        "✗".red().bold(),
                        rejection.title().red().bold(),
                        rejection.message(session.root_word())
                    );
                }
            },
        }
    }

    print_scoreboard(session.state());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_root(root_word: &str) {
    println!(
        "\nRoot word: {}\n",
        root_word.to_uppercase().bright_yellow().bold()
    );
}

fn print_help() {
    println!("Type a word and press Enter to submit it.");
    println!("Commands: ':new' new root word, ':words' show your words, ':quit' to exit\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse(":q"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(" :quit "), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":new"), SimpleCommand::StartOver);
        assert_eq!(SimpleCommand::parse(":words"), SimpleCommand::ShowWords);
        assert_eq!(SimpleCommand::parse(":help"), SimpleCommand::Help);
    }

    #[test]
    fn plain_words_are_submissions() {
        // "new" is a real word and must not restart the game
        assert_eq!(
            SimpleCommand::parse("new"),
            SimpleCommand::Submit("new".to_string())
        );
        assert_eq!(
            SimpleCommand::parse("  Silk "),
            SimpleCommand::Submit("  Silk ".to_string())
        );
        assert_eq!(SimpleCommand::parse(""), SimpleCommand::Submit(String::new()));
    }
}
