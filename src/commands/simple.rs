//! Simple interactive CLI mode
//!
//! Line-oriented game loop without the TUI.

use crate::core::Equation;
use crate::game::{Round, RoundState};
use crate::output::formatters::paint_row;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(target: Equation, max_attempts: usize) -> Result<(), String> {
    let width = target.width();
    let mut round = Round::new(target, max_attempts);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Numble - Guess the Equation                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("The hidden equation is {width} characters: digits, + - * / and one =.");
    println!("Every guess must itself be a true equation.\n");
    println!("  🟩 right character, right spot");
    println!("  🟪 right character, wrong spot");
    println!("  ⬛ character not in the equation\n");
    println!("Commands: 'quit' to exit\n");

    while !round.is_over() {
        let turn = round.attempts().len() + 1;
        let prompt = format!("Guess {turn}/{max_attempts} ({width} chars)");
        let input = get_user_input(&prompt)?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!(
                    "\nThe equation was {}. 👋 Thanks for playing!\n",
                    round.target().text().bright_yellow().bold()
                );
                return Ok(());
            }
            line => {
                // Retype each row from scratch
                while round.pop_char() {}
                for c in line.chars() {
                    if !round.push_char(c) {
                        println!("  (ignored '{c}')");
                    }
                }

                match round.submit() {
                    Ok(attempt) => {
                        println!("\n  {}\n", paint_row(&attempt.guess, &attempt.feedback));
                    }
                    Err(reason) => {
                        println!("{} {reason}\n", "❌".red());
                    }
                }
            }
        }
    }

    match round.state() {
        RoundState::Won => {
            let turns = round.attempts().len();
            println!("{}", "═".repeat(64).bright_cyan());
            println!(
                "{}",
                "    🎉 ✨  E Q U A T I O N   S O L V E D !  ✨ 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(64).bright_cyan());

            let performance = match turns {
                1 => "🏆 Perfect! Incredible hole-in-one!",
                2 => "⭐ Excellent! Two guesses!",
                3 => "💫 Great! Very well played!",
                4 => "✨ Good! Nice work!",
                5 => "👍 Solved! Got it!",
                _ => "✓ Complete! Success!",
            };
            println!("\n  {}", performance.bright_yellow().bold());
            println!(
                "\n  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        RoundState::Lost => {
            println!("{}", "═".repeat(64).bright_black());
            println!("{}", "  Out of attempts!".red().bold());
            println!(
                "  The equation was {}",
                round.target().text().bright_yellow().bold()
            );
        }
        RoundState::InProgress => unreachable!("loop exits only when the round is over"),
    }

    println!("\n  Share grid:");
    for line in round.share_grid().lines() {
        println!("    {line}");
    }
    println!();

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
