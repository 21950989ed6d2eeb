//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, paint_row};
use crate::commands::{CheckReport, GenerateStats, ScoreReport};
use crate::core::Equation;
use colored::Colorize;

/// Print the diagnosis of a checked equation
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", report.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if let Some(value) = report.left_value {
        println!("  Left side evaluates to {value}");
    }

    if report.valid {
        println!("\n{}", "✅ Valid equation".green().bold());
    } else {
        println!("\n{}", "❌ Not accepted".red().bold());
        if let Some(reason) = report.failure {
            println!("  Reason: {reason}");
        }
    }
}

/// Print a scored target/guess pair
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        report.target.text().bright_yellow().bold()
    );
    println!("Guess:  {}", report.guess.text().bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", paint_row(&report.guess, &report.feedback));
    println!("\n  {}", feedback_to_emoji(&report.feedback));
    println!(
        "\n  {} correct, {} elsewhere",
        report.feedback.count_correct().to_string().green().bold(),
        report.feedback.count_present().to_string().magenta().bold()
    );
}

/// Print the statistics of a generation sweep with a few samples
pub fn print_generate_stats(stats: &GenerateStats, pool: &[Equation]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POOL GENERATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sweep:".bright_cyan().bold());
    println!("   Width:             {}", stats.width);
    println!("   Candidates tried:  {}", stats.searched);
    println!(
        "   Valid equations:   {}",
        stats.pool_size.to_string().bright_yellow().bold()
    );
    println!("   Time taken:        {:.2}s", stats.duration.as_secs_f64());
    println!("   Candidates/second: {:.0}", stats.candidates_per_second);

    let hit_rate = stats.pool_size as f64 / stats.searched as f64 * 100.0;
    let bar = create_progress_bar(hit_rate, 100.0, 30);
    println!("   Hit rate:          [{}] {hit_rate:.2}%", bar.green());

    if !pool.is_empty() {
        println!("\n📐 {}", "Samples:".bright_cyan().bold());
        let step = (pool.len() / 8).max(1);
        for eq in pool.iter().step_by(step).take(8) {
            println!("   • {eq}");
        }
    }
}
