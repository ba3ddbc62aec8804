//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_emoji};
use crate::commands::{SimulationStats, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.text().to_uppercase(),
            pattern_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Entropy:    [{}] {}",
                entropy_bar(step.entropy, 20).green(),
                format!("{:.3} bits", step.entropy).bright_yellow()
            );
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a simulation batch
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Solved:           {} ({:.1}%)",
        format!("{}", stats.solved).green(),
        stats.solve_rate()
    );
    println!("   Failed:           {}", format!("{}", stats.failed).red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", stats.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.distribution.iter().enumerate() {
        let attempts = i + 1;
        let pct = if stats.games > 0 {
            (count as f64 / stats.games as f64) * 100.0
        } else {
            0.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {attempts}: {bar} {count:4} ({pct:5.1}%)");
    }
}
