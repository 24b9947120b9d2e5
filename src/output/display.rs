//! Display functions for the line-mode game and command reports

use super::formatters::{category_badge, create_progress_bar, mistake_dots};
use crate::commands::SimulationResult;
use crate::core::GameStatus;
use crate::engine::{Engine, MAX_MISTAKES, StateStore};
use crate::stats::{RoundResult, Summary};
use colored::Colorize;

/// Print the board: solved categories, then the numbered active words
pub fn print_board<S: StateStore>(engine: &Engine<S>) {
    println!("\n{}", "─".repeat(60).cyan());

    for category in engine.solved_categories() {
        println!("{}", category_badge(&category.name, &category.color));
        println!("  {}", category.words.join(", "));
    }

    let words = engine.active_words();
    for (row, chunk) in words.chunks(4).enumerate() {
        let line: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, word)| {
                let label = format!("{:>2}. {word:<12}", row * 4 + col + 1);
                if engine.is_selected(word) {
                    label.black().on_white().bold().to_string()
                } else {
                    label
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }

    if engine.status() == GameStatus::Playing {
        println!(
            "\nMistakes remaining: {}",
            mistake_dots(engine.mistakes_remaining(), MAX_MISTAKES).red()
        );
        if let Some(message) = engine.message() {
            println!("{}", message.to_string().bold());
        }
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the end-of-round screen
pub fn print_round_end<S: StateStore>(engine: &Engine<S>) {
    match engine.status() {
        GameStatus::Won => {
            println!("\n{}", "═".repeat(60).bright_magenta());
            if let Some(message) = engine.message() {
                println!("  🎉 {} 🎉", message.to_string().bright_magenta().bold());
            }
            println!("{}", "═".repeat(60).bright_magenta());
        }
        GameStatus::Lost => {
            println!("\n  😔");
            println!("  {}", "Thank you for playing, friend.".bold());
            println!("  We're all done.");
            println!("  {}", "Better luck next time.".bright_black());
        }
        GameStatus::Loading | GameStatus::Playing => {}
    }
}

/// Print the aggregate statistics report
pub fn print_summary(summary: &Summary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLAY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Total plays:      {}", summary.total_plays);
    println!(
        "   Wins / losses:    {} / {}",
        summary.wins.to_string().green(),
        summary.losses.to_string().red()
    );
    println!("   Win rate:         {:.1}%", summary.win_rate());
    println!("   Avg mistakes:     {:.2}", summary.avg_mistakes);
    println!(
        "   Avg time:         {:.0}s",
        summary.avg_time_to_complete / 1000.0
    );

    if summary.plays.is_empty() {
        return;
    }

    println!("\n📜 {}", "Recent plays:".bright_cyan().bold());
    for play in summary.plays.iter().take(20) {
        let result = match play.record.result {
            RoundResult::Won => "won ".green(),
            RoundResult::Lost => "lost".red(),
        };
        println!(
            "   {}  {}  {} mistakes  {:>5.0}s  {} solved  [{}]",
            play.timestamp.format("%Y-%m-%d %H:%M"),
            result,
            play.record.mistakes,
            play.record.time_to_complete as f64 / 1000.0,
            play.record.categories_solved.len(),
            play.ip_hash.bright_black()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Average mistakes: {}",
        format!("{:.2}", result.average_mistakes).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    let violations = if result.invariant_violations == 0 {
        "0".green()
    } else {
        result.invariant_violations.to_string().red().bold()
    };
    println!("   Pool violations:  {violations}");

    println!("\n📈 {}", "Categories solved:".bright_cyan().bold());
    for (solved, &count) in result.solved_distribution.iter().enumerate() {
        let pct = if result.rounds == 0 {
            0.0
        } else {
            count as f64 / result.rounds as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {solved}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
