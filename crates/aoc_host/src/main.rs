mod anagram;
mod diagnostic;
mod lanternfish;
mod origami;

use anyhow::Result;
use aoc_common::lanternfish::DEFAULT_DAYS;
use aoc_io::loader;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aoc", version, about = "Advent of Code 2021 puzzle solvers")]
struct Cli {
    /// Puzzle input file; stdin when omitted.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Power consumption and life support ratings from a binary report.
    Diagnostic,
    /// Lanternfish population after a number of days.
    Lanternfish {
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: usize,
    },
    /// Dot count after the first fold and the fully folded paper.
    Origami,
    /// Anagram check and letter histogram of two lines.
    Anagram,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let input = loader::read_input(cli.input.as_deref())?;

    match cli.command {
        Commands::Diagnostic => diagnostic::run(&input)?,
        Commands::Lanternfish { days } => lanternfish::run(&input, days)?,
        Commands::Origami => origami::run(&input)?,
        Commands::Anagram => anagram::run(&input)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn days_default_and_override() {
        let cli = Cli::parse_from(["aoc", "lanternfish"]);
        assert!(matches!(cli.command, Commands::Lanternfish { days } if days == DEFAULT_DAYS));

        let cli = Cli::parse_from(["aoc", "lanternfish", "--days", "256", "-i", "fish.txt"]);
        assert!(matches!(cli.command, Commands::Lanternfish { days: 256 }));
        assert_eq!(cli.input, Some(PathBuf::from("fish.txt")));
    }
}
