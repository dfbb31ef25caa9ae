use anyhow::{Context, Result};
use aoc_io::parser;
use log::info;

pub struct OrigamiSummary {
    /// Fold name and dot count after the first fold, if there was one.
    pub first_fold: Option<(String, usize)>,
    pub image: String,
}

pub fn solve(input: &str) -> Result<OrigamiSummary> {
    let mut instructions = parser::parse_instructions(input)?;
    info!(
        "Folding {} dots {} times",
        instructions.paper.dot_count(),
        instructions.folds.len()
    );

    let counts = instructions.fold_all().context("Failed to fold paper")?;
    let first_fold = instructions
        .folds
        .first()
        .zip(counts.first())
        .map(|(fold, &count)| (fold.to_string(), count));

    let image = instructions
        .paper
        .render()
        .context("Failed to render paper")?;

    Ok(OrigamiSummary { first_fold, image })
}

pub fn run(input: &str) -> Result<()> {
    let summary = solve(input)?;
    if let Some((name, count)) = &summary.first_fold {
        println!("[Part 1] Dots after {name} (fold 1): {count}");
    }
    println!("[Part 2] Final paper image\n");
    println!("{}", summary.image);
    Ok(())
}
