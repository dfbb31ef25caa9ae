use anyhow::{Context, Result};
use aoc_io::parser;
use log::info;

pub fn solve(input: &str, days: usize) -> Result<u64> {
    let mut school = parser::parse_school(input)?;
    info!("Simulating {} lanternfish for {days} days", school.population());
    school
        .simulate(days)
        .with_context(|| format!("Failed to simulate {days} days"))?;
    Ok(school.population())
}

pub fn run(input: &str, days: usize) -> Result<()> {
    let population = solve(input, days)?;
    println!("Lanternfish after {days} days: {population}");
    Ok(())
}
