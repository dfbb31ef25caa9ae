use anyhow::{Context, Result};
use aoc_core::diagnostic::{LifeSupport, PowerConsumption};
use aoc_io::loader;
use log::info;
use std::time::Instant;

pub struct DiagnosticSummary {
    pub power: PowerConsumption,
    pub life_support: LifeSupport,
}

/// Computes both diagnostic answers for a report.
///
/// The oxygen and CO2 reductions are independent, so they run on the rayon
/// pool side by side.
pub fn solve(input: &str) -> Result<DiagnosticSummary> {
    let report = loader::report_from_str(input)?;
    info!(
        "Report: {} entries of width {}",
        report.len(),
        report.width()
    );

    let power = PowerConsumption::from_report(&report)
        .context("Failed to compute power consumption")?;

    let (oxygen, co2) = rayon::join(
        || report.reduce_to_rating(true),
        || report.reduce_to_rating(false),
    );
    let life_support = LifeSupport::from_ratings(
        oxygen.context("Failed to reduce oxygen generator rating")?,
        co2.context("Failed to reduce CO2 scrubber rating")?,
    );

    Ok(DiagnosticSummary {
        power,
        life_support,
    })
}

pub fn run(input: &str) -> Result<()> {
    let start = Instant::now();
    let summary = solve(input)?;
    info!("Diagnostic solved in {:?}", start.elapsed());

    let power = &summary.power;
    let life = &summary.life_support;
    println!("Gamma rate:   {} ({})", power.gamma, power.gamma.value());
    println!("Epsilon rate: {} ({})", power.epsilon, power.epsilon.value());
    println!("Power consumption: {}", power.product());
    println!("Oxygen generator rating: {} ({})", life.oxygen, life.oxygen.value());
    println!("CO2 scrubber rating:     {} ({})", life.co2, life.co2.value());
    println!("Life support rating: {}", life.product());
    Ok(())
}
