//! Batch cohort simulation
//!
//! Loads a household cohort from CSV, runs one policy across it in parallel,
//! and reports per-household results plus an aggregate summary.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Parser;

use policy_impact::avatar::load_avatars;
use policy_impact::{Avatar, CohortRunner, CohortSummary, PolicySpec, SimulationResult};

#[derive(Parser)]
#[command(name = "run_cohort")]
#[command(about = "Run one policy across a household cohort")]
struct Cli {
    /// Cohort CSV with Name,Age,Income,Location,FamilySize,EmploymentStatus,
    /// HealthStatus,EducationLevel columns
    #[arg(long)]
    avatars: PathBuf,

    /// Policy JSON file in the wire shape {type, name, description, parameters}
    #[arg(long)]
    policy: PathBuf,

    /// Write per-household results to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the aggregate summary as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let avatars = load_avatars(&cli.avatars)
        .map_err(|e| anyhow!("loading cohort from {}: {e}", cli.avatars.display()))?;

    let raw = fs::read_to_string(&cli.policy)
        .with_context(|| format!("reading policy file {}", cli.policy.display()))?;
    let policy = PolicySpec::from_json(&raw)?;

    let start = Instant::now();
    let runner = CohortRunner::new();
    let results = runner.run_cohort(&avatars, &policy);
    let elapsed = start.elapsed();

    let summary = CohortSummary::summarize(&results);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Cohort Impact Report");
    println!("====================");
    println!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Policy: {} ({})", policy.name, policy.change.kind());
    println!("Households: {} in {:?}\n", avatars.len(), elapsed);

    println!(
        "{:<20} {:>8} {:>10} {:>10} {:>8} {:>6}",
        "Household", "Income", "Monthly", "Annual", "Pct", "Score"
    );
    println!("{}", "-".repeat(68));

    for (avatar, result) in avatars.iter().zip(&results).take(20) {
        let fi = &result.financial_impact;
        println!(
            "{:<20} {:>8.0} {:>10.2} {:>10.2} {:>7.2}% {:>+6}",
            avatar.name,
            avatar.income,
            fi.monthly_change,
            fi.annual_change,
            fi.percentage_change,
            result.quality_of_life.score_change,
        );
    }
    if avatars.len() > 20 {
        println!("... ({} more households)", avatars.len() - 20);
    }

    if let Some(path) = &cli.output {
        write_results_csv(path, &avatars, &results)?;
        println!("\nFull results written to: {}", path.display());
    }

    println!("\nSummary:");
    println!("  Total annual change: ${:.2}", summary.total_annual_change);
    println!("  Mean monthly change: ${:.2}", summary.mean_monthly_change);
    println!("  Mean quality score: {:.2}", summary.mean_quality_score);
    println!(
        "  Gaining / losing / unaffected: {} / {} / {}",
        summary.gaining, summary.losing, summary.unaffected
    );

    Ok(())
}

fn write_results_csv(path: &Path, avatars: &[Avatar], results: &[SimulationResult]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "Name",
        "Age",
        "Income",
        "EmploymentStatus",
        "MonthlyChange",
        "AnnualChange",
        "PercentageChange",
        "QualityScore",
        "FiveYearProjection",
    ])?;

    for (avatar, result) in avatars.iter().zip(results) {
        writer.write_record([
            avatar.name.clone(),
            avatar.age.to_string(),
            format!("{:.2}", avatar.income),
            avatar.employment_status.as_str().to_string(),
            format!("{:.2}", result.financial_impact.monthly_change),
            format!("{:.2}", result.financial_impact.annual_change),
            format!("{:.2}", result.financial_impact.percentage_change),
            result.quality_of_life.score_change.to_string(),
            format!("{:.2}", result.long_term_effects.five_year_projection),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
