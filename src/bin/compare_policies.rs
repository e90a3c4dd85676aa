//! Side-by-side policy comparison for one household
//!
//! Runs several candidate policies against the same household and ranks
//! them by monthly budget effect. With no arguments it compares a built-in
//! demo set, so the binary runs out of the box.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use policy_impact::avatar::{EducationLevel, EmploymentStatus, HealthStatus};
use policy_impact::policy::{GenericParams, HealthcareParams, HousingParams, TaxParams};
use policy_impact::{Avatar, CohortRunner, PolicyChange, PolicySpec};

#[derive(Parser)]
#[command(name = "compare_policies")]
#[command(about = "Compare candidate policies for one household")]
struct Cli {
    /// Household JSON file; omit to use the built-in demo household
    #[arg(long)]
    avatar: Option<PathBuf>,

    /// JSON file holding an array of policies in the wire shape; omit to
    /// use the built-in demo set
    #[arg(long)]
    policies: Option<PathBuf>,

    /// Print results as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let avatar = match &cli.avatar {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading household file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing household file {}", path.display()))?
        }
        None => demo_avatar(),
    };

    let policies = match &cli.policies {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading policy file {}", path.display()))?;
            let values: Vec<Value> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing policy file {}", path.display()))?;
            values
                .into_iter()
                .map(PolicySpec::from_value)
                .collect::<Result<Vec<_>, _>>()?
        }
        None => demo_policies(),
    };

    let runner = CohortRunner::new();
    let results = runner.run_policies(&avatar, &policies);

    if cli.json {
        let rows: Vec<Value> = policies
            .iter()
            .zip(&results)
            .map(|(policy, result)| {
                json!({
                    "policy": policy.name,
                    "type": policy.change.kind(),
                    "result": result,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Policy Comparison");
    println!("=================");
    println!(
        "Household: {} (income ${:.0}, {})\n",
        avatar.name,
        avatar.income,
        avatar.employment_status.as_str()
    );

    println!(
        "{:<28} {:<16} {:>9} {:>10} {:>8} {:>6} {:>10}",
        "Policy", "Type", "Monthly", "Annual", "Pct", "Score", "5-Year"
    );
    println!("{}", "-".repeat(94));

    for (policy, result) in policies.iter().zip(&results) {
        let fi = &result.financial_impact;
        println!(
            "{:<28} {:<16} {:>9.2} {:>10.2} {:>7.2}% {:>+6} {:>10.2}",
            policy.name,
            policy.change.kind(),
            fi.monthly_change,
            fi.annual_change,
            fi.percentage_change,
            result.quality_of_life.score_change,
            result.long_term_effects.five_year_projection,
        );
    }

    let best = policies
        .iter()
        .zip(&results)
        .max_by(|(_, a), (_, b)| {
            a.financial_impact
                .monthly_change
                .total_cmp(&b.financial_impact.monthly_change)
        })
        .map(|(policy, _)| policy.name.as_str());
    if let Some(name) = best {
        println!("\nBest monthly outcome: {}", name);
    }

    Ok(())
}

fn demo_avatar() -> Avatar {
    Avatar::new(
        "Jordan Ellis",
        41,
        80_000.0,
        "Columbus, OH",
        3,
        EmploymentStatus::FullTimeEmployed,
        HealthStatus::Good,
        EducationLevel::BachelorsDegree,
    )
}

fn demo_policies() -> Vec<PolicySpec> {
    vec![
        PolicySpec::new(
            "Progressive Income Surtax",
            "5% marginal levy on income above $50,000",
            PolicyChange::Tax(TaxParams {
                rate: 0.05,
                threshold: 50_000.0,
            }),
        ),
        PolicySpec::new(
            "Premium Relief Act",
            "Cuts annual healthcare premiums by $600",
            PolicyChange::Healthcare(HealthcareParams {
                premium_change: -600.0,
                deductible_change: 0.0,
                coverage_improvement: false,
            }),
        ),
        PolicySpec::new(
            "Renter Relief Credit",
            "Annual $1,800 housing credit with rent caps",
            PolicyChange::Housing(HousingParams {
                housing_credit: 1_800.0,
                rent_control: true,
                down_payment_assistance: 0.0,
            }),
        ),
        PolicySpec::new(
            "Community Investment Pilot",
            "Locally estimated household effects",
            PolicyChange::Other(GenericParams {
                estimated_monthly_impact: 25.0,
            }),
        ),
    ]
}
