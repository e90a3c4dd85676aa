//! Policy Impact CLI
//!
//! Runs one household through one policy and prints the full result

use std::time::Instant;

use policy_impact::avatar::{EducationLevel, EmploymentStatus, HealthStatus};
use policy_impact::policy::{PolicyChange, TaxParams};
use policy_impact::{Avatar, EngineConfig, PolicySpec, SimulationEngine};

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("Policy Impact v0.1.0");
    println!("====================\n");

    let avatar = Avatar::new(
        "Jordan Ellis",
        41,
        80_000.0,
        "Columbus, OH",
        3,
        EmploymentStatus::FullTimeEmployed,
        HealthStatus::Good,
        EducationLevel::BachelorsDegree,
    );

    println!("Household: {}", avatar.name);
    println!("  Age: {}", avatar.age);
    println!("  Income: ${:.2}", avatar.income);
    println!("  Location: {}", avatar.location);
    println!("  Family size: {}", avatar.family_size);
    println!("  Status: {}", avatar.employment_status.as_str());
    println!();

    let policy = PolicySpec::new(
        "Progressive Income Surtax",
        "5% marginal levy on income above $50,000",
        PolicyChange::Tax(TaxParams {
            rate: 0.05,
            threshold: 50_000.0,
        }),
    );

    println!("Policy: {} ({})", policy.name, policy.change.kind());
    println!("  {}", policy.description);
    println!();

    let engine = SimulationEngine::new(EngineConfig::default());
    println!("Simulating...");
    let start = Instant::now();
    let result = engine.simulate(&avatar, &policy).await;
    println!("Complete in {:?}\n", start.elapsed());

    let fi = &result.financial_impact;
    println!("Financial Impact:");
    println!("  Monthly change: ${:.2}", fi.monthly_change);
    println!("  Annual change: ${:.2}", fi.annual_change);
    println!("  Share of income: {:.2}%", fi.percentage_change);

    let qol = &result.quality_of_life;
    println!("\nQuality of Life:");
    println!("  Score change: {:+}", qol.score_change);
    if !qol.affected_areas.is_empty() {
        let areas: Vec<&str> = qol.affected_areas.iter().map(|a| a.as_str()).collect();
        println!("  Affected areas: {}", areas.join(", "));
    }

    let lt = &result.long_term_effects;
    println!("\nLong-Term Effects:");
    println!("  Five-year projection: ${:.2}", lt.five_year_projection);
    if let Some(retirement) = lt.retirement_impact {
        println!("  Retirement impact: ${:.2}", retirement);
    }
    if let Some(opportunities) = &lt.education_opportunities {
        for opportunity in opportunities {
            println!("  Opportunity: {}", opportunity);
        }
    }

    println!("\nDetailed Breakdown:");
    for line in &result.detailed_breakdown {
        match line.amount {
            Some(amount) => {
                println!("  {:<22} {:<28} ${:.2}", line.category, line.impact, amount)
            }
            None => println!("  {:<22} {}", line.category, line.impact),
        }
    }

    println!("\nRecommendations:");
    for rec in &result.recommendations {
        println!("  - {}", rec);
    }
}
