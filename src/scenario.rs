//! Cohort runner for efficient batch simulation
//!
//! Builds the engine once, then runs a policy across many households (or
//! many policies across one household) without the interactive pacing delay.

use rayon::prelude::*;
use serde::Serialize;

use crate::avatar::Avatar;
use crate::policy::PolicySpec;
use crate::simulation::{EngineConfig, SimulationEngine, SimulationResult};

/// Pre-built runner for batch simulation
///
/// # Example
/// ```ignore
/// let runner = CohortRunner::new();
/// let results = runner.run_cohort(&avatars, &policy);
/// let summary = CohortSummary::summarize(&results);
/// ```
#[derive(Debug, Clone)]
pub struct CohortRunner {
    engine: SimulationEngine,
}

impl CohortRunner {
    /// Create a runner with the pacing delay disabled
    pub fn new() -> Self {
        Self {
            engine: SimulationEngine::new(EngineConfig::no_delay()),
        }
    }

    /// Create a runner with a specific engine configuration
    ///
    /// Batch runs always skip the pacing delay; the rest of the
    /// configuration is kept.
    pub fn with_config(mut config: EngineConfig) -> Self {
        config.processing_delay = std::time::Duration::ZERO;
        Self {
            engine: SimulationEngine::new(config),
        }
    }

    /// Simulate one household against one policy
    pub fn run(&self, avatar: &Avatar, policy: &PolicySpec) -> SimulationResult {
        self.engine.simulate_now(avatar, policy)
    }

    /// Simulate every household in the cohort against the same policy
    ///
    /// Runs in parallel; results line up index-for-index with the input.
    pub fn run_cohort(&self, avatars: &[Avatar], policy: &PolicySpec) -> Vec<SimulationResult> {
        log::info!(
            "running policy `{}` across {} households",
            policy.name,
            avatars.len()
        );
        avatars
            .par_iter()
            .map(|avatar| self.engine.simulate_now(avatar, policy))
            .collect()
    }

    /// Simulate one household against several candidate policies
    pub fn run_policies(&self, avatar: &Avatar, policies: &[PolicySpec]) -> Vec<SimulationResult> {
        policies
            .iter()
            .map(|policy| self.engine.simulate_now(avatar, policy))
            .collect()
    }
}

impl Default for CohortRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate view over one policy's results across a cohort
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    /// Households simulated
    pub households: usize,

    /// Sum of annual changes across the cohort
    pub total_annual_change: f64,

    /// Mean monthly change per household
    pub mean_monthly_change: f64,

    /// Mean quality-of-life score change per household
    pub mean_quality_score: f64,

    /// Households whose monthly change is positive
    pub gaining: usize,

    /// Households whose monthly change is negative
    pub losing: usize,

    /// Households with no monthly change
    pub unaffected: usize,
}

impl CohortSummary {
    /// Aggregate a cohort's results
    pub fn summarize(results: &[SimulationResult]) -> Self {
        let households = results.len();
        let mut total_annual_change = 0.0;
        let mut total_monthly_change = 0.0;
        let mut total_score = 0.0;
        let mut gaining = 0;
        let mut losing = 0;
        let mut unaffected = 0;

        for result in results {
            let monthly = result.financial_impact.monthly_change;
            total_annual_change += result.financial_impact.annual_change;
            total_monthly_change += monthly;
            total_score += result.quality_of_life.score_change as f64;

            if monthly > 0.0 {
                gaining += 1;
            } else if monthly < 0.0 {
                losing += 1;
            } else {
                unaffected += 1;
            }
        }

        let denom = households.max(1) as f64;
        Self {
            households,
            total_annual_change,
            mean_monthly_change: total_monthly_change / denom,
            mean_quality_score: total_score / denom,
            gaining,
            losing,
            unaffected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{EducationLevel, EmploymentStatus, HealthStatus};
    use crate::policy::{PolicyChange, TaxParams};

    fn cohort() -> Vec<Avatar> {
        let incomes = [30_000.0, 50_000.0, 80_000.0, 120_000.0];
        incomes
            .iter()
            .enumerate()
            .map(|(i, &income)| {
                Avatar::new(
                    format!("Household {}", i + 1),
                    40,
                    income,
                    "Iowa",
                    2,
                    EmploymentStatus::FullTimeEmployed,
                    HealthStatus::Good,
                    EducationLevel::BachelorsDegree,
                )
            })
            .collect()
    }

    fn surtax() -> PolicySpec {
        PolicySpec::new(
            "Surtax",
            "5% above 50k",
            PolicyChange::Tax(TaxParams {
                rate: 0.05,
                threshold: 50_000.0,
            }),
        )
    }

    #[test]
    fn test_cohort_results_line_up_with_input() {
        let runner = CohortRunner::new();
        let avatars = cohort();
        let results = runner.run_cohort(&avatars, &surtax());

        assert_eq!(results.len(), avatars.len());
        // 30k and 50k are untouched; 80k loses 125/month; 120k loses 292/month
        assert_eq!(results[0].financial_impact.monthly_change, 0.0);
        assert_eq!(results[1].financial_impact.monthly_change, 0.0);
        assert_eq!(results[2].financial_impact.monthly_change, -125.0);
        assert_eq!(results[3].financial_impact.monthly_change, -292.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let runner = CohortRunner::new();
        let avatars = cohort();
        let policy = surtax();

        let parallel = runner.run_cohort(&avatars, &policy);
        let sequential: Vec<_> = avatars.iter().map(|a| runner.run(a, &policy)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_summary_counts_and_means() {
        let runner = CohortRunner::new();
        let results = runner.run_cohort(&cohort(), &surtax());
        let summary = CohortSummary::summarize(&results);

        assert_eq!(summary.households, 4);
        assert_eq!(summary.gaining, 0);
        assert_eq!(summary.losing, 2);
        assert_eq!(summary.unaffected, 2);
        assert_eq!(summary.total_annual_change, -5000.0);
        assert_eq!(summary.mean_monthly_change, -104.25);
        // Flat for two households, one point at 80k, two at 120k
        assert_eq!(summary.mean_quality_score, -0.75);
    }

    #[test]
    fn test_empty_cohort_summary_is_zeroed() {
        let summary = CohortSummary::summarize(&[]);
        assert_eq!(summary.households, 0);
        assert_eq!(summary.mean_monthly_change, 0.0);
        assert_eq!(summary.mean_quality_score, 0.0);
    }

    #[test]
    fn test_run_policies_covers_each_candidate() {
        let runner = CohortRunner::new();
        let avatars = cohort();
        let policies = vec![surtax(), PolicySpec::from_json(r#"{"type":"foo"}"#).unwrap()];

        let results = runner.run_policies(&avatars[2], &policies);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].detailed_breakdown[0].category, "Tax Liability");
        assert_eq!(results[1].detailed_breakdown[0].category, "Policy Impact");
    }
}
