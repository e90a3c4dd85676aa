//! Employment policy calculator
//!
//! Minimum wage increases only reach households whose status label carries
//! an employment marker and whose income sits below the low-income cutoff.
//! The marker check is a substring match on the status label, so "Unemployed"
//! qualifies as well; see the status type for the labels involved.

use crate::avatar::Avatar;
use crate::policy::EmploymentParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

/// Full-time schedule assumed when scaling hourly wage changes
const HOURS_PER_WEEK: f64 = 40.0;

/// Average weeks in a month
const WEEKS_PER_MONTH: f64 = 4.33;

/// Annual income above this is assumed unaffected by minimum wage moves
const LOW_INCOME_CUTOFF: f64 = 35_000.0;

pub(crate) fn simulate(avatar: &Avatar, params: &EmploymentParams) -> SimulationResult {
    let monthly_change = if avatar.employment_status.has_employed_marker()
        && avatar.income < LOW_INCOME_CUTOFF
    {
        params.minimum_wage_increase * HOURS_PER_WEEK * WEEKS_PER_MONTH
    } else {
        0.0
    };
    let annual_change = monthly_change * 12.0;

    SimulationResult {
        financial_impact: FinancialImpact {
            monthly_change: round_currency(monthly_change),
            annual_change: round_currency(annual_change),
            percentage_change: percentage_of_income(annual_change, avatar.income),
        },
        quality_of_life: QualityOfLife {
            score_change: if monthly_change > 0.0 || params.job_training_funding > 0.0 {
                1
            } else {
                0
            },
            affected_areas: if monthly_change > 0.0 {
                vec![ImpactArea::Income, ImpactArea::JobSecurity]
            } else if params.job_training_funding > 0.0 {
                vec![ImpactArea::CareerDevelopment, ImpactArea::Skills]
            } else {
                vec![]
            },
        },
        long_term_effects: LongTermEffects {
            five_year_projection: five_year_projection(annual_change),
            retirement_impact: None,
            education_opportunities: None,
        },
        detailed_breakdown: vec![
            BreakdownItem::with_amount(
                "Wage Impact",
                if monthly_change > 0.0 {
                    "Increased minimum wage benefits"
                } else {
                    "No direct wage impact"
                },
                monthly_change.abs(),
            ),
            BreakdownItem::narrative(
                "Training Opportunities",
                if params.job_training_funding > 0.0 {
                    "Enhanced job training programs"
                } else {
                    "No additional training funding"
                },
            ),
        ],
        recommendations: vec![
            "Explore available job training programs".to_string(),
            "Consider skill development opportunities".to_string(),
            "Stay informed about labor market changes in your field".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{EducationLevel, EmploymentStatus, HealthStatus};
    use approx::assert_relative_eq;

    fn worker(status: EmploymentStatus, income: f64) -> Avatar {
        Avatar::new(
            "Alex",
            26,
            income,
            "Nevada",
            1,
            status,
            HealthStatus::Good,
            EducationLevel::HighSchoolDiploma,
        )
    }

    #[test]
    fn test_low_income_worker_gets_wage_boost() {
        let params = EmploymentParams {
            minimum_wage_increase: 1.0,
            job_training_funding: 0.0,
            unemployment_benefit_increase: 0.0,
        };
        let result = simulate(&worker(EmploymentStatus::FullTimeEmployed, 30_000.0), &params);

        // 1/hr at 40 hours and 4.33 weeks is 173.20/month before rounding
        assert_eq!(result.financial_impact.monthly_change, 173.0);
        assert_eq!(result.financial_impact.annual_change, 2078.0);
        assert_eq!(result.financial_impact.percentage_change, 6.93);
        assert_eq!(result.long_term_effects.five_year_projection, 10_392.0);
        assert_eq!(result.quality_of_life.score_change, 1);
        assert_eq!(
            result.quality_of_life.affected_areas,
            vec![ImpactArea::Income, ImpactArea::JobSecurity]
        );
        assert_relative_eq!(result.detailed_breakdown[0].amount.unwrap(), 173.2, epsilon = 1e-9);
    }

    #[test]
    fn test_high_earner_sees_no_wage_change() {
        let params = EmploymentParams {
            minimum_wage_increase: 2.0,
            job_training_funding: 0.0,
            unemployment_benefit_increase: 0.0,
        };
        let result = simulate(&worker(EmploymentStatus::FullTimeEmployed, 60_000.0), &params);

        assert_eq!(result.financial_impact.monthly_change, 0.0);
        assert_eq!(result.quality_of_life.score_change, 0);
        assert_eq!(result.detailed_breakdown[0].impact, "No direct wage impact");
    }

    #[test]
    fn test_unemployed_label_carries_the_marker() {
        // The substring gate matches "Unemployed" too, so a low-income
        // unemployed household still picks up the wage-scaled change.
        let params = EmploymentParams {
            minimum_wage_increase: 1.0,
            job_training_funding: 0.0,
            unemployment_benefit_increase: 0.0,
        };
        let result = simulate(&worker(EmploymentStatus::Unemployed, 12_000.0), &params);

        assert_eq!(result.financial_impact.monthly_change, 173.0);
    }

    #[test]
    fn test_retired_household_is_outside_the_gate() {
        let params = EmploymentParams {
            minimum_wage_increase: 3.0,
            job_training_funding: 0.0,
            unemployment_benefit_increase: 0.0,
        };
        let result = simulate(&worker(EmploymentStatus::Retired, 20_000.0), &params);

        assert_eq!(result.financial_impact.monthly_change, 0.0);
    }

    #[test]
    fn test_training_funding_alone_shifts_areas_not_budget() {
        let params = EmploymentParams {
            minimum_wage_increase: 0.0,
            job_training_funding: 5_000.0,
            unemployment_benefit_increase: 0.0,
        };
        let result = simulate(&worker(EmploymentStatus::PartTimeEmployed, 20_000.0), &params);

        assert_eq!(result.financial_impact.monthly_change, 0.0);
        assert_eq!(result.quality_of_life.score_change, 1);
        assert_eq!(
            result.quality_of_life.affected_areas,
            vec![ImpactArea::CareerDevelopment, ImpactArea::Skills]
        );
        assert_eq!(
            result.detailed_breakdown[1].impact,
            "Enhanced job training programs"
        );
    }

    #[test]
    fn test_benefit_increase_parameter_is_inert() {
        let params = EmploymentParams {
            minimum_wage_increase: 0.0,
            job_training_funding: 0.0,
            unemployment_benefit_increase: 400.0,
        };
        let result = simulate(&worker(EmploymentStatus::Unemployed, 12_000.0), &params);

        assert_eq!(result.financial_impact.monthly_change, 0.0);
        assert_eq!(result.quality_of_life.score_change, 0);
    }
}
