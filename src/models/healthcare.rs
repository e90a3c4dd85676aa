//! Healthcare policy calculator
//!
//! Premium changes hit the budget directly; coverage improvement dominates
//! the quality score even when premiums also rise.

use crate::avatar::Avatar;
use crate::policy::HealthcareParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

/// Annual premium increase past this costs a quality point when no coverage
/// improvement offsets it
const HIGH_PREMIUM_THRESHOLD: f64 = 1_000.0;

pub(crate) fn simulate(avatar: &Avatar, params: &HealthcareParams) -> SimulationResult {
    let monthly_change = -params.premium_change / 12.0;
    let annual_change = -params.premium_change;

    let score_change = if params.coverage_improvement {
        2
    } else if params.premium_change > HIGH_PREMIUM_THRESHOLD {
        -1
    } else {
        0
    };

    SimulationResult {
        financial_impact: FinancialImpact {
            monthly_change: round_currency(monthly_change),
            annual_change: round_currency(annual_change),
            percentage_change: percentage_of_income(annual_change, avatar.income),
        },
        quality_of_life: QualityOfLife {
            score_change,
            affected_areas: if params.coverage_improvement {
                vec![ImpactArea::HealthcareAccess, ImpactArea::PeaceOfMind]
            } else if params.premium_change > 0.0 {
                vec![ImpactArea::HealthcareCosts, ImpactArea::BudgetStress]
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
                "Healthcare Premiums",
                if params.premium_change > 0.0 {
                    "Increased monthly premiums"
                } else {
                    "Reduced monthly premiums"
                },
                (params.premium_change / 12.0).abs(),
            ),
            BreakdownItem::with_amount(
                "Deductible",
                if params.deductible_change > 0.0 {
                    "Higher out-of-pocket costs"
                } else {
                    "Lower out-of-pocket costs"
                },
                params.deductible_change.abs(),
            ),
        ],
        recommendations: vec![
            "Review your current healthcare needs and usage".to_string(),
            "Compare available plan options during open enrollment".to_string(),
            "Consider health savings account if eligible".to_string(),
        ],
    }
}
