//! Housing policy calculator
//!
//! Housing touches affordability and stability for every household, so the
//! affected-area list is fixed regardless of the parameter values.

use crate::avatar::Avatar;
use crate::policy::HousingParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

pub(crate) fn simulate(avatar: &Avatar, params: &HousingParams) -> SimulationResult {
    let monthly_change = params.housing_credit / 12.0;
    let annual_change = params.housing_credit;

    SimulationResult {
        financial_impact: FinancialImpact {
            monthly_change: round_currency(monthly_change),
            annual_change: round_currency(annual_change),
            percentage_change: percentage_of_income(annual_change, avatar.income),
        },
        quality_of_life: QualityOfLife {
            score_change: if params.housing_credit > 0.0 || params.rent_control {
                1
            } else {
                0
            },
            affected_areas: vec![
                ImpactArea::HousingAffordability,
                ImpactArea::FinancialStability,
            ],
        },
        long_term_effects: LongTermEffects {
            five_year_projection: five_year_projection(annual_change),
            retirement_impact: None,
            education_opportunities: None,
        },
        detailed_breakdown: vec![
            BreakdownItem::with_amount(
                "Housing Credit",
                if params.housing_credit > 0.0 {
                    "Tax credit for housing costs"
                } else {
                    "No housing credit"
                },
                params.housing_credit.abs(),
            ),
            BreakdownItem::narrative(
                "Rent Stability",
                if params.rent_control {
                    "Protected from excessive rent increases"
                } else {
                    "No rent protection"
                },
            ),
            BreakdownItem::with_amount(
                "Down Payment Help",
                if params.down_payment_assistance > 0.0 {
                    "Assistance with home purchase"
                } else {
                    "No purchase assistance"
                },
                params.down_payment_assistance.abs(),
            ),
        ],
        recommendations: vec![
            "Explore first-time homebuyer programs if applicable".to_string(),
            "Consider long-term housing stability in your area".to_string(),
            "Review local housing market trends".to_string(),
        ],
    }
}
