//! Tax policy calculator
//!
//! Levies a marginal rate on household income above an annual threshold.
//! Households at or below the threshold see no change. The retirement-horizon
//! figure assumes a fraction of each year's change would otherwise have been
//! saved, compounded flat over the years remaining to retirement.

use crate::avatar::Avatar;
use crate::policy::TaxParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

/// Monthly loss past this tier costs two quality points
const SEVERE_MONTHLY_LOSS: f64 = -200.0;

/// Monthly loss past this tier costs one quality point and triggers the
/// budget-adjustment recommendations
const NOTABLE_MONTHLY_LOSS: f64 = -100.0;

/// Share of the annual change treated as forgone savings
const RETIREMENT_SAVINGS_RATE: f64 = 0.1;

/// Working years assumed to remain before retirement
const YEARS_TO_RETIREMENT: f64 = 20.0;

pub(crate) fn simulate(avatar: &Avatar, params: &TaxParams) -> SimulationResult {
    // Only income above the threshold is taxed. Quality tiers and breakdown
    // amounts use the unrounded monthly figure.
    let monthly_change = if avatar.income > params.threshold {
        let taxable_income = avatar.income - params.threshold;
        -(taxable_income * params.rate) / 12.0
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
            score_change: if monthly_change < SEVERE_MONTHLY_LOSS {
                -2
            } else if monthly_change < NOTABLE_MONTHLY_LOSS {
                -1
            } else {
                0
            },
            affected_areas: if monthly_change < 0.0 {
                vec![ImpactArea::DisposableIncome, ImpactArea::Savings]
            } else {
                vec![]
            },
        },
        long_term_effects: LongTermEffects {
            five_year_projection: five_year_projection(annual_change),
            retirement_impact: Some(round_currency(
                annual_change * RETIREMENT_SAVINGS_RATE * YEARS_TO_RETIREMENT,
            )),
            education_opportunities: None,
        },
        detailed_breakdown: vec![
            BreakdownItem::with_amount(
                "Tax Liability",
                if monthly_change < 0.0 {
                    "Increased tax burden"
                } else {
                    "No additional tax"
                },
                monthly_change.abs(),
            ),
            BreakdownItem::with_amount(
                "Take-home Pay",
                if monthly_change < 0.0 {
                    "Reduced monthly income"
                } else {
                    "No change"
                },
                monthly_change.abs(),
            ),
        ],
        recommendations: if monthly_change < NOTABLE_MONTHLY_LOSS {
            vec![
                "Consider adjusting budget to account for reduced income".to_string(),
                "Look into tax-advantaged savings accounts".to_string(),
                "Consult with a tax professional for optimization strategies".to_string(),
            ]
        } else {
            vec!["Monitor future tax policy changes".to_string()]
        },
    }
}
