//! Social security policy calculator
//!
//! Two independent branches that can both fire: benefit recipients gain the
//! benefit increase, and earners above the taxable wage cap pay payroll tax
//! on the excess when the cap expands. A retired high earner nets the two.

use crate::avatar::Avatar;
use crate::policy::SocialSecurityParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

/// Annual income above this is newly taxable once the cap expands
const TAXABLE_WAGE_CAP: f64 = 160_000.0;

/// Payroll tax rate applied to income above the cap
const PAYROLL_TAX_RATE: f64 = 0.062;

/// Retirement years assumed when projecting the benefit horizon
const RETIREMENT_YEARS: f64 = 15.0;

/// Monthly loss past this tier costs a quality point
const NOTABLE_MONTHLY_LOSS: f64 = -50.0;

pub(crate) fn simulate(avatar: &Avatar, params: &SocialSecurityParams) -> SimulationResult {
    let mut monthly_change = 0.0;

    if avatar.employment_status.is_benefit_recipient() {
        monthly_change = params.benefit_increase / 12.0;
    }

    let cap_tax_applies = avatar.income > TAXABLE_WAGE_CAP && params.tax_cap_increase > 0.0;
    if cap_tax_applies {
        monthly_change -= (avatar.income - TAXABLE_WAGE_CAP) * PAYROLL_TAX_RATE / 12.0;
    }

    let annual_change = monthly_change * 12.0;

    SimulationResult {
        financial_impact: FinancialImpact {
            monthly_change: round_currency(monthly_change),
            annual_change: round_currency(annual_change),
            percentage_change: percentage_of_income(annual_change, avatar.income),
        },
        quality_of_life: QualityOfLife {
            score_change: if monthly_change > 0.0 {
                1
            } else if monthly_change < NOTABLE_MONTHLY_LOSS {
                -1
            } else {
                0
            },
            affected_areas: if monthly_change != 0.0 {
                vec![ImpactArea::RetirementSecurity, ImpactArea::SocialSafetyNet]
            } else {
                vec![]
            },
        },
        long_term_effects: LongTermEffects {
            five_year_projection: five_year_projection(annual_change),
            retirement_impact: Some(round_currency(annual_change * RETIREMENT_YEARS)),
            education_opportunities: None,
        },
        detailed_breakdown: vec![
            BreakdownItem::with_amount(
                "Social Security Benefits",
                if params.benefit_increase > 0.0 {
                    "Increased monthly benefits"
                } else {
                    "No benefit change"
                },
                (params.benefit_increase / 12.0).abs(),
            ),
            BreakdownItem::narrative(
                "Social Security Taxes",
                if cap_tax_applies {
                    "Increased SS tax liability"
                } else {
                    "No tax change"
                },
            ),
        ],
        recommendations: vec![
            "Review your Social Security statement annually".to_string(),
            "Consider the long-term sustainability of the program".to_string(),
            "Plan for retirement with multiple income sources".to_string(),
        ],
    }
}
