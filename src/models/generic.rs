//! Generic fallback calculator
//!
//! Handles submissions whose type tag matches no specific model. The caller
//! supplies their own monthly estimate and the calculator applies the shared
//! rounding and reporting conventions to it.

use crate::avatar::Avatar;
use crate::policy::GenericParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

pub(crate) fn simulate(avatar: &Avatar, params: &GenericParams) -> SimulationResult {
    let monthly_change = params.estimated_monthly_impact;
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
            } else if monthly_change < 0.0 {
                -1
            } else {
                0
            },
            affected_areas: vec![ImpactArea::GeneralWelfare],
        },
        long_term_effects: LongTermEffects {
            five_year_projection: five_year_projection(annual_change),
            retirement_impact: None,
            education_opportunities: None,
        },
        detailed_breakdown: vec![BreakdownItem::with_amount(
            "Policy Impact",
            "Estimated general impact on household",
            monthly_change.abs(),
        )],
        recommendations: vec![
            "Monitor policy implementation for actual impacts".to_string(),
            "Stay informed about policy changes".to_string(),
            "Adjust financial planning as needed".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{EducationLevel, EmploymentStatus, HealthStatus};

    fn household() -> Avatar {
        Avatar::new(
            "Quinn",
            33,
            50_000.0,
            "Colorado",
            2,
            EmploymentStatus::SelfEmployed,
            HealthStatus::Good,
            EducationLevel::MastersDegree,
        )
    }

    #[test]
    fn test_negative_estimate_flows_through_conventions() {
        let params = GenericParams {
            estimated_monthly_impact: -50.0,
        };
        let result = simulate(&household(), &params);

        assert_eq!(result.financial_impact.monthly_change, -50.0);
        assert_eq!(result.financial_impact.annual_change, -600.0);
        assert_eq!(result.financial_impact.percentage_change, -1.2);
        assert_eq!(result.quality_of_life.score_change, -1);
        assert_eq!(
            result.quality_of_life.affected_areas,
            vec![ImpactArea::GeneralWelfare]
        );
        assert_eq!(result.long_term_effects.five_year_projection, -3000.0);
        assert_eq!(result.detailed_breakdown[0].amount, Some(50.0));
    }

    #[test]
    fn test_fractional_estimate_is_rounded_in_financials() {
        let params = GenericParams {
            estimated_monthly_impact: 10.4,
        };
        let result = simulate(&household(), &params);

        assert_eq!(result.financial_impact.monthly_change, 10.0);
        assert_eq!(result.financial_impact.annual_change, 125.0);
        assert_eq!(result.quality_of_life.score_change, 1);
        // Breakdown keeps the unrounded magnitude
        assert_eq!(result.detailed_breakdown[0].amount, Some(10.4));
    }

    #[test]
    fn test_zero_estimate_is_neutral() {
        let result = simulate(&household(), &GenericParams::default());

        assert_eq!(result.financial_impact.monthly_change, 0.0);
        assert_eq!(result.quality_of_life.score_change, 0);
        assert_eq!(
            result.quality_of_life.affected_areas,
            vec![ImpactArea::GeneralWelfare]
        );
    }
}
