//! Education policy calculator
//!
//! Tuition support is the only direct budget effect; funding increases show
//! up as quality and opportunity gains. The opportunity list is always
//! present for this policy type, empty when funding is flat.

use crate::avatar::Avatar;
use crate::policy::EducationParams;
use crate::simulation::math::{five_year_projection, percentage_of_income, round_currency};
use crate::simulation::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};

pub(crate) fn simulate(avatar: &Avatar, params: &EducationParams) -> SimulationResult {
    let monthly_change = params.tuition_support / 12.0;
    let annual_change = params.tuition_support;

    SimulationResult {
        financial_impact: FinancialImpact {
            monthly_change: round_currency(monthly_change),
            annual_change: round_currency(annual_change),
            percentage_change: percentage_of_income(annual_change, avatar.income),
        },
        quality_of_life: QualityOfLife {
            score_change: if params.funding_increase > 0.0 { 1 } else { 0 },
            affected_areas: if params.funding_increase > 0.0 {
                vec![ImpactArea::EducationQuality, ImpactArea::FutureOpportunities]
            } else {
                vec![]
            },
        },
        long_term_effects: LongTermEffects {
            five_year_projection: five_year_projection(annual_change),
            retirement_impact: None,
            education_opportunities: Some(if params.funding_increase > 0.0 {
                vec![
                    "Improved local school quality".to_string(),
                    "Enhanced vocational training programs".to_string(),
                    "Better college preparation resources".to_string(),
                ]
            } else {
                vec![]
            }),
        },
        detailed_breakdown: vec![
            BreakdownItem::with_amount(
                "Education Funding",
                if params.funding_increase > 0.0 {
                    "Increased public education investment"
                } else {
                    "No change in funding"
                },
                params.funding_increase.abs(),
            ),
            BreakdownItem::with_amount(
                "Tuition Assistance",
                if params.tuition_support > 0.0 {
                    "Direct tuition support provided"
                } else {
                    "No tuition assistance"
                },
                params.tuition_support.abs(),
            ),
        ],
        recommendations: vec![
            "Research available educational programs in your area".to_string(),
            "Consider long-term career development opportunities".to_string(),
            "Stay informed about application deadlines for assistance programs".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{EducationLevel, EmploymentStatus, HealthStatus};

    fn student_household() -> Avatar {
        Avatar::new(
            "Riley",
            22,
            18_000.0,
            "Michigan",
            1,
            EmploymentStatus::Student,
            HealthStatus::Excellent,
            EducationLevel::SomeCollege,
        )
    }

    #[test]
    fn test_tuition_support_lands_in_the_budget() {
        let params = EducationParams {
            funding_increase: 500.0,
            tuition_support: 2_400.0,
        };
        let result = simulate(&student_household(), &params);

        assert_eq!(result.financial_impact.monthly_change, 200.0);
        assert_eq!(result.financial_impact.annual_change, 2400.0);
        assert_eq!(result.financial_impact.percentage_change, 13.33);
        assert_eq!(result.quality_of_life.score_change, 1);
        assert_eq!(result.long_term_effects.five_year_projection, 12_000.0);
        let opportunities = result.long_term_effects.education_opportunities.unwrap();
        assert_eq!(opportunities.len(), 3);
    }

    #[test]
    fn test_flat_funding_keeps_opportunity_list_empty_but_present() {
        let result = simulate(&student_household(), &EducationParams::default());

        assert_eq!(result.quality_of_life.score_change, 0);
        assert!(result.quality_of_life.affected_areas.is_empty());
        assert_eq!(
            result.long_term_effects.education_opportunities,
            Some(vec![])
        );
        assert_eq!(result.detailed_breakdown[0].impact, "No change in funding");
        assert_eq!(result.detailed_breakdown[1].impact, "No tuition assistance");
    }
}
