//! Simulation output types
//!
//! Every calculator produces the same result shape so downstream consumers
//! can render any policy type uniformly. Sections that only some policy
//! types populate are optional and omitted from serialized output when
//! absent.

use serde::{Deserialize, Serialize};

/// Life areas a policy can touch, reported in quality-of-life output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactArea {
    #[serde(rename = "Disposable Income")]
    DisposableIncome,
    #[serde(rename = "Savings")]
    Savings,
    #[serde(rename = "Healthcare Access")]
    HealthcareAccess,
    #[serde(rename = "Peace of Mind")]
    PeaceOfMind,
    #[serde(rename = "Healthcare Costs")]
    HealthcareCosts,
    #[serde(rename = "Budget Stress")]
    BudgetStress,
    #[serde(rename = "Education Quality")]
    EducationQuality,
    #[serde(rename = "Future Opportunities")]
    FutureOpportunities,
    #[serde(rename = "Housing Affordability")]
    HousingAffordability,
    #[serde(rename = "Financial Stability")]
    FinancialStability,
    #[serde(rename = "Income")]
    Income,
    #[serde(rename = "Job Security")]
    JobSecurity,
    #[serde(rename = "Career Development")]
    CareerDevelopment,
    #[serde(rename = "Skills")]
    Skills,
    #[serde(rename = "Retirement Security")]
    RetirementSecurity,
    #[serde(rename = "Social Safety Net")]
    SocialSafetyNet,
    #[serde(rename = "General Welfare")]
    GeneralWelfare,
}

impl ImpactArea {
    /// Human-readable label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactArea::DisposableIncome => "Disposable Income",
            ImpactArea::Savings => "Savings",
            ImpactArea::HealthcareAccess => "Healthcare Access",
            ImpactArea::PeaceOfMind => "Peace of Mind",
            ImpactArea::HealthcareCosts => "Healthcare Costs",
            ImpactArea::BudgetStress => "Budget Stress",
            ImpactArea::EducationQuality => "Education Quality",
            ImpactArea::FutureOpportunities => "Future Opportunities",
            ImpactArea::HousingAffordability => "Housing Affordability",
            ImpactArea::FinancialStability => "Financial Stability",
            ImpactArea::Income => "Income",
            ImpactArea::JobSecurity => "Job Security",
            ImpactArea::CareerDevelopment => "Career Development",
            ImpactArea::Skills => "Skills",
            ImpactArea::RetirementSecurity => "Retirement Security",
            ImpactArea::SocialSafetyNet => "Social Safety Net",
            ImpactArea::GeneralWelfare => "General Welfare",
        }
    }
}

/// Direct budget effect of a policy on the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialImpact {
    /// Signed monthly change in dollars, rounded to whole dollars
    pub monthly_change: f64,

    /// Signed annual change in dollars, rounded to whole dollars
    pub annual_change: f64,

    /// Annual change as a percentage of household income, two decimals.
    /// Zero when the household reports no income.
    pub percentage_change: f64,
}

/// Non-monetary wellbeing effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityOfLife {
    /// Small signed integer score; positive is better
    pub score_change: i32,

    /// Life areas this policy touches, in reporting order
    pub affected_areas: Vec<ImpactArea>,
}

/// Multi-year horizon effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermEffects {
    /// Five years of the annual change, rounded to whole dollars
    pub five_year_projection: f64,

    /// Retirement-horizon effect; only tax and social security policies
    /// produce one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub retirement_impact: Option<f64>,

    /// Narrative opportunity list; only education policies produce one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub education_opportunities: Option<Vec<String>>,
}

/// One line of the per-category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Fixed category label for this policy type
    pub category: String,

    /// Narrative describing the direction of the effect
    pub impact: String,

    /// Magnitude in dollars, always non-negative; narrative-only lines
    /// carry no amount
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<f64>,
}

impl BreakdownItem {
    /// Breakdown line with a dollar magnitude
    pub fn with_amount(
        category: impl Into<String>,
        impact: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            category: category.into(),
            impact: impact.into(),
            amount: Some(amount),
        }
    }

    /// Narrative-only breakdown line
    pub fn narrative(category: impl Into<String>, impact: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            impact: impact.into(),
            amount: None,
        }
    }
}

/// Complete simulation output for one household and one policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub financial_impact: FinancialImpact,
    pub quality_of_life: QualityOfLife,
    pub long_term_effects: LongTermEffects,
    pub detailed_breakdown: Vec<BreakdownItem>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_area_label_matches_serialized_form() {
        let json = serde_json::to_string(&ImpactArea::PeaceOfMind).unwrap();
        assert_eq!(json, "\"Peace of Mind\"");
        assert_eq!(ImpactArea::PeaceOfMind.as_str(), "Peace of Mind");
    }

    #[test]
    fn test_absent_optional_sections_are_omitted() {
        let effects = LongTermEffects {
            five_year_projection: -7500.0,
            retirement_impact: None,
            education_opportunities: None,
        };
        let json = serde_json::to_string(&effects).unwrap();
        assert!(!json.contains("retirement_impact"));
        assert!(!json.contains("education_opportunities"));

        let back: LongTermEffects = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effects);
    }

    #[test]
    fn test_breakdown_narrative_line_has_no_amount() {
        let line = BreakdownItem::narrative("Rent Stability", "No rent protection");
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("amount"));

        let with_amount = BreakdownItem::with_amount("Tax Liability", "Increased tax burden", 125.0);
        assert_eq!(with_amount.amount, Some(125.0));
    }
}
