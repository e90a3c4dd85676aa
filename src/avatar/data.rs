//! Household profile data structures matching the avatar intake format

use serde::{Deserialize, Serialize};

/// Default household size when the intake record omits it
fn default_family_size() -> u32 {
    1
}

/// Employment status of the primary earner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[serde(rename = "Full-time employed")]
    FullTimeEmployed,
    #[serde(rename = "Part-time employed")]
    PartTimeEmployed,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    #[serde(rename = "Unemployed")]
    Unemployed,
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "Retired")]
    Retired,
    #[serde(rename = "Disabled/Unable to work")]
    Disabled,
}

impl EmploymentStatus {
    /// Get the canonical intake label
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::FullTimeEmployed => "Full-time employed",
            EmploymentStatus::PartTimeEmployed => "Part-time employed",
            EmploymentStatus::SelfEmployed => "Self-employed",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Student => "Student",
            EmploymentStatus::Retired => "Retired",
            EmploymentStatus::Disabled => "Disabled/Unable to work",
        }
    }

    /// Parse a canonical intake label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Full-time employed" => Some(EmploymentStatus::FullTimeEmployed),
            "Part-time employed" => Some(EmploymentStatus::PartTimeEmployed),
            "Self-employed" => Some(EmploymentStatus::SelfEmployed),
            "Unemployed" => Some(EmploymentStatus::Unemployed),
            "Student" => Some(EmploymentStatus::Student),
            "Retired" => Some(EmploymentStatus::Retired),
            "Disabled/Unable to work" => Some(EmploymentStatus::Disabled),
            _ => None,
        }
    }

    /// Whether the label carries the "employed" marker used by the wage-floor
    /// eligibility gate. This is a substring test on the canonical label, so it
    /// matches "Full-time employed", "Part-time employed", "Self-employed",
    /// and also "Unemployed" (the label contains the marker).
    pub fn has_employed_marker(&self) -> bool {
        self.as_str().contains("employed")
    }

    /// Whether the household draws social security style benefits
    pub fn is_benefit_recipient(&self) -> bool {
        matches!(self, EmploymentStatus::Retired | EmploymentStatus::Disabled)
    }
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        EmploymentStatus::Unemployed
    }
}

/// Self-reported health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Poor")]
    Poor,
}

impl HealthStatus {
    /// Get the canonical intake label
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::VeryGood => "Very good",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
        }
    }

    /// Parse a canonical intake label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Excellent" => Some(HealthStatus::Excellent),
            "Very good" => Some(HealthStatus::VeryGood),
            "Good" => Some(HealthStatus::Good),
            "Fair" => Some(HealthStatus::Fair),
            "Poor" => Some(HealthStatus::Poor),
            _ => None,
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        HealthStatus::Good
    }
}

/// Highest completed education level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Less than high school")]
    LessThanHighSchool,
    #[serde(rename = "High school diploma")]
    HighSchoolDiploma,
    #[serde(rename = "Some college")]
    SomeCollege,
    #[serde(rename = "Associate degree")]
    AssociateDegree,
    #[serde(rename = "Bachelor's degree")]
    BachelorsDegree,
    #[serde(rename = "Master's degree")]
    MastersDegree,
    #[serde(rename = "Doctoral degree")]
    DoctoralDegree,
}

impl EducationLevel {
    /// Get the canonical intake label
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::LessThanHighSchool => "Less than high school",
            EducationLevel::HighSchoolDiploma => "High school diploma",
            EducationLevel::SomeCollege => "Some college",
            EducationLevel::AssociateDegree => "Associate degree",
            EducationLevel::BachelorsDegree => "Bachelor's degree",
            EducationLevel::MastersDegree => "Master's degree",
            EducationLevel::DoctoralDegree => "Doctoral degree",
        }
    }

    /// Parse a canonical intake label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Less than high school" => Some(EducationLevel::LessThanHighSchool),
            "High school diploma" => Some(EducationLevel::HighSchoolDiploma),
            "Some college" => Some(EducationLevel::SomeCollege),
            "Associate degree" => Some(EducationLevel::AssociateDegree),
            "Bachelor's degree" => Some(EducationLevel::BachelorsDegree),
            "Master's degree" => Some(EducationLevel::MastersDegree),
            "Doctoral degree" => Some(EducationLevel::DoctoralDegree),
            _ => None,
        }
    }
}

impl Default for EducationLevel {
    fn default() -> Self {
        EducationLevel::HighSchoolDiploma
    }
}

/// A single household profile record
///
/// Only `income` and `employment_status` feed calculator arithmetic; the
/// remaining fields are context carried through for display and reporting.
/// Range invariants (age 0-120, income >= 0, family size >= 1) are enforced
/// by the intake boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Display name of the household
    #[serde(default)]
    pub name: String,

    /// Age of the primary earner
    #[serde(default)]
    pub age: u8,

    /// Annual household income (currency-agnostic)
    #[serde(default)]
    pub income: f64,

    /// Free-form location description
    #[serde(default)]
    pub location: String,

    /// Number of household members
    #[serde(default = "default_family_size")]
    pub family_size: u32,

    /// Employment status of the primary earner
    #[serde(default)]
    pub employment_status: EmploymentStatus,

    /// Self-reported health status
    #[serde(default)]
    pub health_status: HealthStatus,

    /// Highest completed education level
    #[serde(default)]
    pub education_level: EducationLevel,
}

impl Avatar {
    /// Create a new avatar with all intake fields
    pub fn new(
        name: impl Into<String>,
        age: u8,
        income: f64,
        location: impl Into<String>,
        family_size: u32,
        employment_status: EmploymentStatus,
        health_status: HealthStatus,
        education_level: EducationLevel,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            income,
            location: location.into(),
            family_size,
            employment_status,
            health_status,
            education_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_labels_round_trip() {
        let statuses = [
            EmploymentStatus::FullTimeEmployed,
            EmploymentStatus::PartTimeEmployed,
            EmploymentStatus::SelfEmployed,
            EmploymentStatus::Unemployed,
            EmploymentStatus::Student,
            EmploymentStatus::Retired,
            EmploymentStatus::Disabled,
        ];
        for status in statuses {
            assert_eq!(EmploymentStatus::from_label(status.as_str()), Some(status));
        }
        assert_eq!(EmploymentStatus::from_label("Freelancer"), None);
    }

    #[test]
    fn test_employed_marker_substring() {
        assert!(EmploymentStatus::FullTimeEmployed.has_employed_marker());
        assert!(EmploymentStatus::PartTimeEmployed.has_employed_marker());
        assert!(EmploymentStatus::SelfEmployed.has_employed_marker());
        // "Unemployed" contains "employed" and passes the substring test
        assert!(EmploymentStatus::Unemployed.has_employed_marker());
        assert!(!EmploymentStatus::Student.has_employed_marker());
        assert!(!EmploymentStatus::Retired.has_employed_marker());
        assert!(!EmploymentStatus::Disabled.has_employed_marker());
    }

    #[test]
    fn test_benefit_recipient() {
        assert!(EmploymentStatus::Retired.is_benefit_recipient());
        assert!(EmploymentStatus::Disabled.is_benefit_recipient());
        assert!(!EmploymentStatus::FullTimeEmployed.is_benefit_recipient());
        assert!(!EmploymentStatus::Unemployed.is_benefit_recipient());
    }

    #[test]
    fn test_employment_status_serde_labels() {
        let json = serde_json::to_string(&EmploymentStatus::Disabled).unwrap();
        assert_eq!(json, "\"Disabled/Unable to work\"");

        let parsed: EmploymentStatus = serde_json::from_str("\"Self-employed\"").unwrap();
        assert_eq!(parsed, EmploymentStatus::SelfEmployed);
    }

    #[test]
    fn test_avatar_from_partial_json() {
        // Context fields may be absent; the engine's contract only reads
        // income and employment_status.
        let avatar: Avatar = serde_json::from_str(
            r#"{"income": 42000, "employment_status": "Retired"}"#,
        )
        .unwrap();

        assert_eq!(avatar.income, 42000.0);
        assert_eq!(avatar.employment_status, EmploymentStatus::Retired);
        assert_eq!(avatar.family_size, 1);
        assert_eq!(avatar.health_status, HealthStatus::Good);
    }
}
