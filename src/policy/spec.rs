//! Policy specification types and the raw-parameter coercion boundary
//!
//! A policy is a tagged union over the supported policy types, each variant
//! carrying its own typed parameter record. Dynamically-typed callers submit
//! the wire shape `{type, name, description, parameters: {..}}`; the
//! [`PolicySpec::from_json`] boundary coerces that into the typed form,
//! routing unrecognized types to the generic fallback so a submission never
//! fails on the type tag alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

fn default_tax_rate() -> f64 {
    0.05
}

fn default_tax_threshold() -> f64 {
    50_000.0
}

/// The single caller-visible failure class: a raw parameter value that cannot
/// be coerced to its declared numeric or boolean type. Absent and null values
/// never error; they take the parameter's default.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("parameter `{key}` is not numeric: {value}")]
    NotNumeric { key: &'static str, value: String },

    #[error("parameter `{key}` is not boolean: {value}")]
    NotBoolean { key: &'static str, value: String },

    #[error("malformed policy specification: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parameters for a tax policy change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxParams {
    /// Marginal rate applied to income above the threshold
    #[serde(default = "default_tax_rate")]
    pub rate: f64,

    /// Annual income threshold where the levy starts
    #[serde(default = "default_tax_threshold")]
    pub threshold: f64,
}

impl Default for TaxParams {
    fn default() -> Self {
        Self {
            rate: default_tax_rate(),
            threshold: default_tax_threshold(),
        }
    }
}

/// Parameters for a healthcare policy change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthcareParams {
    /// Annual premium delta (positive = higher premiums)
    #[serde(default)]
    pub premium_change: f64,

    /// Deductible delta (positive = higher out-of-pocket costs)
    #[serde(default)]
    pub deductible_change: f64,

    /// Whether the policy expands coverage
    #[serde(default)]
    pub coverage_improvement: bool,
}

/// Parameters for an education policy change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationParams {
    /// Public education funding delta
    #[serde(default)]
    pub funding_increase: f64,

    /// Annual direct tuition assistance
    #[serde(default)]
    pub tuition_support: f64,
}

/// Parameters for a housing policy change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HousingParams {
    /// Annual housing tax credit
    #[serde(default)]
    pub housing_credit: f64,

    /// Whether rent increases are capped
    #[serde(default)]
    pub rent_control: bool,

    /// One-time down payment assistance
    #[serde(default)]
    pub down_payment_assistance: f64,
}

/// Parameters for an employment policy change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmploymentParams {
    /// Hourly minimum wage delta
    #[serde(default)]
    pub minimum_wage_increase: f64,

    /// Job training program funding
    #[serde(default)]
    pub job_training_funding: f64,

    /// Unemployment benefit delta. Accepted and carried through, but no
    /// calculator arithmetic consumes it yet.
    #[serde(default)]
    pub unemployment_benefit_increase: f64,
}

/// Parameters for a social security policy change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialSecurityParams {
    /// Annual benefit delta for recipients
    #[serde(default)]
    pub benefit_increase: f64,

    /// Taxable wage cap expansion; any positive value activates the
    /// high-earner payroll tax branch
    #[serde(default)]
    pub tax_cap_increase: f64,
}

/// Parameters for the generic fallback model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericParams {
    /// Caller-estimated monthly impact, used directly as the monthly change
    #[serde(default)]
    pub estimated_monthly_impact: f64,
}

/// A typed policy change, dispatched on by the simulation engine
///
/// Serializes to the wire shape `{"type": ..., "parameters": {..}}`. The
/// derived `Deserialize` accepts exactly the known type tags; use
/// [`PolicyChange::from_raw`] for input from dynamically-typed callers, which
/// routes unknown tags to [`PolicyChange::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "parameters", rename_all = "snake_case")]
pub enum PolicyChange {
    Tax(TaxParams),
    Healthcare(HealthcareParams),
    Education(EducationParams),
    Housing(HousingParams),
    Employment(EmploymentParams),
    SocialSecurity(SocialSecurityParams),
    Other(GenericParams),
}

impl PolicyChange {
    /// Wire tag for this policy type
    pub fn kind(&self) -> &'static str {
        match self {
            PolicyChange::Tax(_) => "tax",
            PolicyChange::Healthcare(_) => "healthcare",
            PolicyChange::Education(_) => "education",
            PolicyChange::Housing(_) => "housing",
            PolicyChange::Employment(_) => "employment",
            PolicyChange::SocialSecurity(_) => "social_security",
            PolicyChange::Other(_) => "other",
        }
    }

    /// Build a typed change from a raw type tag and parameter mapping
    ///
    /// Unknown or empty tags route to the generic fallback; absent parameters
    /// take their defaults. The only failure is a value that cannot be
    /// coerced (see [`ParamError`]).
    pub fn from_raw(kind: &str, params: &Map<String, Value>) -> Result<Self, ParamError> {
        match kind {
            "tax" => Ok(PolicyChange::Tax(TaxParams {
                rate: coerce_number(params, "rate", default_tax_rate())?,
                threshold: coerce_number(params, "threshold", default_tax_threshold())?,
            })),
            "healthcare" => Ok(PolicyChange::Healthcare(HealthcareParams {
                premium_change: coerce_number(params, "premium_change", 0.0)?,
                deductible_change: coerce_number(params, "deductible_change", 0.0)?,
                coverage_improvement: coerce_bool(params, "coverage_improvement")?,
            })),
            "education" => Ok(PolicyChange::Education(EducationParams {
                funding_increase: coerce_number(params, "funding_increase", 0.0)?,
                tuition_support: coerce_number(params, "tuition_support", 0.0)?,
            })),
            "housing" => Ok(PolicyChange::Housing(HousingParams {
                housing_credit: coerce_number(params, "housing_credit", 0.0)?,
                rent_control: coerce_bool(params, "rent_control")?,
                down_payment_assistance: coerce_number(params, "down_payment_assistance", 0.0)?,
            })),
            "employment" => Ok(PolicyChange::Employment(EmploymentParams {
                minimum_wage_increase: coerce_number(params, "minimum_wage_increase", 0.0)?,
                job_training_funding: coerce_number(params, "job_training_funding", 0.0)?,
                unemployment_benefit_increase: coerce_number(
                    params,
                    "unemployment_benefit_increase",
                    0.0,
                )?,
            })),
            "social_security" => Ok(PolicyChange::SocialSecurity(SocialSecurityParams {
                benefit_increase: coerce_number(params, "benefit_increase", 0.0)?,
                tax_cap_increase: coerce_number(params, "tax_cap_increase", 0.0)?,
            })),
            _ => Ok(PolicyChange::Other(GenericParams {
                estimated_monthly_impact: coerce_number(params, "estimated_monthly_impact", 0.0)?,
            })),
        }
    }
}

/// A complete policy specification: narrative labels plus the typed change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySpec {
    /// Short policy name, narrative only
    #[serde(default)]
    pub name: String,

    /// Longer policy description, narrative only
    #[serde(default)]
    pub description: String,

    /// The typed change record the engine dispatches on
    #[serde(flatten)]
    pub change: PolicyChange,
}

impl PolicySpec {
    /// Create a specification from a typed change
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        change: PolicyChange,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            change,
        }
    }

    /// Parse the external caller's wire shape
    /// `{"type": ..., "name": ..., "description": ..., "parameters": {..}}`.
    ///
    /// Absent fields default; unknown type tags route to the generic
    /// fallback. Fails only on malformed JSON or an uncoercible value.
    pub fn from_json(raw: &str) -> Result<Self, ParamError> {
        Self::finish(serde_json::from_str(raw)?)
    }

    /// Same boundary as [`PolicySpec::from_json`], for already-parsed JSON
    pub fn from_value(raw: Value) -> Result<Self, ParamError> {
        Self::finish(serde_json::from_value(raw)?)
    }

    fn finish(raw: RawPolicy) -> Result<Self, ParamError> {
        let change = PolicyChange::from_raw(&raw.policy_type, &raw.parameters)?;
        Ok(Self {
            name: raw.name,
            description: raw.description,
            change,
        })
    }
}

/// Untyped wire shape submitted by dynamic callers
#[derive(Debug, Deserialize)]
struct RawPolicy {
    #[serde(rename = "type", default)]
    policy_type: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: Map<String, Value>,
}

/// Coerce a raw parameter value to a number
///
/// Numbers pass through; numeric strings parse (form inputs arrive as
/// strings); absent, null, and empty-string values take the default.
fn coerce_number(
    params: &Map<String, Value>,
    key: &'static str,
    default: f64,
) -> Result<f64, ParamError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| ParamError::NotNumeric {
            key,
            value: n.to_string(),
        }),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(default);
            }
            trimmed.parse::<f64>().map_err(|_| ParamError::NotNumeric {
                key,
                value: s.clone(),
            })
        }
        Some(other) => Err(ParamError::NotNumeric {
            key,
            value: other.to_string(),
        }),
    }
}

/// Coerce a raw parameter value to a boolean (absent/null/empty means false)
fn coerce_bool(params: &Map<String, Value>, key: &'static str) -> Result<bool, ParamError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::Number(n)) => Ok(n.as_f64().map(|v| v != 0.0).unwrap_or(false)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(false)
            } else if trimmed.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(ParamError::NotBoolean {
                    key,
                    value: s.clone(),
                })
            }
        }
        Some(other) => Err(ParamError::NotBoolean {
            key,
            value: other.to_string(),
        }),
    }
}
