//! Policy specification types and raw-input coercion

mod spec;

pub use spec::{
    EducationParams, EmploymentParams, GenericParams, HealthcareParams, HousingParams, ParamError,
    PolicyChange, PolicySpec, SocialSecurityParams, TaxParams,
};
