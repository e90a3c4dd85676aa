//! Household profile (avatar) types and cohort loading

mod data;
pub mod loader;

pub use data::{Avatar, EducationLevel, EmploymentStatus, HealthStatus};
pub use loader::{load_avatars, load_avatars_from_reader};
