//! Load avatar cohorts from CSV intake files
//!
//! This is the external validation boundary: range invariants on age, income,
//! and family size are enforced here so the simulation engine never has to
//! reject a record.

use super::{Avatar, EducationLevel, EmploymentStatus, HealthStatus};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the cohort intake columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u16,
    #[serde(rename = "Income")]
    income: f64,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "FamilySize")]
    family_size: u32,
    #[serde(rename = "EmploymentStatus")]
    employment_status: String,
    #[serde(rename = "HealthStatus")]
    health_status: String,
    #[serde(rename = "EducationLevel")]
    education_level: String,
}

impl CsvRow {
    fn to_avatar(self) -> Result<Avatar, Box<dyn Error>> {
        if self.age > 120 {
            return Err(format!("Age must be between 0 and 120: {}", self.age).into());
        }

        if self.income < 0.0 {
            return Err(format!("Income must be non-negative: {}", self.income).into());
        }

        if self.family_size < 1 {
            return Err(format!("Family size must be at least 1: {}", self.family_size).into());
        }

        let employment_status = EmploymentStatus::from_label(&self.employment_status)
            .ok_or_else(|| format!("Unknown EmploymentStatus: {}", self.employment_status))?;

        let health_status = HealthStatus::from_label(&self.health_status)
            .ok_or_else(|| format!("Unknown HealthStatus: {}", self.health_status))?;

        let education_level = EducationLevel::from_label(&self.education_level)
            .ok_or_else(|| format!("Unknown EducationLevel: {}", self.education_level))?;

        Ok(Avatar {
            name: self.name,
            age: self.age as u8,
            income: self.income,
            location: self.location,
            family_size: self.family_size,
            employment_status,
            health_status,
            education_level,
        })
    }
}

/// Load all avatars from a CSV file
pub fn load_avatars<P: AsRef<Path>>(path: P) -> Result<Vec<Avatar>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut avatars = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let avatar = row.to_avatar()?;
        avatars.push(avatar);
    }

    Ok(avatars)
}

/// Load avatars from any reader (e.g., string buffer, network stream)
pub fn load_avatars_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Avatar>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut avatars = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let avatar = row.to_avatar()?;
        avatars.push(avatar);
    }

    Ok(avatars)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Name,Age,Income,Location,FamilySize,EmploymentStatus,HealthStatus,EducationLevel\n";

    #[test]
    fn test_load_cohort_from_reader() {
        let csv = format!(
            "{HEADER}\
             Jordan,34,52000,Columbus OH,3,Full-time employed,Good,Bachelor's degree\n\
             Casey,67,31000,Tucson AZ,2,Retired,Fair,High school diploma\n"
        );

        let avatars = load_avatars_from_reader(csv.as_bytes()).expect("cohort should load");
        assert_eq!(avatars.len(), 2);

        assert_eq!(avatars[0].name, "Jordan");
        assert_eq!(avatars[0].income, 52000.0);
        assert_eq!(avatars[0].employment_status, EmploymentStatus::FullTimeEmployed);

        assert_eq!(avatars[1].age, 67);
        assert_eq!(avatars[1].employment_status, EmploymentStatus::Retired);
        assert_eq!(avatars[1].health_status, HealthStatus::Fair);
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        let csv = format!(
            "{HEADER}Ancient,130,1000,Nowhere,1,Retired,Poor,Some college\n"
        );

        let err = load_avatars_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Age"));
    }

    #[test]
    fn test_negative_income_rejected() {
        let csv = format!(
            "{HEADER}Broke,40,-5,Nowhere,1,Unemployed,Good,Some college\n"
        );

        let err = load_avatars_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Income"));
    }

    #[test]
    fn test_zero_family_size_rejected() {
        let csv = format!(
            "{HEADER}Solo,40,30000,Nowhere,0,Unemployed,Good,Some college\n"
        );

        let err = load_avatars_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Family size"));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let csv = format!(
            "{HEADER}Odd,40,30000,Nowhere,1,Gig worker,Good,Some college\n"
        );

        let err = load_avatars_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Unknown EmploymentStatus"));
    }
}
