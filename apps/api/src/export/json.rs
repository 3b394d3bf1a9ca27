//! JSON export: pretty-printed, stable key order.
//!
//! Key order follows the model's field declaration order (serde serializes
//! struct fields in order), so the exported document always reads
//! personalInfo, experience, education, skills.

use anyhow::Result;
use chrono::NaiveDate;

use crate::export::underscore_whitespace;
use crate::models::resume::Resume;

pub fn to_pretty_json(resume: &Resume) -> Result<String> {
    Ok(serde_json::to_string_pretty(resume)?)
}

/// `resume_{fullName}_{YYYY-MM-DD}.json`, whitespace runs in the name
/// replaced by single underscores. The date is a parameter so callers (and
/// tests) control it.
pub fn json_filename(full_name: &str, date: NaiveDate) -> String {
    format!(
        "resume_{}_{}.json",
        underscore_whitespace(full_name),
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_round_trip_reproduces_the_resume_exactly() {
        let resume = sample_resume();
        let json = to_pretty_json(&resume).unwrap();
        let parsed: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resume);
    }

    #[test]
    fn test_top_level_key_order_matches_the_model() {
        let json = to_pretty_json(&sample_resume()).unwrap();
        let personal = json.find("\"personalInfo\"").unwrap();
        let experience = json.find("\"experience\"").unwrap();
        let education = json.find("\"education\"").unwrap();
        let skills = json.find("\"skills\"").unwrap();
        assert!(personal < experience);
        assert!(experience < education);
        assert!(education < skills);
    }

    #[test]
    fn test_filename_shape() {
        assert_eq!(
            json_filename("John Smith", date()),
            "resume_John_Smith_2025-06-01.json"
        );
    }

    #[test]
    fn test_filename_with_empty_name() {
        assert_eq!(json_filename("", date()), "resume__2025-06-01.json");
    }
}
