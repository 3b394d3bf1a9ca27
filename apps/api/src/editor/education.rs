//! Education editor: pure transforms over the education sequence.

use serde::Deserialize;

use crate::editor::ids::{next_entry_id, EDUCATION_PREFIX};
use crate::models::resume::Education;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationPatch {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Gpa(String),
}

pub fn add(entries: &[Education]) -> Vec<Education> {
    let mut next = entries.to_vec();
    next.push(Education {
        id: next_entry_id(EDUCATION_PREFIX),
        institution: String::new(),
        degree: String::new(),
        field: String::new(),
        start_date: String::new(),
        end_date: String::new(),
        gpa: String::new(),
    });
    next
}

pub fn remove(entries: &[Education], id: &str) -> Vec<Education> {
    entries.iter().filter(|e| e.id != id).cloned().collect()
}

pub fn update(entries: &[Education], id: &str, patch: &EducationPatch) -> Vec<Education> {
    entries
        .iter()
        .map(|e| {
            if e.id == id {
                apply(e, patch)
            } else {
                e.clone()
            }
        })
        .collect()
}

fn apply(entry: &Education, patch: &EducationPatch) -> Education {
    let mut next = entry.clone();
    match patch {
        EducationPatch::Institution(v) => next.institution = v.clone(),
        EducationPatch::Degree(v) => next.degree = v.clone(),
        EducationPatch::Field(v) => next.field = v.clone(),
        EducationPatch::StartDate(v) => next.start_date = v.clone(),
        EducationPatch::EndDate(v) => next.end_date = v.clone(),
        EducationPatch::Gpa(v) => next.gpa = v.clone(),
    }
    next
}
