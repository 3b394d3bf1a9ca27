//! Work-experience editor: pure transforms over the experience sequence.

use serde::Deserialize;

use crate::editor::ids::{next_entry_id, EXPERIENCE_PREFIX};
use crate::models::resume::Experience;

/// A single-field replacement for one experience entry. Deserializes from
/// `{"field": "company", "value": "Acme"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperiencePatch {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Description(String),
}

/// Appends a new entry with empty fields and a fresh id.
pub fn add(entries: &[Experience]) -> Vec<Experience> {
    let mut next = entries.to_vec();
    next.push(Experience {
        id: next_entry_id(EXPERIENCE_PREFIX),
        company: String::new(),
        position: String::new(),
        start_date: String::new(),
        end_date: String::new(),
        description: String::new(),
    });
    next
}

/// Removes the entry with the given id; an unknown id is a no-op.
pub fn remove(entries: &[Experience], id: &str) -> Vec<Experience> {
    entries.iter().filter(|e| e.id != id).cloned().collect()
}

/// Replaces one field of the matching entry; an unknown id is a no-op.
pub fn update(entries: &[Experience], id: &str, patch: &ExperiencePatch) -> Vec<Experience> {
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

fn apply(entry: &Experience, patch: &ExperiencePatch) -> Experience {
    let mut next = entry.clone();
    match patch {
        ExperiencePatch::Company(v) => next.company = v.clone(),
        ExperiencePatch::Position(v) => next.position = v.clone(),
        ExperiencePatch::StartDate(v) => next.start_date = v.clone(),
        ExperiencePatch::EndDate(v) => next.end_date = v.clone(),
        ExperiencePatch::Description(v) => next.description = v.clone(),
    }
    next
}
