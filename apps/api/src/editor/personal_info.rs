//! Personal-info editor: single-record, single-field replacement.

use serde::Deserialize;

use crate::models::resume::PersonalInfo;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PersonalInfoPatch {
    FullName(String),
    Email(String),
    Phone(String),
    Location(String),
    Summary(String),
}

/// Returns a copy of `info` with the patched field replaced. No validation
/// is applied to the value.
pub fn apply(info: &PersonalInfo, patch: &PersonalInfoPatch) -> PersonalInfo {
    let mut next = info.clone();
    match patch {
        PersonalInfoPatch::FullName(v) => next.full_name = v.clone(),
        PersonalInfoPatch::Email(v) => next.email = v.clone(),
        PersonalInfoPatch::Phone(v) => next.phone = v.clone(),
        PersonalInfoPatch::Location(v) => next.location = v.clone(),
        PersonalInfoPatch::Summary(v) => next.summary = v.clone(),
    }
    next
}
