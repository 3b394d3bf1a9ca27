//! Skills editor: pure transforms over the skill sequence.

use serde::Deserialize;

use crate::editor::ids::{next_entry_id, SKILL_PREFIX};
use crate::models::resume::{Skill, SkillLevel};

/// Level patches carry a typed `SkillLevel`, so `{"field": "level",
/// "value": "Expert"}` fails to deserialize for anything outside the enum.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SkillPatch {
    Name(String),
    Level(SkillLevel),
}

/// Appends a new skill with an empty name at the default Intermediate level.
pub fn add(entries: &[Skill]) -> Vec<Skill> {
    let mut next = entries.to_vec();
    next.push(Skill {
        id: next_entry_id(SKILL_PREFIX),
        name: String::new(),
        level: SkillLevel::default(),
    });
    next
}

pub fn remove(entries: &[Skill], id: &str) -> Vec<Skill> {
    entries.iter().filter(|s| s.id != id).cloned().collect()
}

pub fn update(entries: &[Skill], id: &str, patch: &SkillPatch) -> Vec<Skill> {
    entries
        .iter()
        .map(|s| {
            if s.id == id {
                apply(s, patch)
            } else {
                s.clone()
            }
        })
        .collect()
}

fn apply(skill: &Skill, patch: &SkillPatch) -> Skill {
    let mut next = skill.clone();
    match patch {
        SkillPatch::Name(v) => next.name = v.clone(),
        SkillPatch::Level(v) => next.level = *v,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_defaults_to_intermediate() {
        let skills = add(&[]);
        assert_eq!(skills[0].level, SkillLevel::Intermediate);
        assert_eq!(skills[0].name, "");
        assert!(skills[0].id.starts_with("skill-"));
    }

    #[test]
    fn test_update_level_is_typed() {
        let skills = add(&[]);
        let id = skills[0].id.clone();
        let updated = update(&skills, &id, &SkillPatch::Level(SkillLevel::Expert));
        assert_eq!(updated[0].level, SkillLevel::Expert);

        let patch: SkillPatch =
            serde_json::from_str(r#"{"field": "level", "value": "Advanced"}"#).unwrap();
        assert!(matches!(patch, SkillPatch::Level(SkillLevel::Advanced)));

        let bad = serde_json::from_str::<SkillPatch>(r#"{"field": "level", "value": "Guru"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let skills = add(&add(&add(&[])));
        let removed = remove(&skills, &skills[0].id);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].id, skills[1].id);
        assert_eq!(removed[1].id, skills[2].id);
    }
}
