//! Entry-id generation for the editable collections.
//!
//! Ids are `{prefix}-{n}` where `n` comes from one process-wide monotonic
//! counter. An id is assigned once at creation and never reassigned or
//! reused, so removals can't cause collisions later.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

pub const EXPERIENCE_PREFIX: &str = "exp";
pub const EDUCATION_PREFIX: &str = "edu";
pub const SKILL_PREFIX: &str = "skill";

pub fn next_entry_id(prefix: &str) -> String {
    let n = NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let a = next_entry_id(EXPERIENCE_PREFIX);
        let b = next_entry_id(EXPERIENCE_PREFIX);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_carry_the_collection_prefix() {
        assert!(next_entry_id(SKILL_PREFIX).starts_with("skill-"));
        assert!(next_entry_id(EDUCATION_PREFIX).starts_with("edu-"));
    }

    #[test]
    fn test_counter_is_monotonic() {
        let parse = |id: String| -> u64 {
            id.rsplit('-').next().unwrap().parse().unwrap()
        };
        let a = parse(next_entry_id(EXPERIENCE_PREFIX));
        let b = parse(next_entry_id(EXPERIENCE_PREFIX));
        assert!(b > a);
    }
}
