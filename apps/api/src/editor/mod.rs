//! Section editors.
//!
//! Each editor is a set of pure functions over one slice of the resume:
//! callers pass the current sequence and get a fresh one back. Editors hold
//! no state of their own — the session is the single source of truth, and
//! every edit flows back through it as a full-resume replacement.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod ids;
pub mod personal_info;
pub mod skills;
