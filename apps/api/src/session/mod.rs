//! The top-level controller: owns the single in-memory resume.
//!
//! Two states only — no resume loaded, or editing one. Transitions:
//! upload-parse or create-blank moves into editing; an explicit discard
//! moves back out, dropping unsaved work. Every edit replaces the whole
//! resume with a structurally fresh value, so readers always see a
//! consistent snapshot.

pub mod handlers;

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::resume::Resume;

pub struct ResumeSession {
    current: RwLock<Option<Resume>>,
}

impl ResumeSession {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Read-only copy of the current resume, if one is loaded.
    pub async fn snapshot(&self) -> Option<Resume> {
        self.current.read().await.clone()
    }

    /// Like `snapshot`, but an absent resume is an error the caller
    /// surfaces as 404.
    pub async fn require_snapshot(&self) -> Result<Resume, AppError> {
        self.snapshot().await.ok_or(AppError::NoResume)
    }

    /// Enters (or re-enters) the editing state with `resume` as the new
    /// authoritative value.
    pub async fn replace(&self, resume: Resume) {
        *self.current.write().await = Some(resume);
    }

    /// Leaves the editing state, discarding unsaved work. Returns whether a
    /// resume was actually loaded. Idempotent.
    pub async fn discard(&self) -> bool {
        self.current.write().await.take().is_some()
    }

    /// Applies an edit under the write lock: `apply` receives the current
    /// resume and returns its full replacement. The updated value is also
    /// returned to the caller for the response body.
    pub async fn modify<F>(&self, apply: F) -> Result<Resume, AppError>
    where
        F: FnOnce(&Resume) -> Resume,
    {
        let mut guard = self.current.write().await;
        let current = guard.as_ref().ok_or(AppError::NoResume)?;
        let updated = apply(current);
        *guard = Some(updated.clone());
        Ok(updated)
    }
}

impl Default for ResumeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-slot admission flag for an operation that must not overlap itself.
/// `try_begin` hands out at most one RAII guard; the slot frees on drop.
pub struct InFlight {
    name: &'static str,
    busy: AtomicBool,
}

pub struct InFlightGuard<'a> {
    flag: &'a InFlight,
}

impl InFlight {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            busy: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag: self })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;

    #[tokio::test]
    async fn test_session_starts_without_resume() {
        let session = ResumeSession::new();
        assert!(session.snapshot().await.is_none());
        assert!(matches!(
            session.require_snapshot().await,
            Err(AppError::NoResume)
        ));
    }

    #[tokio::test]
    async fn test_replace_enters_editing_state() {
        let session = ResumeSession::new();
        session.replace(Resume::blank()).await;
        assert!(session.snapshot().await.is_some());
    }

    #[tokio::test]
    async fn test_discard_returns_to_absent_state() {
        let session = ResumeSession::new();
        session.replace(sample_resume()).await;
        assert!(session.discard().await);
        assert!(session.snapshot().await.is_none());
        // idempotent
        assert!(!session.discard().await);
    }

    #[tokio::test]
    async fn test_modify_without_resume_is_an_error() {
        let session = ResumeSession::new();
        let result = session.modify(|r| r.clone()).await;
        assert!(matches!(result, Err(AppError::NoResume)));
    }

    #[tokio::test]
    async fn test_modify_replaces_the_whole_resume() {
        let session = ResumeSession::new();
        session.replace(Resume::blank()).await;
        let updated = session
            .modify(|r| {
                let mut next = r.clone();
                next.personal_info.full_name = "Ada Lovelace".to_string();
                next
            })
            .await
            .unwrap();
        assert_eq!(updated.personal_info.full_name, "Ada Lovelace");
        let snapshot = session.snapshot().await.unwrap();
        assert_eq!(snapshot, updated);
    }

    #[test]
    fn test_in_flight_admits_exactly_one_holder() {
        let flag = InFlight::new("enhance");
        let guard = flag.try_begin().expect("first admission succeeds");
        assert!(flag.try_begin().is_none(), "second admission must fail");
        drop(guard);
        assert!(flag.try_begin().is_some(), "slot frees after drop");
    }
}
