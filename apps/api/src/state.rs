use std::sync::Arc;

use crate::config::Config;
use crate::enhance::EnhanceClient;
use crate::intake::parser::ResumeParser;
use crate::persist::SaveClient;
use crate::session::{InFlight, ResumeSession};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory resume (absent or editing). Single source of truth.
    pub session: Arc<ResumeSession>,
    /// Pluggable file parser. The shipped implementation returns sample data.
    pub parser: Arc<dyn ResumeParser>,
    pub enhancer: EnhanceClient,
    pub saver: SaveClient,
    /// At most one enhancement call in flight at a time.
    pub enhance_in_flight: Arc<InFlight>,
    /// At most one save call in flight at a time.
    pub save_in_flight: Arc<InFlight>,
    /// Kept on state for handlers that need deployment settings; the
    /// backend clients capture their base URL at construction.
    #[allow(dead_code)]
    pub config: Config,
}
