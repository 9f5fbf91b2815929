use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analysis::KeywordMatcher;
use crate::config::Config;
use crate::preferences::PreferenceStore;
use crate::shell::Shell;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable matcher. Default: WholeWordMatcher.
    pub matcher: Arc<dyn KeywordMatcher>,
    /// Backing store for the dark-mode preference.
    pub preferences: Arc<dyn PreferenceStore>,
    /// The one shell this service serves. Writers hold the lock only to commit.
    pub shell: Arc<RwLock<Shell>>,
}

impl AppState {
    pub fn new(
        config: Config,
        matcher: Arc<dyn KeywordMatcher>,
        preferences: Arc<dyn PreferenceStore>,
        shell: Shell,
    ) -> Self {
        Self {
            config,
            matcher,
            preferences,
            shell: Arc::new(RwLock::new(shell)),
        }
    }
}
