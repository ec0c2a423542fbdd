//! The owning facade the editor server embeds.

use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::base::LineCol;
use crate::error::NavError;
use crate::resolve::{ModuleCache, ResolveConfig};

use super::goto::{GotoRequest, GotoResult, goto_definition};

/// Holds the pieces that outlive individual requests: the resolution
/// configuration and the shared compiled-module cache.
///
/// Requests themselves stay pure; concurrent calls against one host
/// are fine, and each may carry its own cancellation token.
pub struct NavHost {
    config: ResolveConfig,
    cache: Arc<dyn ModuleCache>,
}

impl NavHost {
    pub fn new(config: ResolveConfig, cache: Arc<dyn ModuleCache>) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Run a request that nothing will cancel.
    pub fn goto_definition(
        &self,
        source: &str,
        cursor: LineCol,
        requesting_file: &Path,
    ) -> Result<GotoResult, NavError> {
        self.goto_definition_cancellable(source, cursor, requesting_file, &CancellationToken::new())
    }

    /// Run a request under a caller-owned cancellation token. The
    /// server cancels the token when a newer cursor position for the
    /// same document arrives.
    pub fn goto_definition_cancellable(
        &self,
        source: &str,
        cursor: LineCol,
        requesting_file: &Path,
        cancel: &CancellationToken,
    ) -> Result<GotoResult, NavError> {
        let request = GotoRequest {
            source,
            cursor,
            requesting_file,
        };
        goto_definition(&request, &self.config, self.cache.as_ref(), cancel)
    }
}
