//! Cross-cycle resolution state, made explicit.

use routekit_routes::RouteManifest;

/// State carried across resolution cycles for one dev session.
///
/// Owned by the [`ConfigResolver`](crate::resolver::ConfigResolver) that
/// created it rather than living in process-wide statics, so independent
/// sessions — parallel tests, embedded tooling — never cross-contaminate.
/// Written only by the orchestrator, at route-evaluation success and at
/// cycle completion.
#[derive(Debug, Clone)]
pub struct ResolutionSession {
    first_load: bool,
    last_valid_routes: Option<RouteManifest>,
    published_routes: Option<RouteManifest>,
}

impl ResolutionSession {
    pub fn new() -> Self {
        Self {
            first_load: true,
            last_valid_routes: None,
            published_routes: None,
        }
    }

    /// True until the first cycle completes. While set, route-loading
    /// failures are fatal; afterwards they fall back to the last
    /// known-good manifest.
    pub fn is_first_load(&self) -> bool {
        self.first_load
    }

    /// The manifest from the most recent successful route evaluation,
    /// before preset contributions.
    pub fn last_valid_routes(&self) -> Option<&RouteManifest> {
        self.last_valid_routes.as_ref()
    }

    /// The manifest published by the most recent completed cycle, including
    /// preset contributions.
    pub fn published_routes(&self) -> Option<&RouteManifest> {
        self.published_routes.as_ref()
    }

    pub(crate) fn record_valid_routes(&mut self, routes: RouteManifest) {
        self.last_valid_routes = Some(routes);
    }

    pub(crate) fn record_published_routes(&mut self, routes: RouteManifest) {
        self.published_routes = Some(routes);
    }

    pub(crate) fn complete_cycle(&mut self) {
        self.first_load = false;
    }
}

impl Default for ResolutionSession {
    fn default() -> Self {
        Self::new()
    }
}
