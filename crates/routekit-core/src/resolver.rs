//! Resolution orchestration.
//!
//! One [`ConfigResolver::resolve`] call is one cycle: preset contribution,
//! the config merge with defaults overlaid, cross-field validation, route
//! tree evaluation with the stale-manifest fallback, freezing, and preset
//! post-processing. The resolver is re-entered on every watched-file change
//! and carries the session state between cycles; no two cycles run
//! concurrently.

use crate::config::{self, Frozen, Prerender, ResolvedConfig, RouterConfig};
use crate::context::{DevCommand, ResolveContext};
use crate::error::{Error, Result};
use crate::evaluator::{self, RouteModuleRunner};
use crate::presets::pipeline;
use crate::session::ResolutionSession;
use routekit_routes::RouteManifest;
use std::sync::Arc;

const DEFAULT_APP_DIRECTORY: &str = "app";
const DEFAULT_BASENAME: &str = "/";
const DEFAULT_BUILD_DIRECTORY: &str = "build";
const DEFAULT_SERVER_BUILD_FILE: &str = "index.js";

/// Orchestrates the full resolution cycle.
///
/// Construct one per dev session with the external module runner; call
/// [`resolve`](Self::resolve) on every watched-file change. Fatal
/// configuration problems are returned as errors rather than terminating the
/// process — the embedding tool decides whether to exit.
pub struct ConfigResolver {
    runner: Arc<dyn RouteModuleRunner>,
    session: ResolutionSession,
}

impl ConfigResolver {
    pub fn new(runner: Arc<dyn RouteModuleRunner>) -> Self {
        Self {
            runner,
            session: ResolutionSession::new(),
        }
    }

    /// The cross-cycle session state.
    pub fn session(&self) -> &ResolutionSession {
        &self.session
    }

    /// The route manifest published by the most recent completed cycle,
    /// including preset-contributed entries.
    pub fn routes(&self) -> Option<&RouteManifest> {
        self.session.published_routes()
    }

    /// Run one resolution cycle.
    ///
    /// # Errors
    ///
    /// On the first cycle any failure is fatal. Afterwards, route-loading
    /// failures (missing root route, missing/broken/invalid route config
    /// module) are reported and the last known-good manifest is reused so a
    /// long-running session survives; the remaining errors — invalid
    /// prerender shape, basename/base-path contradiction, preset contract
    /// violations and hook failures — stay fatal at any cycle.
    pub async fn resolve(
        &mut self,
        context: &ResolveContext,
        user_config: RouterConfig,
    ) -> Result<Frozen<ResolvedConfig>> {
        let presets = user_config.presets.clone().unwrap_or_default();

        // Phase 1: preset contributions, then the merge. The user config is
        // merged last so it wins over contributions; defaults apply only
        // where the merged config leaves a field unset.
        let contributions = pipeline::collect_config_contributions(&presets, &user_config).await?;
        let merged =
            config::merge_configs(contributions.into_iter().chain(std::iter::once(user_config)));

        let basename = merged
            .basename
            .unwrap_or_else(|| DEFAULT_BASENAME.to_string());
        let server_build_file = merged
            .server_build_file
            .unwrap_or_else(|| DEFAULT_SERVER_BUILD_FILE.to_string());
        let server_module_format = merged.server_module_format.unwrap_or_default();
        let ssr = merged.ssr.unwrap_or(true);
        let future = merged.future.unwrap_or_default();
        let build_end = merged.build_end;

        // SPA mode is incompatible with server-bundle partitioning.
        let mut server_bundles = merged.server_bundles;
        if !ssr && server_bundles.is_some() {
            tracing::warn!(
                "SPA mode: the `server_bundles` config is invalid with `ssr: false` and will be ignored"
            );
            server_bundles = None;
        }

        let prerender = match merged.prerender.map(Prerender::normalized) {
            Some(Prerender::Raw(_)) => {
                let error = Error::InvalidPrerenderShape;
                tracing::error!("{error}");
                return Err(error);
            }
            other => other,
        };

        let app_directory = context.root_directory.join(
            merged
                .app_directory
                .as_deref()
                .unwrap_or(DEFAULT_APP_DIRECTORY),
        );
        let build_directory = context.root_directory.join(
            merged
                .build_directory
                .as_deref()
                .unwrap_or(DEFAULT_BUILD_DIRECTORY),
        );

        // A basename outside the serving base path is a configuration
        // contradiction, not a transient authoring mistake: fatal on every
        // cycle, with no manifest fallback.
        if basename != DEFAULT_BASENAME
            && context.command == DevCommand::Serve
            && !context.middleware_mode
            && !basename.starts_with(&context.public_path)
        {
            let error = Error::BasenameMismatch {
                basename: basename.clone(),
                public_path: context.public_path.clone(),
            };
            tracing::error!("{error}");
            return Err(error);
        }

        let routes = match evaluator::evaluate_routes(
            self.runner.as_ref(),
            &context.root_directory,
            &app_directory,
        )
        .await
        {
            Ok(manifest) => {
                self.session.record_valid_routes(manifest.clone());
                if context.route_config_changed && !self.session.is_first_load() {
                    tracing::info!("Route config changed.");
                }
                manifest
            }
            Err(error) if error.is_route_load_error() => {
                tracing::error!(
                    "{}",
                    evaluator::format_route_error(&error, &app_directory)
                );

                // No known-good manifest exists on the first load; bail and
                // let the caller decide how to terminate. Afterwards, keep
                // the session alive with the last valid routes so the user
                // can correct the mistake.
                let fallback = if self.session.is_first_load() {
                    None
                } else {
                    self.session.last_valid_routes().cloned()
                };
                match fallback {
                    Some(last_valid) => last_valid,
                    None => return Err(error),
                }
            }
            Err(error) => return Err(error),
        };

        let resolved = ResolvedConfig {
            app_directory,
            basename,
            build_directory,
            build_end,
            future,
            prerender,
            routes,
            server_build_file,
            server_bundles,
            server_module_format,
            ssr,
        };

        // Phase 3 observes a frozen value carrying the routes evaluation
        // produced. Preset route fragments land on a rebuilt value below,
        // never on the already-frozen one.
        let frozen = Frozen::new(resolved);
        let preset_entries = pipeline::run_post_resolve(&presets, &frozen).await?;

        let published = if preset_entries.is_empty() {
            frozen
        } else {
            let mut rebuilt = (*frozen).clone();
            rebuilt.routes.extend(preset_entries);
            Frozen::new(rebuilt)
        };

        self.session.record_published_routes(published.routes.clone());
        self.session.complete_cycle();

        Ok(published)
    }
}
