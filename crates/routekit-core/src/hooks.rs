//! User-supplied configuration hooks.
//!
//! Hooks are opaque async callbacks carried inside configuration records.
//! Each is wrapped in a newtype so config types stay `Clone + Debug` while
//! the callbacks themselves remain `Arc`-shared and immutable once
//! constructed.

use crate::config::{Frozen, ResolvedConfig};
use routekit_routes::BranchRoute;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by configuration hooks.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Opaque error type surfaced by user-supplied hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for user-supplied hooks.
pub type HookResult<T> = std::result::Result<T, HookError>;

/// Arguments passed to a build-completion hook.
#[derive(Debug, Clone)]
pub struct BuildEndArgs {
    /// The frozen configuration the build ran against.
    pub config: Frozen<ResolvedConfig>,
}

/// A build-completion callback, invoked after a full build.
#[derive(Clone)]
pub struct BuildEndHook(Arc<dyn Fn(BuildEndArgs) -> BoxFuture<HookResult<()>> + Send + Sync>);

impl BuildEndHook {
    pub fn new<F, Fut>(hook: F) -> Self
    where
        F: Fn(BuildEndArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<()>> + Send + 'static,
    {
        Self(Arc::new(move |args| Box::pin(hook(args))))
    }

    pub async fn call(&self, args: BuildEndArgs) -> HookResult<()> {
        (self.0)(args).await
    }

    /// Combine two hooks into one that invokes both concurrently and
    /// completes only once both complete. Failures from either side are
    /// collected into a single [`AggregateHookError`] so neither is lost.
    pub fn merged(left: BuildEndHook, right: BuildEndHook) -> BuildEndHook {
        BuildEndHook::new(move |args: BuildEndArgs| {
            let left = left.clone();
            let right = right.clone();
            async move {
                let (first, second) = tokio::join!(left.call(args.clone()), right.call(args));
                let errors: Vec<HookError> =
                    [first.err(), second.err()].into_iter().flatten().collect();
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(AggregateHookError { errors }.into())
                }
            }
        })
    }
}

impl fmt::Debug for BuildEndHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BuildEndHook")
    }
}

/// Failure of a merged build-completion hook. Carries every underlying
/// failure rather than the first one observed.
#[derive(Debug)]
pub struct AggregateHookError {
    pub errors: Vec<HookError>,
}

impl fmt::Display for AggregateHookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|error| error.to_string()).collect();
        write!(f, "build end hook failed: {}", messages.join("; "))
    }
}

impl std::error::Error for AggregateHookError {}

/// Arguments passed to a server-bundles partition hook.
#[derive(Debug, Clone)]
pub struct ServerBundlesArgs {
    /// Route lineage from the root down to the route being assigned.
    pub branch: Vec<BranchRoute>,
}

/// Assigns a route to a server bundle; returns the bundle id used as the
/// bundle's directory name within the server build directory.
#[derive(Clone)]
pub struct ServerBundlesHook(
    Arc<dyn Fn(ServerBundlesArgs) -> BoxFuture<HookResult<String>> + Send + Sync>,
);

impl ServerBundlesHook {
    pub fn new<F, Fut>(hook: F) -> Self
    where
        F: Fn(ServerBundlesArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<String>> + Send + 'static,
    {
        Self(Arc::new(move |args| Box::pin(hook(args))))
    }

    pub async fn call(&self, args: ServerBundlesArgs) -> HookResult<String> {
        (self.0)(args).await
    }
}

impl fmt::Debug for ServerBundlesHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServerBundlesHook")
    }
}

/// Arguments passed to a prerender hook.
#[derive(Debug, Clone)]
pub struct PrerenderArgs {
    /// Every static path known to the build.
    pub static_paths: Vec<String>,
}

/// Computes the list of paths to prerender at build time.
#[derive(Clone)]
pub struct PrerenderHook(
    Arc<dyn Fn(PrerenderArgs) -> BoxFuture<HookResult<Vec<String>>> + Send + Sync>,
);

impl PrerenderHook {
    pub fn new<F, Fut>(hook: F) -> Self
    where
        F: Fn(PrerenderArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<Vec<String>>> + Send + 'static,
    {
        Self(Arc::new(move |args| Box::pin(hook(args))))
    }

    pub async fn call(&self, args: PrerenderArgs) -> HookResult<Vec<String>> {
        (self.0)(args).await
    }
}

impl fmt::Debug for PrerenderHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrerenderHook")
    }
}
