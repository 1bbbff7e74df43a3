//! The preset capability record.

use crate::config::{Frozen, ResolvedConfig, RouterConfig};
use crate::hooks::{BoxFuture, HookResult};
use routekit_routes::RouteNode;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Async hook contributing a partial config derived from the user config.
#[derive(Clone)]
pub struct PresetConfigHook(
    Arc<dyn Fn(RouterConfig) -> BoxFuture<HookResult<RouterConfig>> + Send + Sync>,
);

impl PresetConfigHook {
    pub(crate) async fn call(&self, user_config: RouterConfig) -> HookResult<RouterConfig> {
        (self.0)(user_config).await
    }
}

impl fmt::Debug for PresetConfigHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PresetConfigHook")
    }
}

/// Async hook notified with the frozen resolved config. Its return value is
/// discarded; presets react by side effect only.
#[derive(Clone)]
pub struct PresetResolvedHook(
    Arc<dyn Fn(Frozen<ResolvedConfig>) -> BoxFuture<HookResult<()>> + Send + Sync>,
);

impl PresetResolvedHook {
    pub(crate) async fn call(&self, config: Frozen<ResolvedConfig>) -> HookResult<()> {
        (self.0)(config).await
    }
}

impl fmt::Debug for PresetResolvedHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PresetResolvedHook")
    }
}

/// Sync hook contributing supplemental route trees after resolution.
#[derive(Clone)]
pub struct DefineRoutesHook(Arc<dyn Fn() -> Vec<RouteNode> + Send + Sync>);

impl DefineRoutesHook {
    pub(crate) fn call(&self) -> Vec<RouteNode> {
        (self.0)()
    }
}

impl fmt::Debug for DefineRoutesHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefineRoutesHook")
    }
}

/// A named unit of pluggable behavior.
///
/// Each capability is optional and typed precisely; the pipeline skips
/// phases whose capability is absent. Presets are owned by the resolution
/// cycle for its duration only — a preset that wants state across cycles
/// must manage it externally.
///
/// # Example
///
/// ```
/// use routekit_core::{Preset, RouterConfig};
///
/// let preset = Preset::new("deploy-target").with_config(|_user_config| async {
///     Ok(RouterConfig {
///         server_build_file: Some("server.js".to_string()),
///         ..RouterConfig::default()
///     })
/// });
/// assert_eq!(preset.name(), "deploy-target");
/// ```
#[derive(Debug, Clone)]
pub struct Preset {
    name: String,
    config: Option<PresetConfigHook>,
    config_resolved: Option<PresetResolvedHook>,
    define_routes: Option<DefineRoutesHook>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
            config_resolved: None,
            define_routes: None,
        }
    }

    /// Attach a pre-resolution config contribution.
    pub fn with_config<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(RouterConfig) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<RouterConfig>> + Send + 'static,
    {
        self.config = Some(PresetConfigHook(Arc::new(move |user_config| {
            Box::pin(hook(user_config))
        })));
        self
    }

    /// Attach a post-resolution notification.
    pub fn with_config_resolved<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Frozen<ResolvedConfig>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<()>> + Send + 'static,
    {
        self.config_resolved = Some(PresetResolvedHook(Arc::new(move |config| {
            Box::pin(hook(config))
        })));
        self
    }

    /// Attach a supplemental route contribution.
    pub fn with_define_routes<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> Vec<RouteNode> + Send + Sync + 'static,
    {
        self.define_routes = Some(DefineRoutesHook(Arc::new(hook)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn config_hook(&self) -> Option<&PresetConfigHook> {
        self.config.as_ref()
    }

    pub(crate) fn config_resolved_hook(&self) -> Option<&PresetResolvedHook> {
        self.config_resolved.as_ref()
    }

    pub(crate) fn define_routes_hook(&self) -> Option<&DefineRoutesHook> {
        self.define_routes.as_ref()
    }
}
