//! The sparse, user-facing configuration record.

use crate::Result;
use crate::hooks::{BuildEndHook, PrerenderHook, ServerBundlesHook};
use crate::presets::Preset;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Output format of the server build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerModuleFormat {
    #[default]
    Esm,
    Cjs,
}

/// Prerender specification.
///
/// Serialized config sources can express the flag and path-list shapes; any
/// other serialized shape survives parsing as [`Prerender::Raw`] and is
/// rejected fatally during resolution. The hook shape is constructed
/// programmatically.
#[derive(Debug, Clone)]
pub enum Prerender {
    /// Prerender every static path (`true`) or nothing (`false`).
    Flag(bool),

    /// Prerender exactly these paths.
    Paths(Vec<String>),

    /// Compute the paths to prerender at build time.
    Resolve(PrerenderHook),

    /// Unrecognized shape from a serialized config source.
    Raw(Value),
}

impl Prerender {
    /// Classify a raw value into a prerender shape. Anything but a boolean
    /// or an array of strings stays [`Prerender::Raw`].
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Bool(flag) => Prerender::Flag(flag),
            Value::Array(items) => {
                if items.iter().all(Value::is_string) {
                    let paths = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(path) => Some(path),
                            _ => None,
                        })
                        .collect();
                    Prerender::Paths(paths)
                } else {
                    Prerender::Raw(Value::Array(items))
                }
            }
            other => Prerender::Raw(other),
        }
    }

    /// Re-classify a raw shape; other shapes pass through unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Prerender::Raw(value) => Prerender::from_value(value),
            other => other,
        }
    }

    /// Whether this is a shape the resolver accepts.
    pub fn is_valid_shape(&self) -> bool {
        !matches!(self, Prerender::Raw(_))
    }
}

impl<'de> Deserialize<'de> for Prerender {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Prerender::from_value(value))
    }
}

/// A sparse configuration record.
///
/// Any subset of fields may be set; an unset field is distinct from an
/// explicitly-falsy value, and the resolver overlays defaults only where the
/// merged config leaves a field unset. Produced by user input and by each
/// preset's contribution hook; combined by [`merge`](crate::config::merge).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Path to the application source directory, relative to the project
    /// root. Defaults to `"app"`.
    pub app_directory: Option<String>,

    /// The app basename. Defaults to `"/"`.
    pub basename: Option<String>,

    /// Path to the build output directory, relative to the project root.
    /// Defaults to `"build"`.
    pub build_directory: Option<String>,

    /// Called after a full build completes. When both sides of a merge set
    /// this, the merged hook invokes both concurrently.
    #[serde(skip)]
    pub build_end: Option<BuildEndHook>,

    /// Enabled future feature flags. Merged per key, later configs winning
    /// per flag rather than replacing the map wholesale.
    pub future: Option<BTreeMap<String, bool>>,

    /// Prerender specification; validated during resolution.
    pub prerender: Option<Prerender>,

    /// Config presets. Concatenated across merges, never replaced; presets
    /// themselves are forbidden from contributing this field.
    #[serde(skip)]
    pub presets: Option<Vec<Preset>>,

    /// File name of the server build output. Defaults to `"index.js"`.
    pub server_build_file: Option<String>,

    /// Assigns routes to server bundles. Incompatible with `ssr: false`.
    #[serde(skip)]
    pub server_bundles: Option<ServerBundlesHook>,

    /// Output format of the server build. Defaults to `"esm"`.
    pub server_module_format: Option<ServerModuleFormat>,

    /// Enable server-side rendering. Disable for SPA mode. Defaults to
    /// `true`.
    pub ssr: Option<bool>,
}

impl RouterConfig {
    /// Parse a configuration from TOML content.
    ///
    /// Hook- and preset-valued fields cannot be expressed in TOML and stay
    /// unset; a `prerender` value of any shape parses (invalid shapes are
    /// rejected during resolution, not here).
    ///
    /// # Example
    ///
    /// ```
    /// use routekit_core::RouterConfig;
    ///
    /// let config = RouterConfig::parse(r#"
    /// basename = "/docs"
    /// ssr = false
    /// prerender = ["/", "/about"]
    /// "#).unwrap();
    ///
    /// assert_eq!(config.basename.as_deref(), Some("/docs"));
    /// assert_eq!(config.ssr, Some(false));
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: RouterConfig = toml::from_str(content)?;
        Ok(config)
    }
}
