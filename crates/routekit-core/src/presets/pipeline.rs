//! Preset pipeline phases.
//!
//! Phase 1 collects pre-resolution config contributions; the merge itself is
//! the orchestrator's job, which keeps the pipeline stateless between
//! phases. Phase 3 runs after the orchestrator has a frozen config: each
//! preset is notified, then asked for supplemental routes.

use super::preset::Preset;
use crate::config::{Frozen, ResolvedConfig, RouterConfig};
use crate::error::{Error, Result};
use routekit_routes::{RouteManifestEntry, flatten_route_tree, validate_route_tree};

/// Phase 1: collect each preset's config contribution, in declaration order.
///
/// A preset with an empty name is rejected eagerly; presets without the
/// capability are skipped. The `presets` field is stripped from every
/// contribution — presets must not nest preset lists inside their own
/// output.
pub async fn collect_config_contributions(
    presets: &[Preset],
    user_config: &RouterConfig,
) -> Result<Vec<RouterConfig>> {
    let mut contributions = Vec::new();

    for preset in presets {
        if preset.name().is_empty() {
            return Err(Error::UnnamedPreset);
        }
        let Some(hook) = preset.config_hook() else {
            continue;
        };

        let mut contribution =
            hook.call(user_config.clone())
                .await
                .map_err(|error| Error::PresetConfig {
                    preset: preset.name().to_string(),
                    message: error.to_string(),
                })?;

        if contribution.presets.is_some() {
            tracing::debug!(
                preset = preset.name(),
                "stripping `presets` from preset contribution"
            );
            contribution.presets = None;
        }
        contributions.push(contribution);
    }

    Ok(contributions)
}

/// Phase 3: notify each preset of the frozen config and collect its
/// supplemental route entries, in declaration order.
///
/// Notification return values are discarded but failures propagate.
/// Returned entries are ordered so that a later preset's routes override an
/// earlier preset's (and the user's) on id collision when merged into the
/// manifest.
pub async fn run_post_resolve(
    presets: &[Preset],
    config: &Frozen<ResolvedConfig>,
) -> Result<Vec<RouteManifestEntry>> {
    let mut entries = Vec::new();

    for preset in presets {
        if let Some(hook) = preset.config_resolved_hook() {
            hook.call(config.clone())
                .await
                .map_err(|error| Error::PresetResolved {
                    preset: preset.name().to_string(),
                    message: error.to_string(),
                })?;
        }

        if let Some(hook) = preset.define_routes_hook() {
            let nodes = hook.call();
            if nodes.is_empty() {
                continue;
            }
            validate_route_tree(&nodes)?;
            entries.extend(flatten_route_tree(&nodes));
        }
    }

    Ok(entries)
}
