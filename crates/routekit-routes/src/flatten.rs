//! Identifier derivation, validation and flattening of route trees.

use crate::error::{Error, Result};
use crate::manifest::{ROOT_ROUTE_ID, RouteManifestEntry};
use crate::route::RouteNode;
use std::collections::BTreeSet;

/// Derive a route identifier from its source file path: separators are
/// normalized and the file extension is stripped.
///
/// `"routes/home.tsx"` becomes `"routes/home"`.
pub fn route_id_from_file(file: &str) -> String {
    let normalized = file.replace('\\', "/");
    let (dir, name) = match normalized.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, normalized.as_str()),
    };
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    match dir {
        Some(dir) => format!("{dir}/{stem}"),
        None => stem.to_string(),
    }
}

/// Check a route tree for structural well-formedness.
///
/// Rejects duplicate identifiers (explicit or derived), the reserved root
/// identifier, index routes with children, and routes referencing no source
/// file. Must pass before [`flatten_route_tree`] output is accepted into a
/// manifest.
pub fn validate_route_tree(nodes: &[RouteNode]) -> Result<()> {
    let mut seen = BTreeSet::new();
    validate_nodes(nodes, &mut seen)
}

fn validate_nodes(nodes: &[RouteNode], seen: &mut BTreeSet<String>) -> Result<()> {
    for node in nodes {
        if node.file.trim().is_empty() {
            let route = node
                .path
                .clone()
                .or_else(|| node.id.clone())
                .unwrap_or_else(|| "(index)".to_string());
            return Err(Error::EmptyRouteFile { route });
        }

        let id = node
            .id
            .clone()
            .unwrap_or_else(|| route_id_from_file(&node.file));
        if id == ROOT_ROUTE_ID {
            return Err(Error::ReservedRouteId { id });
        }
        if !seen.insert(id.clone()) {
            return Err(Error::DuplicateRouteId { id });
        }
        if node.index && !node.children.is_empty() {
            return Err(Error::IndexRouteWithChildren { id });
        }

        validate_nodes(&node.children, seen)?;
    }
    Ok(())
}

/// Flatten a validated route tree into manifest entries.
///
/// Top-level routes are linked to the synthetic root; nested routes to their
/// parent's resolved identifier. Ordering follows a depth-first walk of the
/// declaration order.
pub fn flatten_route_tree(nodes: &[RouteNode]) -> Vec<RouteManifestEntry> {
    let mut entries = Vec::new();
    flatten_into(nodes, ROOT_ROUTE_ID, &mut entries);
    entries
}

fn flatten_into(nodes: &[RouteNode], parent_id: &str, entries: &mut Vec<RouteManifestEntry>) {
    for node in nodes {
        let id = node
            .id
            .clone()
            .unwrap_or_else(|| route_id_from_file(&node.file));
        entries.push(RouteManifestEntry {
            id: id.clone(),
            parent_id: Some(parent_id.to_string()),
            path: node.path.clone(),
            index: node.index,
            file: node.file.clone(),
        });
        flatten_into(&node.children, &id, entries);
    }
}
