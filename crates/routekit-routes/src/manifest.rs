//! Flattened route manifests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of the synthetic root entry present in every manifest.
pub const ROOT_ROUTE_ID: &str = "root";

/// One flattened route record: the manifest-side counterpart of a
/// [`RouteNode`](crate::RouteNode), with tree structure replaced by parent
/// linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifestEntry {
    /// Unique route identifier.
    pub id: String,

    /// Identifier of the parent route. Absent only for the root entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// URL path segment relative to the parent route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Whether this is an index route for its parent's path.
    #[serde(default)]
    pub index: bool,

    /// Source file implementing the route, relative to the app directory.
    pub file: String,
}

/// Mapping from route identifier to its flattened record.
///
/// Every manifest built by [`RouteManifest::new`] contains exactly one
/// synthetic root entry with id [`ROOT_ROUTE_ID`] and an empty path, even if
/// the user declares no routes. Inserting an entry with an existing id
/// replaces it, which is how later presets override earlier ones (and the
/// user's own entries) by identifier collision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteManifest {
    entries: BTreeMap<String, RouteManifestEntry>,
}

impl RouteManifest {
    /// Create a manifest seeded with the synthetic root entry rendered by
    /// `root_file`.
    pub fn new(root_file: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            ROOT_ROUTE_ID.to_string(),
            RouteManifestEntry {
                id: ROOT_ROUTE_ID.to_string(),
                parent_id: None,
                path: Some(String::new()),
                index: false,
                file: root_file.into(),
            },
        );
        Self { entries }
    }

    /// Insert an entry, replacing any existing entry with the same id.
    pub fn insert(&mut self, entry: RouteManifestEntry) -> Option<RouteManifestEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    /// Insert every entry in order; later entries win on id collision.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = RouteManifestEntry>,
    {
        for entry in entries {
            self.insert(entry);
        }
    }

    pub fn get(&self, id: &str) -> Option<&RouteManifestEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// The synthetic root entry.
    pub fn root(&self) -> Option<&RouteManifestEntry> {
        self.entries.get(ROOT_ROUTE_ID)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteManifestEntry> {
        self.entries.values()
    }

    /// Route ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// The subset of a route record exposed to a server-bundles partition hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRoute {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub index: bool,
    pub file: String,
}

impl From<&RouteManifestEntry> for BranchRoute {
    fn from(entry: &RouteManifestEntry) -> Self {
        Self {
            id: entry.id.clone(),
            path: entry.path.clone(),
            index: entry.index,
            file: entry.file.clone(),
        }
    }
}
