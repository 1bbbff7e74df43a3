//! Route tree and route manifest model for Routekit.
//!
//! A route declaration is a tree of [`RouteNode`]s produced by evaluating the
//! user's route config module. This crate owns the shape of that tree, the
//! flattened [`RouteManifest`] keyed by route id, identifier derivation from
//! source file paths, and the structural validation applied before a tree is
//! accepted.

pub mod error;
pub mod flatten;
pub mod manifest;
pub mod route;

pub use error::{Error, Result};
pub use flatten::{flatten_route_tree, route_id_from_file, validate_route_tree};
pub use manifest::{BranchRoute, ROOT_ROUTE_ID, RouteManifest, RouteManifestEntry};
pub use route::{RouteNode, index, layout, route};
