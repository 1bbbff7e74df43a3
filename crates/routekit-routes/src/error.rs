//! Error types for routekit-routes

/// Result type for routekit-routes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structural validation failures for a route tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two routes resolved to the same identifier
    #[error("Unable to define routes with duplicate route id: \"{id}\"")]
    DuplicateRouteId { id: String },

    /// A route claimed the identifier reserved for the synthetic root entry
    #[error("Route id \"{id}\" is reserved for the root route")]
    ReservedRouteId { id: String },

    /// An index route declared child routes
    #[error("Index route \"{id}\" must not have child routes")]
    IndexRouteWithChildren { id: String },

    /// A route referenced no source file
    #[error("Route \"{route}\" must reference a non-empty source file")]
    EmptyRouteFile { route: String },
}
