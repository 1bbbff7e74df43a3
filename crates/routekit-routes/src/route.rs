//! Route tree nodes and declaration helpers.

use serde::{Deserialize, Serialize};

/// One entry in a user-declared route tree.
///
/// Trees are supplied externally as the output of evaluating the user's route
/// config module, or contributed by presets. The identifier is optional and
/// derived from the source file path when absent; the URL path is optional
/// for layout and index routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Explicit route identifier. Derived from `file` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// URL path segment relative to the parent route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Source file implementing the route, relative to the app directory.
    pub file: String,

    /// Whether this is an index route for its parent's path.
    #[serde(default)]
    pub index: bool,

    /// Ordered child routes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }
}

/// Declare a route matching `path`, rendered by `file`.
pub fn route(path: impl Into<String>, file: impl Into<String>) -> RouteNode {
    RouteNode::new(file).with_path(path)
}

/// Declare an index route for the parent's path, rendered by `file`.
pub fn index(file: impl Into<String>) -> RouteNode {
    let mut node = RouteNode::new(file);
    node.index = true;
    node
}

/// Declare a pathless layout route wrapping `children`.
pub fn layout(file: impl Into<String>, children: Vec<RouteNode>) -> RouteNode {
    RouteNode::new(file).with_children(children)
}
