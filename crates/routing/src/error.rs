//! Error types for the routing crate

use thiserror::Error;

/// A path pattern could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),
    #[error("pattern `{0}` contains a parameter without a name")]
    EmptyParamName(String),
    #[error("pattern `{pattern}` binds `{param}` more than once")]
    DuplicateParam { pattern: String, param: String },
}

/// The route table violates one of its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("invalid route pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("route name `{0}` is empty")]
    EmptyName(String),
    #[error("route name `{0}` is registered more than once")]
    DuplicateName(String),
    #[error("route path `{0}` is registered more than once")]
    DuplicatePath(String),
    #[error("route paths `{first}` and `{second}` match the same URLs")]
    AmbiguousPath { first: String, second: String },
}

/// No descriptor matched a URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no route matches `{path}`")]
    NoMatch { path: String },
}

/// A URL could not be built for a named route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HrefError {
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },
    #[error("parameter `{param}` of route `{route}` is empty")]
    EmptyParam { route: String, param: String },
}

/// A deferred view failed to load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view: {reason}")]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Navigation or activation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Href(#[from] HrefError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("navigation {ticket} was superseded by navigation {latest}")]
    Superseded { ticket: u64, latest: u64 },
}

/// Router configuration is invalid
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("base path `{0}` must start with `/`")]
    InvalidBase(String),
}
