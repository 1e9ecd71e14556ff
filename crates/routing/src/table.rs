//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Hold the ordered route descriptors
//! - Reject duplicate names, duplicate paths and ambiguous patterns
//! - Resolve a concrete URL to the first matching descriptor
//! - Build URLs for named routes
//!
//! # Design Decisions
//! - Immutable after `build()`, shareable behind an `Arc`
//! - First match wins, in registration order
//! - Explicit `NoMatch` rather than a silent fallback route

use std::future::Future;
use std::sync::Arc;

use crate::error::{HrefError, LoadError, ResolveError, RouteTableError};
use crate::lazy::LazyView;
use crate::pattern::{normalize, Params, PathPattern};

/// Binds a path pattern to a symbolic name and a deferred view
#[derive(Debug)]
pub struct RouteDescriptor<V> {
    pattern: PathPattern,
    name: String,
    view: LazyView<V>,
}

impl<V: Send + Sync + 'static> RouteDescriptor<V> {
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &LazyView<V> {
        &self.view
    }
}

/// Result of resolving a URL
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    descriptor: &'a RouteDescriptor<V>,
    params: Params,
    path: String,
}

impl<'a, V: Send + Sync + 'static> RouteMatch<'a, V> {
    pub fn name(&self) -> &'a str {
        &self.descriptor.name
    }

    pub fn descriptor(&self) -> &'a RouteDescriptor<V> {
        self.descriptor
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The normalized path that was matched
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    /// Activate the route: resolve its view module.
    pub async fn load(&self) -> Result<Arc<V>, LoadError> {
        self.descriptor.view.load().await
    }
}

/// Ordered, immutable list of route descriptors
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V: Send + Sync + 'static> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Find the first descriptor matching `url`.
    ///
    /// Query string, fragment and a trailing slash are ignored.
    pub fn resolve(&self, url: &str) -> Result<RouteMatch<'_, V>, ResolveError> {
        let path = normalize(url);
        self.routes
            .iter()
            .find_map(|descriptor| {
                descriptor.pattern.matches(path).map(|params| RouteMatch {
                    descriptor,
                    params,
                    path: path.to_string(),
                })
            })
            .ok_or_else(|| ResolveError::NoMatch {
                path: path.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Build the concrete path of a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, HrefError> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| HrefError::UnknownRoute(name.to_string()))?;
        descriptor.pattern.render(name, params)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects routes and validates them on `build()`
pub struct RouteTableBuilder<V> {
    routes: Vec<(String, String, LazyView<V>)>,
}

impl<V: Send + Sync + 'static> RouteTableBuilder<V> {
    /// Register a route. The loader is not invoked until the route is activated.
    pub fn route<F, Fut>(mut self, path: &str, name: &str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LoadError>> + Send + 'static,
    {
        self.routes
            .push((path.to_string(), name.to_string(), LazyView::new(loader)));
        self
    }

    pub fn build(self) -> Result<RouteTable<V>, RouteTableError> {
        let mut routes: Vec<RouteDescriptor<V>> = Vec::with_capacity(self.routes.len());

        for (path, name, view) in self.routes {
            if name.is_empty() {
                return Err(RouteTableError::EmptyName(path));
            }
            let pattern = PathPattern::parse(&path)?;

            for existing in &routes {
                if existing.name == name {
                    return Err(RouteTableError::DuplicateName(name));
                }
                if existing.pattern.as_str() == pattern.as_str() {
                    return Err(RouteTableError::DuplicatePath(path));
                }
                if existing.pattern.same_shape(&pattern) {
                    return Err(RouteTableError::AmbiguousPath {
                        first: existing.pattern.as_str().to_string(),
                        second: path,
                    });
                }
            }

            tracing::trace!(name = %name, path = %pattern, "registered route");
            routes.push(RouteDescriptor {
                pattern,
                name,
                view,
            });
        }

        Ok(RouteTable { routes })
    }
}
