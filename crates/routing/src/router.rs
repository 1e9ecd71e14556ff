//! Navigable router instance.
//!
//! # Data Flow
//! ```text
//! push(url) / push_named(name, params)
//!     → table.rs (resolve, reject NoMatch)
//!     → history (record entry)
//!     → Navigation { ticket, name, params }
//!
//! activate(navigation)
//!     → LazyView::load (first activation only)
//!     → discard if a newer navigation happened meanwhile
//! ```
//!
//! # Design Decisions
//! - Unresolvable URLs never enter the history
//! - Every navigation bumps a ticket; stale activations are dropped
//! - The table is shared, the history is owned
//! - Not used by the Dioxus app, whose own router drives browser history

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::RouterConfig;
use crate::error::{NavigationError, ResolveError};
use crate::history::{History, HistoryMode, MemoryHistory};
use crate::pattern::Params;
use crate::table::RouteTable;

/// A resolved navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    ticket: u64,
    name: String,
    path: String,
    params: Params,
}

impl Navigation {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Route table plus history
#[derive(Debug)]
pub struct Router<V, H = MemoryHistory> {
    table: Arc<RouteTable<V>>,
    history: H,
    mode: HistoryMode,
    base: String,
    latest: Arc<AtomicU64>,
}

impl<V: Send + Sync + 'static> Router<V, MemoryHistory> {
    /// Router with an in-memory history starting at `/`
    pub fn in_memory(table: Arc<RouteTable<V>>) -> Self {
        Self::new(table, MemoryHistory::new())
    }
}

impl<V, H> Router<V, H>
where
    V: Send + Sync + 'static,
    H: History,
{
    pub fn new(table: Arc<RouteTable<V>>, history: H) -> Self {
        Self::with_config(table, history, &RouterConfig::default())
    }

    pub fn with_config(table: Arc<RouteTable<V>>, history: H, config: &RouterConfig) -> Self {
        Self {
            table,
            history,
            mode: config.history,
            base: config.base.clone(),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn table(&self) -> &Arc<RouteTable<V>> {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Ticket of the most recent navigation
    pub fn latest_ticket(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Resolve the current history entry without starting a navigation
    pub fn current(&self) -> Result<Navigation, ResolveError> {
        let path = self.history.current().to_string();
        self.describe(&path, self.latest_ticket())
    }

    pub fn push(&mut self, url: &str) -> Result<Navigation, ResolveError> {
        let navigation = self.begin(url)?;
        self.history.push(navigation.path.clone());
        Ok(navigation)
    }

    pub fn replace(&mut self, url: &str) -> Result<Navigation, ResolveError> {
        let navigation = self.begin(url)?;
        self.history.replace(navigation.path.clone());
        Ok(navigation)
    }

    /// Navigate by route name
    pub fn push_named(&mut self, name: &str, params: &Params) -> Result<Navigation, NavigationError> {
        let path = self.table.href(name, params)?;
        Ok(self.push(&path)?)
    }

    /// Sync with a location reported by the host (for example a popstate).
    pub fn replace_location(&mut self, location: &str) -> Result<Navigation, ResolveError> {
        let path = self
            .mode
            .route_path(&self.base, location)
            .ok_or_else(|| ResolveError::NoMatch {
                path: location.to_string(),
            })?;
        self.replace(&path)
    }

    /// Step back. `Ok(None)` at the start of the history.
    pub fn back(&mut self) -> Result<Option<Navigation>, ResolveError> {
        if !self.history.back() {
            return Ok(None);
        }
        let path = self.history.current().to_string();
        let ticket = self.bump();
        self.describe(&path, ticket).map(Some)
    }

    /// Step forward. `Ok(None)` at the end of the history.
    pub fn forward(&mut self) -> Result<Option<Navigation>, ResolveError> {
        if !self.history.forward() {
            return Ok(None);
        }
        let path = self.history.current().to_string();
        let ticket = self.bump();
        self.describe(&path, ticket).map(Some)
    }

    /// Location string for a named route, in the configured history mode
    pub fn href(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let path = self.table.href(name, params)?;
        Ok(self.mode.href(&self.base, &path))
    }

    /// Load the view of `navigation`.
    ///
    /// The returned future does not borrow the router, so navigation can
    /// continue while it is pending. If another navigation happens before the
    /// load completes, the result is `Superseded`.
    pub fn activate(
        &self,
        navigation: &Navigation,
    ) -> impl Future<Output = Result<Arc<V>, NavigationError>> + Send + 'static {
        let table = Arc::clone(&self.table);
        let latest = Arc::clone(&self.latest);
        let ticket = navigation.ticket;
        let name = navigation.name.clone();
        let path = navigation.path.clone();

        async move {
            let descriptor = table.get(&name).ok_or(ResolveError::NoMatch { path })?;
            let view = descriptor.view().load().await?;

            let newest = latest.load(Ordering::SeqCst);
            if newest != ticket {
                tracing::debug!(ticket, newest, route = %name, "dropping superseded activation");
                return Err(NavigationError::Superseded {
                    ticket,
                    latest: newest,
                });
            }
            Ok(view)
        }
    }

    fn begin(&mut self, url: &str) -> Result<Navigation, ResolveError> {
        let (name, path, params) = match self.table.resolve(url) {
            Ok(matched) => (
                matched.name().to_string(),
                matched.path().to_string(),
                matched.params().clone(),
            ),
            Err(err) => {
                tracing::warn!(url, "navigation rejected: no matching route");
                return Err(err);
            }
        };
        let ticket = self.bump();
        tracing::debug!(ticket, route = %name, path = %path, "navigating");
        Ok(Navigation {
            ticket,
            name,
            path,
            params,
        })
    }

    fn describe(&self, path: &str, ticket: u64) -> Result<Navigation, ResolveError> {
        let matched = self.table.resolve(path)?;
        Ok(Navigation {
            ticket,
            name: matched.name().to_string(),
            path: matched.path().to_string(),
            params: matched.into_params(),
        })
    }

    fn bump(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use std::sync::atomic::AtomicUsize;

    fn router() -> Router<String> {
        let table = RouteTable::builder()
            .route("/", "Home", || async { Ok("home".to_string()) })
            .route("/generate/:moduleId", "Generate", || async {
                Ok("generate".to_string())
            })
            .build()
            .unwrap();
        Router::in_memory(Arc::new(table))
    }

    #[test]
    fn test_starts_at_home() {
        let router = router();
        let current = router.current().unwrap();
        assert_eq!(current.name(), "Home");
        assert_eq!(current.ticket(), 0);
    }

    #[test]
    fn test_push_records_history() {
        let mut router = router();
        let nav = router.push("/generate/blog_system").unwrap();
        assert_eq!(nav.name(), "Generate");
        assert_eq!(nav.params().get("moduleId"), Some("blog_system"));
        assert_eq!(router.history().current(), "/generate/blog_system");
        assert_eq!(router.latest_ticket(), 1);
    }

    #[test]
    fn test_unmatched_push_leaves_history_alone() {
        let mut router = router();
        let err = router.push("/unknown").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoMatch {
                path: "/unknown".into()
            }
        );
        assert_eq!(router.history().current(), "/");
        assert_eq!(router.history().len(), 1);
        assert_eq!(router.latest_ticket(), 0);
    }

    #[test]
    fn test_push_named() {
        let mut router = router();
        let params = Params::new().with("moduleId", "hotel_management");
        let nav = router.push_named("Generate", &params).unwrap();
        assert_eq!(nav.path(), "/generate/hotel_management");

        let err = router.push_named("Generate", &Params::new()).unwrap_err();
        assert!(matches!(err, NavigationError::Href(_)));
    }

    #[test]
    fn test_back_and_forward() {
        let mut router = router();
        router.push("/generate/a").unwrap();
        router.push("/generate/b").unwrap();

        let back = router.back().unwrap().unwrap();
        assert_eq!(back.params().get("moduleId"), Some("a"));
        let back = router.back().unwrap().unwrap();
        assert_eq!(back.name(), "Home");
        assert!(router.back().unwrap().is_none());

        let forward = router.forward().unwrap().unwrap();
        assert_eq!(forward.params().get("moduleId"), Some("a"));
    }

    #[test]
    fn test_replace_location_in_fragment_mode() {
        let table = Arc::clone(router().table());
        let config = RouterConfig {
            history: HistoryMode::Fragment,
            base: "/".into(),
        };
        let mut router = Router::with_config(table, MemoryHistory::new(), &config);

        let nav = router.replace_location("/#/generate/ecommerce").unwrap();
        assert_eq!(nav.name(), "Generate");
        assert_eq!(router.history().len(), 1);

        let href = router
            .href("Generate", &Params::new().with("moduleId", "ecommerce"))
            .unwrap();
        assert_eq!(href, "/#/generate/ecommerce");

        assert!(router.replace_location("/#section").is_err());
    }

    #[test]
    fn test_replace_location_outside_base_is_rejected() {
        let table = Arc::clone(router().table());
        let config = RouterConfig {
            history: HistoryMode::Fragment,
            base: "/app".into(),
        };
        let mut router = Router::with_config(table, MemoryHistory::new(), &config);

        let err = router.replace_location("/elsewhere/#/generate/x").unwrap_err();
        assert!(matches!(err, ResolveError::NoMatch { .. }));
        assert_eq!(router.history().current(), "/");

        let nav = router.replace_location("/app/#/generate/x").unwrap();
        assert_eq!(nav.params().get("moduleId"), Some("x"));
    }

    #[tokio::test]
    async fn test_activation_loads_lazily() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let table = RouteTable::builder()
            .route("/", "Home", || async { Ok(0usize) })
            .route("/generate/:moduleId", "Generate", move || {
                let counter = counter.clone();
                async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
            })
            .build()
            .unwrap();
        let mut router = Router::in_memory(Arc::new(table));
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        let nav = router.push("/generate/a").unwrap();
        router.activate(&nav).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        let nav = router.push("/generate/b").unwrap();
        router.activate(&nav).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_last_navigation_wins() {
        let mut router = router();
        let first = router.push("/generate/a").unwrap();
        let pending = router.activate(&first);

        let second = router.push("/").unwrap();
        let err = pending.await.unwrap_err();
        assert_eq!(
            err,
            NavigationError::Superseded {
                ticket: first.ticket(),
                latest: second.ticket(),
            }
        );

        assert_eq!(*router.activate(&second).await.unwrap(), "home");
    }

    #[tokio::test]
    async fn test_load_failure_surfaces() {
        let table = RouteTable::<()>::builder()
            .route("/", "Home", || async { Err(LoadError::new("offline")) })
            .build()
            .unwrap();
        let router = Router::in_memory(Arc::new(table));
        let nav = router.current().unwrap();

        let err = router.activate(&nav).await.unwrap_err();
        assert_eq!(err, NavigationError::Load(LoadError::new("offline")));
    }
}
