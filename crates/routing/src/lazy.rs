//! Deferred view loading.
//!
//! A `LazyView` holds an async factory for a view module. The factory runs on
//! the first activation only; later activations share the cached module.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::OnceCell;

use crate::error::LoadError;

type Loader<V> = Box<dyn Fn() -> BoxFuture<'static, Result<V, LoadError>> + Send + Sync>;

/// A view module that is resolved on first use
pub struct LazyView<V> {
    loader: Loader<V>,
    cell: OnceCell<Arc<V>>,
    loads: AtomicUsize,
}

impl<V: Send + Sync + 'static> LazyView<V> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LoadError>> + Send + 'static,
    {
        Self {
            loader: Box::new(move || loader().boxed()),
            cell: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Resolve the module, running the factory if it has not succeeded yet.
    ///
    /// Concurrent callers wait on the same factory invocation. A failure is
    /// not cached, so the next call retries.
    pub async fn load(&self) -> Result<Arc<V>, LoadError> {
        self.cell
            .get_or_try_init(|| async {
                self.loads.fetch_add(1, Ordering::SeqCst);
                (self.loader)().await.map(Arc::new)
            })
            .await
            .map(Arc::clone)
    }

    /// The module if it has already been resolved
    pub fn get(&self) -> Option<Arc<V>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Number of times the factory has been invoked
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl<V> fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.cell.initialized())
            .field("loads", &self.loads.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[tokio::test]
    async fn test_factory_runs_once() {
        let view = LazyView::new(|| async { Ok::<_, LoadError>("home") });
        assert_eq!(view.load_count(), 0);
        assert!(view.get().is_none());

        let first = view.load().await.unwrap();
        let second = view.load().await.unwrap();

        assert_eq!(*first, "home");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(view.load_count(), 1);
        assert!(view.is_loaded());
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_factory() {
        let view = LazyView::new(|| async {
            tokio::task::yield_now().await;
            Ok::<_, LoadError>(42u32)
        });

        let (a, b) = tokio::join!(view.load(), view.load());
        assert_eq!(*a.unwrap(), 42);
        assert_eq!(*b.unwrap(), 42);
        assert_eq!(view.load_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_retried() {
        let fail = Arc::new(AtomicBool::new(true));
        let flag = fail.clone();
        let view = LazyView::new(move || {
            let should_fail = flag.swap(false, Ordering::SeqCst);
            async move {
                if should_fail {
                    Err(LoadError::new("chunk fetch failed"))
                } else {
                    Ok("generate")
                }
            }
        });

        let err = view.load().await.unwrap_err();
        assert_eq!(err.reason(), "chunk fetch failed");
        assert!(!view.is_loaded());

        assert_eq!(*view.load().await.unwrap(), "generate");
        assert_eq!(view.load_count(), 2);
    }
}
