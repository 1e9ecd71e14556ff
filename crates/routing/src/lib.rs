//! Route table and router for the module generator front end.
//!
//! # Data Flow
//! ```text
//! RouteTable::builder()
//!     .route("/", "Home", loader)
//!     .route("/generate/:moduleId", "Generate", loader)
//!     .build()                      → validated, immutable table
//!
//! Router::new(table, history)
//!     → push / replace / back / forward   (resolve, record, ticket)
//!     → activate                          (lazy view load, last navigation wins)
//! ```
//!
//! The crate has no UI dependency. In the browser the Dioxus router owns the
//! navigation stack and the `ui` crate uses only `RouteTable`, `LazyView` and
//! `HistoryMode` from here. `Router` is the navigable instance for hosts
//! without a Dioxus router, such as headless navigation and tests.

pub mod config;
pub mod error;
pub mod history;
pub mod lazy;
pub mod pattern;
pub mod router;
pub mod table;

pub use config::RouterConfig;
pub use error::{
    ConfigError, HrefError, LoadError, NavigationError, PatternError, ResolveError,
    RouteTableError,
};
pub use history::{History, HistoryMode, MemoryHistory};
pub use lazy::LazyView;
pub use pattern::{Params, PathPattern};
pub use router::{Navigation, Router};
pub use table::{RouteDescriptor, RouteMatch, RouteTable, RouteTableBuilder};
