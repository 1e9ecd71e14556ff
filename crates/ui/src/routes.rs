//! Route definitions for the application

use std::fmt;
use std::sync::Arc;

use dioxus::prelude::*;
use routing::{Params, RouteTable, RouteTableError, RouterConfig};

use crate::components::{Generate, GenerateView, Home, HomeView, Layout};

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/generate/:module_id")]
    Generate { module_id: String },
}

/// A resolved view: renders the page body for the bound parameters
#[derive(Clone, Copy)]
pub struct ViewModule {
    name: &'static str,
    render: fn(Params) -> Element,
}

impl ViewModule {
    pub fn new(name: &'static str, render: fn(Params) -> Element) -> Self {
        Self { name, render }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn render(&self, params: Params) -> Element {
        (self.render)(params)
    }
}

impl fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModule").field("name", &self.name).finish()
    }
}

/// Route table shared with every view through the context
#[derive(Clone, Debug)]
pub struct AppRoutes {
    pub table: Arc<RouteTable<ViewModule>>,
    pub config: RouterConfig,
}

impl AppRoutes {
    /// Shareable location of a named route in the configured history mode
    pub fn link(&self, name: &str, params: &Params) -> Option<String> {
        match self.table.href(name, params) {
            Ok(path) => Some(self.config.history.href(&self.config.base, &path)),
            Err(err) => {
                tracing::warn!(%err, route = name, "cannot build link");
                None
            }
        }
    }
}

/// The application's route table. Views are loaded on first activation.
pub fn route_table() -> Result<RouteTable<ViewModule>, RouteTableError> {
    RouteTable::builder()
        .route("/", "Home", || async {
            Ok(ViewModule::new("Home", |_| rsx! { HomeView {} }))
        })
        .route("/generate/:moduleId", "Generate", || async {
            Ok(ViewModule::new("Generate", |params| {
                let module_id = params.get("moduleId").unwrap_or_default().to_string();
                rsx! { GenerateView { module_id } }
            }))
        })
        .build()
}

impl Route {
    /// Name of the table entry this route renders
    pub fn table_name(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Generate { .. } => "Generate",
        }
    }

    /// Parameters in the table's naming
    pub fn params(&self) -> Params {
        match self {
            Route::Home {} => Params::new(),
            Route::Generate { module_id } => Params::new().with("moduleId", module_id.as_str()),
        }
    }
}
