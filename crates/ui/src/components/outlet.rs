//! Route components that resolve their view lazily

use std::sync::Arc;

use dioxus::prelude::*;
use routing::{LoadError, Params, RouteTable};

use crate::routes::{AppRoutes, Route, ViewModule};

/// `/` route
#[component]
pub fn Home() -> Element {
    let route = Route::Home {};
    rsx! {
        LazyOutlet { name: route.table_name(), params: route.params() }
    }
}

/// `/generate/:module_id` route
#[component]
pub fn Generate(module_id: String) -> Element {
    let route = Route::Generate { module_id };
    rsx! {
        LazyOutlet { name: route.table_name(), params: route.params() }
    }
}

/// Loads the view registered under `name` and renders it with `params`.
/// Shows a placeholder until the view module resolves.
#[component]
pub fn LazyOutlet(name: &'static str, params: Params) -> Element {
    let routes = use_context::<AppRoutes>();
    let view = use_resource(move || {
        let routes = routes.clone();
        async move { load_view(&routes.table, name).await }
    });

    // Failures are logged by `load_view`, once per load attempt
    let state = view.read();
    let rendered = match &*state {
        Some(Ok(module)) => module.render(params),
        Some(Err(err)) => rsx! {
            div { class: "panel panel-error",
                h2 { "⚠️ This page could not be loaded" }
                p { "{err}" }
            }
        },
        None => rsx! {
            div { class: "panel panel-loading", "Loading…" }
        },
    };
    rendered
}

/// Resolve the view registered under `name`, logging a failure when it happens.
async fn load_view(
    table: &RouteTable<ViewModule>,
    name: &'static str,
) -> Result<Arc<ViewModule>, LoadError> {
    let loaded = match table.get(name) {
        Some(descriptor) => descriptor.view().load().await,
        None => Err(LoadError::new(format!("no view registered for `{name}`"))),
    };
    if let Err(err) = &loaded {
        tracing::error!(%err, route = name, "view failed to load");
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::route_table;

    #[tokio::test]
    async fn test_load_view_resolves_registered_view() {
        let table = route_table().unwrap();
        let module = load_view(&table, "Home").await.unwrap();
        assert_eq!(module.name(), "Home");

        load_view(&table, "Home").await.unwrap();
        assert_eq!(table.get("Home").unwrap().view().load_count(), 1);
    }

    #[tokio::test]
    async fn test_load_view_reports_unknown_view() {
        let table = route_table().unwrap();
        let err = load_view(&table, "Settings").await.unwrap_err();
        assert_eq!(err.reason(), "no view registered for `Settings`");
        assert!(table.iter().all(|r| r.view().load_count() == 0));
    }
}
