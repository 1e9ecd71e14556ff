//! Main application component with routing

use std::sync::Arc;

use dioxus::prelude::*;
use routing::RouterConfig;

use crate::catalog;
use crate::routes::{route_table, AppRoutes, Route};
use crate::styles::CUSTOM_STYLES;

/// Main application component
#[component]
pub fn App() -> Element {
    let config = try_use_context::<RouterConfig>().unwrap_or_default();
    let routes = use_hook(move || match route_table() {
        Ok(table) => Some(AppRoutes {
            table: Arc::new(table),
            config,
        }),
        Err(err) => {
            tracing::error!(%err, "route table rejected");
            None
        }
    });

    let Some(routes) = routes else {
        return rsx! {
            style { {CUSTOM_STYLES} }
            div { class: "panel panel-error", "The application routes are misconfigured." }
        };
    };
    use_context_provider(|| routes);

    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    let routes = use_context::<AppRoutes>();
    let route: Route = use_route();
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");

    use_effect(use_reactive((&route,), |(route,)| {
        tracing::debug!(%route, view = route.table_name(), "route changed");
    }));

    let is_home = matches!(route, Route::Home {});
    let current_module = match &route {
        Route::Generate { module_id } => Some(
            catalog::find(module_id)
                .map(|m| m.name.to_string())
                .unwrap_or_else(|| module_id.clone()),
        ),
        Route::Home {} => None,
    };
    let share_link = routes.link(route.table_name(), &route.params());

    rsx! {
        style { {CUSTOM_STYLES} }

        div { class: "main-container",
            div { class: "title-bar",
                span { class: "title-text", "🧩 Module Generator v{version}" }
                span { class: "title-mode", "history: {routes.config.history:?}" }
            }

            // Tab Navigation
            div { class: "tab-bar",
                Link {
                    to: Route::Home {},
                    class: if is_home { "tab-item tab-active" } else { "tab-item" },
                    "🏠 Modules"
                }
                if let Some(name) = current_module {
                    span { class: "tab-separator", "›" }
                    span { class: "tab-item tab-active", "⚙️ {name}" }
                }
                if let Some(link) = share_link {
                    span { class: "tab-link", title: "Shareable link", "{link}" }
                }
            }

            // Content Area with Router Outlet
            div { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
