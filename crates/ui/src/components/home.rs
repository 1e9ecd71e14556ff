//! Home view: the module catalog

use dioxus::prelude::*;

use crate::catalog::{self, Category, ModuleInfo};
use crate::routes::Route;
use crate::state::{CATEGORY_FILTER, SEARCH_QUERY};

/// Catalog of generator modules with search and category filter
#[component]
pub fn HomeView() -> Element {
    let query = SEARCH_QUERY.read().clone();
    let filter = *CATEGORY_FILTER.read();
    let modules = catalog::search(&query, filter);
    let total = catalog::MODULES.len();

    rsx! {
        div { class: "home",
            div { class: "toolbar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search by name or technology…",
                    value: "{query}",
                    oninput: move |e| *SEARCH_QUERY.write() = e.value(),
                }
                div { class: "filter-group",
                    button {
                        class: if filter.is_none() { "chip chip-active" } else { "chip" },
                        onclick: move |_| *CATEGORY_FILTER.write() = None,
                        "All"
                    }
                    for category in catalog::categories() {
                        CategoryChip {
                            key: "{category:?}",
                            category,
                            active: filter == Some(category),
                        }
                    }
                }
                span { class: "toolbar-count", "{modules.len()} / {total} modules" }
            }

            if modules.is_empty() {
                div { class: "panel", "No module matches \"{query}\"." }
            }

            div { class: "module-grid",
                for module in modules.iter().copied() {
                    ModuleCard { key: "{module.id}", module: *module }
                }
            }
        }
    }
}

#[component]
fn CategoryChip(category: Category, active: bool) -> Element {
    rsx! {
        button {
            class: if active { "chip chip-active" } else { "chip" },
            onclick: move |_| *CATEGORY_FILTER.write() = Some(category),
            "{category.label()}"
        }
    }
}

#[component]
fn ModuleCard(module: ModuleInfo) -> Element {
    rsx! {
        div { class: "module-card",
            div { class: "module-card-header",
                span { class: "module-icon", "{module.icon}" }
                div {
                    h3 { class: "module-name", "{module.name}" }
                    span { class: "module-category", "{module.category.label()}" }
                }
            }
            p { class: "module-description", "{module.description}" }
            div { class: "tech-stack",
                for tech in module.tech_stack.iter() {
                    span { class: "tech-tag", "{tech}" }
                }
            }
            Link {
                class: "btn btn-primary",
                to: Route::Generate { module_id: module.id.to_string() },
                "Configure →"
            }
        }
    }
}
