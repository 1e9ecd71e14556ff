//! Generate view: configuration of one module

use dioxus::prelude::*;

use crate::catalog::{self, FieldKind, FieldSpec, ModuleInfo};
use crate::routes::Route;
use crate::state::FieldValues;

/// Configuration page for the module bound to `/generate/:moduleId`
#[component]
pub fn GenerateView(module_id: String) -> Element {
    let mut values = use_signal(FieldValues::default);

    let Some(module) = catalog::find(&module_id) else {
        tracing::warn!(module_id = %module_id, "unknown module requested");
        return rsx! {
            div { class: "panel panel-error",
                h2 { "Module not found" }
                p { "There is no module called \"{module_id}\"." }
                Link { class: "btn", to: Route::Home {}, "← Back to modules" }
            }
        };
    };

    let preview = values.read().preview(module);

    rsx! {
        div { class: "generate",
            div { class: "generate-header",
                span { class: "module-icon module-icon-large", "{module.icon}" }
                div {
                    h2 { class: "module-name", "{module.name}" }
                    p { class: "module-description", "{module.description}" }
                    div { class: "tech-stack",
                        for tech in module.tech_stack.iter() {
                            span { class: "tech-tag", "{tech}" }
                        }
                    }
                }
            }

            div { class: "generate-body",
                form { class: "field-form",
                    onsubmit: move |e| e.prevent_default(),
                    for field in module.fields.iter() {
                        FieldInput {
                            key: "{field.key}",
                            module: *module,
                            field: *field,
                            values,
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| values.write().reset(module),
                            "Reset to defaults"
                        }
                        Link { class: "btn", to: Route::Home {}, "← Back to modules" }
                    }
                }

                div { class: "preview",
                    h3 { "Configuration" }
                    pre { class: "preview-body", "{preview}" }
                }
            }
        }
    }
}

#[component]
fn FieldInput(module: ModuleInfo, field: FieldSpec, values: Signal<FieldValues>) -> Element {
    let current = values.read().get(&module, field.key);
    let mut values = values;

    rsx! {
        label { class: "field",
            span { class: "field-label", "{field.label}" }
            {match field.kind {
                FieldKind::Text => rsx! {
                    input {
                        class: "field-input",
                        r#type: "text",
                        value: "{current}",
                        oninput: move |e| values.write().set(&module, field.key, e.value()),
                    }
                },
                FieldKind::Choice(options) => rsx! {
                    select {
                        class: "field-input",
                        value: "{current}",
                        onchange: move |e| values.write().set(&module, field.key, e.value()),
                        for choice in options.iter() {
                            option {
                                value: "{choice}",
                                selected: *choice == current.as_str(),
                                "{choice}"
                            }
                        }
                    }
                },
            }}
        }
    }
}
