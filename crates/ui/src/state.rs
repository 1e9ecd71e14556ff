//! State types for the UI

use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::catalog::{Category, ModuleInfo};

/// Search box on the home view
pub static SEARCH_QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Category filter on the home view, `None` shows everything
pub static CATEGORY_FILTER: GlobalSignal<Option<Category>> = Signal::global(|| None);

/// Values entered on the generate view, keyed by module id and field key.
/// Fields that were never edited fall back to the module's defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    values: BTreeMap<(String, &'static str), String>,
}

impl FieldValues {
    pub fn get(&self, module: &ModuleInfo, key: &'static str) -> String {
        if let Some(value) = self.values.get(&(module.id.to_string(), key)) {
            return value.clone();
        }
        module
            .fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.default.to_string())
            .unwrap_or_default()
    }

    pub fn set(&mut self, module: &ModuleInfo, key: &'static str, value: String) {
        self.values.insert((module.id.to_string(), key), value);
    }

    /// Forget the edits of one module
    pub fn reset(&mut self, module: &ModuleInfo) {
        self.values.retain(|(id, _), _| id != module.id);
    }

    /// `key = "value"` lines for every field of `module`
    pub fn preview(&self, module: &ModuleInfo) -> String {
        module
            .fields
            .iter()
            .map(|f| format!("{} = {:?}", f.key, self.get(module, f.key)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
