//! UI library for the Module Generator
//! Contains Dioxus components, the route definitions and the static module catalog

pub mod catalog;
mod components;
mod routes;
mod state;
mod styles;

pub use components::App;
pub use routes::{route_table, AppRoutes, Route, ViewModule};
pub use state::*;
pub use styles::CUSTOM_STYLES;
