//! Module Generator
//! Single-page front end built with Dioxus: module catalog and per-module configuration

mod config;

use config::AppConfig;
use ui::App;

const EMBEDDED_CONFIG: &str = include_str!("../modgen.toml");

fn main() {
    let (config, config_error) = match AppConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let level = config.log.level().unwrap_or(tracing::Level::INFO);
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("failed to initialize logging: {err}");
    }
    if let Some(err) = config_error {
        tracing::warn!(%err, "invalid embedded config, using defaults");
    }
    tracing::info!(history = ?config.router.history, base = %config.router.base, "starting");

    launch(config);
}

/// Browser launch: the configured history mode and base drive the Dioxus router.
#[cfg(not(feature = "desktop"))]
fn launch(config: AppConfig) {
    use std::rc::Rc;

    use dioxus::web::{HashHistory, WebHistory};
    use routing::HistoryMode;

    let prefix = config.router.prefix().map(str::to_string);
    let web_config = match config.router.history {
        HistoryMode::Path => dioxus::web::Config::new().history(Rc::new(WebHistory::new(prefix, true))),
        HistoryMode::Fragment => dioxus::web::Config::new().history(Rc::new(HashHistory::new(true))),
    };

    dioxus::LaunchBuilder::web()
        .with_cfg(web_config)
        .with_context(config.router)
        .launch(App);
}

/// Desktop launch: navigation stays in memory, so history mode and base only shape shared links.
#[cfg(feature = "desktop")]
fn launch(config: AppConfig) {
    use dioxus::desktop::{LogicalSize, WindowBuilder};

    if config.router != routing::RouterConfig::default() {
        tracing::info!("desktop window uses in-memory history; router settings apply to links only");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                WindowBuilder::new()
                    .with_title("Module Generator")
                    .with_inner_size(LogicalSize::new(1100.0, 700.0))
                    .with_resizable(true),
            ),
        )
        .with_context(config.router)
        .launch(App);
}
