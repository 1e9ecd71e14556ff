//! Navigation history.
//!
//! `HistoryMode` maps between route paths and location strings. The
//! `History` trait is the navigation stack the router drives; `MemoryHistory`
//! keeps it in memory with a cursor, the way a browser tab does.

use serde::{Deserialize, Serialize};

/// How route paths appear in the location bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Browser-native paths: `/generate/blog_system`
    #[default]
    Path,
    /// Fragment based: `/#/generate/blog_system`
    Fragment,
}

impl HistoryMode {
    /// Render the location for a route path under `base`.
    pub fn href(self, base: &str, path: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            HistoryMode::Path => {
                if base.is_empty() {
                    path.to_string()
                } else if path == "/" {
                    format!("{base}/")
                } else {
                    format!("{base}{path}")
                }
            }
            HistoryMode::Fragment => format!("{base}/#{path}"),
        }
    }

    /// Extract the route path from a location. `None` when the location is
    /// outside `base` or the fragment is not a path.
    pub fn route_path(self, base: &str, location: &str) -> Option<String> {
        let base = base.trim_end_matches('/');
        match self {
            HistoryMode::Path => {
                let rest = strip_base(base, location)?;
                if rest.is_empty() {
                    Some("/".to_string())
                } else if rest.starts_with('/') {
                    Some(rest.to_string())
                } else {
                    Some(format!("/{rest}"))
                }
            }
            HistoryMode::Fragment => {
                let (path, fragment) = location.split_once('#').unwrap_or((location, ""));
                strip_base(base, path)?;
                if fragment.is_empty() {
                    Some("/".to_string())
                } else if fragment.starts_with('/') {
                    Some(fragment.to_string())
                } else {
                    None
                }
            }
        }
    }
}

/// The part of `location` after `base`, if `location` lies under it.
/// `base` must already have its trailing slash removed.
fn strip_base<'a>(base: &str, location: &'a str) -> Option<&'a str> {
    let rest = location.strip_prefix(base)?;
    let inside = rest.is_empty() || rest.starts_with(['/', '?', '#']);
    inside.then_some(rest)
}

/// A navigation stack of route paths
pub trait History: Send + Sync + std::fmt::Debug {
    /// Path of the current entry
    fn current(&self) -> &str;

    /// Add an entry after the current one, dropping forward entries.
    fn push(&mut self, path: String);

    /// Overwrite the current entry
    fn replace(&mut self, path: String);

    /// Move back one entry. Returns false at the start of the stack.
    fn back(&mut self) -> bool;

    /// Move forward one entry. Returns false at the end of the stack.
    fn forward(&mut self) -> bool;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;
}

/// In-memory history stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Start at `/`
    pub fn new() -> Self {
        Self::with_initial_path("/")
    }

    pub fn with_initial_path(path: impl Into<String>) -> Self {
        Self {
            entries: vec![path.into()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
    }

    fn replace(&mut self, path: String) {
        self.entries[self.cursor] = path;
    }

    fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_mode_href() {
        assert_eq!(HistoryMode::Path.href("/", "/"), "/");
        assert_eq!(HistoryMode::Path.href("/", "/generate/x"), "/generate/x");
        assert_eq!(HistoryMode::Path.href("/app/", "/generate/x"), "/app/generate/x");
        assert_eq!(HistoryMode::Path.href("/app", "/"), "/app/");
    }

    #[test]
    fn test_fragment_mode_href() {
        assert_eq!(HistoryMode::Fragment.href("/", "/"), "/#/");
        assert_eq!(HistoryMode::Fragment.href("/", "/generate/x"), "/#/generate/x");
        assert_eq!(HistoryMode::Fragment.href("/app", "/generate/x"), "/app/#/generate/x");
    }

    #[test]
    fn test_path_mode_route_path() {
        let mode = HistoryMode::Path;
        assert_eq!(mode.route_path("/", "/generate/x").as_deref(), Some("/generate/x"));
        assert_eq!(mode.route_path("/app", "/app").as_deref(), Some("/"));
        assert_eq!(mode.route_path("/app", "/app/generate/x").as_deref(), Some("/generate/x"));
        assert_eq!(mode.route_path("/app", "/app?x=1").as_deref(), Some("/?x=1"));
        assert_eq!(mode.route_path("/app", "/apple"), None);
        assert_eq!(mode.route_path("/app", "/other"), None);
    }

    #[test]
    fn test_fragment_mode_route_path() {
        let mode = HistoryMode::Fragment;
        assert_eq!(mode.route_path("/", "/").as_deref(), Some("/"));
        assert_eq!(mode.route_path("/", "/#").as_deref(), Some("/"));
        assert_eq!(mode.route_path("/", "/#/generate/x").as_deref(), Some("/generate/x"));
        assert_eq!(mode.route_path("/", "/#section"), None);
    }

    #[test]
    fn test_fragment_mode_respects_base() {
        let mode = HistoryMode::Fragment;
        assert_eq!(mode.route_path("/app", "/app/#/generate/x").as_deref(), Some("/generate/x"));
        assert_eq!(mode.route_path("/app", "/app#/generate/x").as_deref(), Some("/generate/x"));
        assert_eq!(mode.route_path("/app", "/app/").as_deref(), Some("/"));
        assert_eq!(mode.route_path("/app", "/elsewhere/#/generate/x"), None);
        assert_eq!(mode.route_path("/app", "/apple/#/generate/x"), None);
        assert_eq!(mode.route_path("/app", "/"), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("/generate/a".into());
        history.push("/generate/b".into());
        assert!(history.back());
        assert_eq!(history.current(), "/generate/a");
        assert!(history.can_go_forward());

        history.push("/generate/c".into());
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
        assert!(history.back());
        assert_eq!(history.current(), "/generate/a");
    }

    #[test]
    fn test_back_and_forward_bounds() {
        let mut history = MemoryHistory::new();
        assert!(!history.back());
        assert!(!history.forward());

        history.push("/generate/a".into());
        assert!(history.back());
        assert_eq!(history.current(), "/");
        assert!(history.forward());
        assert_eq!(history.current(), "/generate/a");
        assert!(!history.forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new();
        history.replace("/generate/a".into());
        assert_eq!(history.current(), "/generate/a");
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
    }
}
