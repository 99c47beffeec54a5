//! Route file watcher for hot reload.
//!
//! The notify callback loads, validates and compiles the file; only a
//! complete `RouteRegistry` crosses the channel. A bad edit is logged and
//! the live table is left alone.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::routing::{RegistryHandle, RouteRegistry};

/// Watches one route file and emits rebuilt registries.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouteRegistry>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end of its updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouteRegistry>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. Notifications stop when the returned watcher drops.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, update_tx } = self;
        let reload_path = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    if let Some(registry) = rebuild(&reload_path) {
                        let _ = update_tx.send(registry);
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Route file watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;
        tracing::info!(path = ?path, "Route watcher started");
        Ok(watcher)
    }
}

/// Load and compile the route file for a reload.
///
/// Unlike startup, a file without routes is rejected rather than replaced by
/// the built-in table: editors that truncate before writing fire a change
/// event while the file is still empty.
pub(crate) fn rebuild(path: &Path) -> Option<RouteRegistry> {
    tracing::info!(path = ?path, "Route file changed, reloading");

    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Rejected route file, keeping current table");
            return None;
        }
    };
    if config.routes.is_empty() {
        tracing::warn!(path = ?path, "Route file declares no routes, keeping current table");
        return None;
    }
    match RouteRegistry::from_config(&config) {
        Ok(registry) => Some(registry),
        Err(e) => {
            tracing::error!(error = %e, "Rejected route file, keeping current table");
            None
        }
    }
}

/// Publish every received registry into the handle until the sender closes.
pub async fn forward_updates(
    mut updates: mpsc::UnboundedReceiver<RouteRegistry>,
    handle: Arc<RegistryHandle>,
) {
    while let Some(registry) = updates.recv().await {
        handle.replace(registry);
    }
    tracing::debug!("Route update channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "route-registry-watcher-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_rebuild_rejects_empty_file() {
        let path = temp_file("empty", "");
        let rebuilt = rebuild(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(rebuilt.is_none());
    }

    #[test]
    fn test_rebuild_compiles_routes() {
        let path = temp_file(
            "valid",
            r#"
            [[routes]]
            key = "login"
            base = "login"
            dialog = "LoginDialog"
            url = "^login$"
            "#,
        );
        let rebuilt = rebuild(&path);
        std::fs::remove_file(&path).unwrap();

        let registry = rebuilt.unwrap();
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["login"]);
    }
}
