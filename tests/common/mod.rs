//! Shared utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// A route file in the temp dir, removed on drop.
pub struct TempRouteFile {
    path: PathBuf,
}

impl TempRouteFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents in place.
    #[allow(dead_code)]
    pub fn rewrite(&self, contents: &str) {
        fs::write(&self.path, contents).unwrap();
    }
}

impl Drop for TempRouteFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Write a route file to a unique temp path.
pub fn write_route_file(contents: &str) -> TempRouteFile {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "route-registry-test-{}-{}.toml",
        std::process::id(),
        n
    ));
    fs::write(&path, contents).unwrap();
    TempRouteFile { path }
}

/// Path of the sample route file shipped at the crate root.
#[allow(dead_code)]
pub fn sample_route_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("routes.toml")
}
