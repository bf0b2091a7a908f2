//! Path resolution beneath the public root
//!
//! This module maps URL paths to filesystem paths, guaranteeing that every
//! resolved path stays inside the configured public root.

use std::path::{Path, PathBuf};

use anyhow::Context;
use path_clean::clean;
use tokio::fs;

/// Resolves URL paths to files beneath a fixed public root.
///
/// The root is absolutized once at construction; every candidate path must
/// have it as a prefix or the lookup reports no match.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    /// Creates a resolver for the given public root directory.
    ///
    /// The root does not have to exist yet; it is only used as the boundary
    /// for path resolution.
    pub fn new(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = std::path::absolute(root.as_ref())
            .with_context(|| format!("invalid public root {}", root.as_ref().display()))?;

        Ok(Self { root: clean(root) })
    }

    /// The absolute public root this resolver serves from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a URL path to a file beneath the public root.
    ///
    /// Returns `Some(path)` only when the candidate lies inside the root and
    /// names an existing regular file. Missing files, stat errors, directory
    /// targets, and paths escaping the root all report `None`.
    pub async fn resolve(&self, url_path: &str) -> Option<PathBuf> {
        // Collapse "." and ".." segments before mapping onto the filesystem
        let cleaned = clean(url_path);

        // Drop the leading "/" so the join below stays relative to the root
        let relative = cleaned.strip_prefix("/").unwrap_or(cleaned.as_path());

        let candidate = clean(self.root.join(relative));

        // Authoritative traversal guard: cleaning already collapses most ".."
        // segments, but the final path must still sit under the root.
        if !candidate.starts_with(&self.root) {
            return None;
        }

        let metadata = fs::metadata(&candidate).await.ok()?;
        if metadata.is_dir() {
            return None;
        }

        Some(candidate)
    }
}
