//! Request routing and file serving
//!
//! This module turns request paths into HTTP responses: two fixed routes,
//! a fallthrough to the generic resolver, and the status mapping for files
//! that cannot be resolved or read.

use std::path::Path;

use tokio::fs;
use tracing::warn;

use crate::files::resolver::Resolver;
use crate::http::mime;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Serves files from the public root.
///
/// Cheap to clone; each connection gets its own copy and no state is shared
/// across connections.
#[derive(Debug, Clone)]
pub struct StaticHandler {
    resolver: Resolver,
}

impl StaticHandler {
    /// Creates a handler serving from the given public root directory.
    pub fn new(public_root: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(Self {
            resolver: Resolver::new(public_root)?,
        })
    }

    /// Builds the response for a GET request to `path`.
    ///
    /// `/` and `/about` map directly to fixed files; everything else goes
    /// through the resolver. Unresolvable paths get 404, files that resolve
    /// but cannot be read get 500.
    pub async fn serve(&self, path: &str) -> Response {
        match path {
            "/" => serve_file(&self.resolver.root().join("index.html")).await,
            "/about" => serve_file(&self.resolver.root().join("about.html")).await,
            _ => match self.resolver.resolve(path).await {
                Some(file) => serve_file(&file).await,
                None => Response::not_found(),
            },
        }
    }
}

async fn serve_file(path: &Path) -> Response {
    let content = match fs::read(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Response::internal_error();
        }
    };

    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", mime::content_type(path))
        .body(content)
        .build()
}
