//! Catalog fixture loading.
//!
//! The catalog is a read-only data fixture supplied externally as a JSON
//! array of items. It is loaded once at startup; load failures are fatal
//! (the API cannot serve without a catalog).

use std::path::Path;

use thiserror::Error;

use emporio_core::{Catalog, CatalogItem};

/// Errors loading the catalog fixture.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load the catalog from a JSON fixture file.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read or is not a JSON
/// array of catalog items.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let items: Vec<CatalogItem> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(items = items.len(), path = %path.display(), "Catalog loaded");
    Ok(Catalog::new(items))
}
