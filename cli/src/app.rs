use albumgraph_core::{AlbumGraphModel, JsonCatalog};
use std::{error::Error, path::PathBuf};

pub const CATALOG_ENV_VAR: &str = "ALBUMGRAPH_CATALOG";
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

pub struct AlbumGraphApp {
    pub catalog_path: PathBuf,
}

impl AlbumGraphApp {
    /// Resolves the catalog path: explicit argument, then the environment,
    /// then the default location.
    pub fn new(catalog_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let catalog_path = resolve_catalog_path(catalog_path, std::env::var(CATALOG_ENV_VAR).ok());

        if !catalog_path.exists() {
            return Err(format!(
                "Catalog file not found: {:?}. Pass --catalog or set {}",
                catalog_path, CATALOG_ENV_VAR
            )
            .into());
        }

        Ok(Self { catalog_path })
    }

    pub fn create_model(&self) -> AlbumGraphModel<JsonCatalog> {
        AlbumGraphModel::new(JsonCatalog::new(&self.catalog_path))
    }
}

pub fn resolve_catalog_path(argument: Option<String>, environment: Option<String>) -> PathBuf {
    argument
        .or(environment)
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}
