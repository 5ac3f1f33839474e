use crate::catalog::AlbumId;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a catalog provider while supplying albums or track counts.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable at {path:?}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {path:?}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("No track count known for album {id}")]
    UnknownAlbum { id: AlbumId },
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Album {id} is not a vertex of the current graph")]
    UnknownVertex { id: AlbumId },

    #[error("Album '{query}' not found in graph")]
    AlbumNotFound { query: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type GraphResult<T> = Result<T, GraphError>;
