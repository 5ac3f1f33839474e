use crate::error::CatalogError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    cmp::Ordering,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
};

pub type AlbumId = u32;

/// A catalog album. Identity is the `id`; titles are not unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

impl Album {
    pub fn new(id: AlbumId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: String::new(),
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Album {}

impl Hash for Album {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Album {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Album {
    // Title first for presentation, id keeps the order total.
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Source of albums and their track counts.
///
/// The provider owns the selection policy behind `limit`; graph construction
/// treats it as opaque.
pub trait CatalogProvider {
    fn fetch_albums(&self, limit: u32) -> Result<Vec<Album>, CatalogError>;

    fn track_count(&self, album: &Album) -> Result<u32, CatalogError>;
}

/// One album entry as stored in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: AlbumId,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub track_count: u32,
}

impl AlbumRecord {
    fn to_album(&self) -> Album {
        Album {
            id: self.id,
            title: self.title.clone(),
            artist: self.artist.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    albums: Vec<AlbumRecord>,
}

/// Drops records whose id already appeared earlier in the catalog.
fn first_occurrences(records: Vec<AlbumRecord>) -> Vec<AlbumRecord> {
    let mut seen = FxHashSet::default();
    records
        .into_iter()
        .filter(|record| seen.insert(record.id))
        .collect()
}

/// Albums with more than `limit` tracks, in album order.
fn select_albums(records: &[AlbumRecord], limit: u32) -> Vec<Album> {
    let mut albums: Vec<Album> = records
        .iter()
        .filter(|record| record.track_count > limit)
        .map(AlbumRecord::to_album)
        .collect();
    albums.sort();
    albums
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<AlbumRecord>,
    track_counts: FxHashMap<AlbumId, u32>,
}

impl InMemoryCatalog {
    /// A repeated id keeps its first record.
    pub fn new(records: Vec<AlbumRecord>) -> Self {
        let records = first_occurrences(records);
        let track_counts = records
            .iter()
            .map(|record| (record.id, record.track_count))
            .collect();
        Self {
            records,
            track_counts,
        }
    }

    pub fn from_albums(albums: impl IntoIterator<Item = (Album, u32)>) -> Self {
        let records = albums
            .into_iter()
            .map(|(album, track_count)| AlbumRecord {
                id: album.id,
                title: album.title,
                artist: album.artist,
                track_count,
            })
            .collect();
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn fetch_albums(&self, limit: u32) -> Result<Vec<Album>, CatalogError> {
        Ok(select_albums(&self.records, limit))
    }

    fn track_count(&self, album: &Album) -> Result<u32, CatalogError> {
        self.track_counts
            .get(&album.id)
            .copied()
            .ok_or(CatalogError::UnknownAlbum { id: album.id })
    }
}

/// Catalog backed by a JSON file, re-read on every fetch. A repeated id
/// keeps its first record.
///
/// Track counts are answered from the most recent fetch.
#[derive(Debug)]
pub struct JsonCatalog {
    path: PathBuf,
    track_counts: RefCell<FxHashMap<AlbumId, u32>>,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            track_counts: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<AlbumRecord>, CatalogError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        let catalog: CatalogFile =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(catalog.albums)
    }
}

impl CatalogProvider for JsonCatalog {
    fn fetch_albums(&self, limit: u32) -> Result<Vec<Album>, CatalogError> {
        let records = first_occurrences(self.read_records()?);

        let mut track_counts = self.track_counts.borrow_mut();
        track_counts.clear();
        track_counts.extend(records.iter().map(|record| (record.id, record.track_count)));

        Ok(select_albums(&records, limit))
    }

    fn track_count(&self, album: &Album) -> Result<u32, CatalogError> {
        self.track_counts
            .borrow()
            .get(&album.id)
            .copied()
            .ok_or(CatalogError::UnknownAlbum { id: album.id })
    }
}
