use crate::catalog::Album;
use rustc_hash::FxHashMap;
use unidecode::unidecode;

pub type TitleLookup = FxHashMap<String, Vec<Album>>;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Groups albums by normalized title, each group in album order.
pub fn build_title_lookup<'a>(albums: impl IntoIterator<Item = &'a Album>) -> TitleLookup {
    let mut lookup: TitleLookup = FxHashMap::default();
    for album in albums {
        lookup
            .entry(clean_str(&album.title))
            .or_default()
            .push(album.clone());
    }
    for candidates in lookup.values_mut() {
        candidates.sort();
    }
    lookup
}

/// Resolves a typed title. Several albums may share a normalized title: the
/// exact spelling wins, then a case-insensitive match, then the first in order.
pub fn find_best_title_match<'a>(query: &str, lookup: &'a TitleLookup) -> Option<&'a Album> {
    let candidates = lookup.get(&clean_str(query))?;

    let trimmed_query = query.trim();
    let lowercase_query = trimmed_query.to_lowercase();
    candidates
        .iter()
        .find(|album| album.title == trimmed_query)
        .or_else(|| {
            candidates
                .iter()
                .find(|album| album.title.to_lowercase() == lowercase_query)
        })
        .or_else(|| candidates.first())
}
