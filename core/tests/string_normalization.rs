use albumgraph_core::Album;
use albumgraph_core::string_normalization::{build_title_lookup, clean_str, find_best_title_match};

#[test]
fn test_clean_str() {
    assert_eq!(clean_str("  Sgt.  Pepper's   Lonely Hearts "), "sgt. pepper's lonely hearts");
    assert_eq!(clean_str("Björk"), "bjork");
    assert_eq!(clean_str("MOTÖRHEAD"), "motorhead");
    assert_eq!(clean_str(""), "");
}

#[test]
fn test_title_lookup_groups_normalized_titles() {
    let albums = vec![
        Album::new(3, "Homogenic"),
        Album::new(1, "homogénic"),
        Album::new(2, "Debut"),
    ];

    let lookup = build_title_lookup(&albums);

    assert_eq!(lookup.len(), 2);
    let ids: Vec<u32> = lookup["homogenic"].iter().map(|album| album.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn test_find_best_title_match() {
    let albums = vec![Album::new(1, "Debut"), Album::new(2, "DEBUT"), Album::new(3, "Post")];
    let lookup = build_title_lookup(&albums);

    assert_eq!(find_best_title_match("DEBUT", &lookup).unwrap().id, 2);
    assert_eq!(find_best_title_match("Debut", &lookup).unwrap().id, 1);
    assert_eq!(find_best_title_match(" Debut ", &lookup).unwrap().id, 1);
    assert_eq!(find_best_title_match("debut", &lookup).unwrap().id, 2);
    assert_eq!(find_best_title_match("  post ", &lookup).unwrap().id, 3);
    assert!(find_best_title_match("Vespertine", &lookup).is_none());
}
