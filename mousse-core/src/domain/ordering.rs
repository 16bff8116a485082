//! Static precedence tables for the technical sheet.
//!
//! Composition items and standards are listed in a fixed editorial order
//! rather than alphabetically. The tables below map a lowercased category or
//! domain to its rank; anything absent from a table ranks [`UNRANKED`].

use std::cmp::Ordering;

/// Rank given to categories and domains missing from a table.
pub const UNRANKED: u8 = 99;

pub const COMPOSITION_CATEGORY_RANKS: &[(&str, u8)] = &[
    ("polymère", 0),
    ("composite", 1),
    ("charges", 2),
    ("plastifiants", 3),
    ("vulcanisation", 4),
    ("additifs", 5),
    ("rf", 6),
];

pub const STANDARD_DOMAIN_RANKS: &[(&str, u8)] = &[
    ("feu", 0),
    ("fumées", 1),
    ("tests", 2),
];

/// Looks up `key` case-insensitively in a rank table.
pub fn rank_in(table: &[(&str, u8)], key: Option<&str>) -> u8 {
    let Some(key) = key else {
        return UNRANKED;
    };
    let key = key.to_lowercase();

    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED)
}

pub fn composition_rank(category: Option<&str>) -> u8 {
    rank_in(COMPOSITION_CATEGORY_RANKS, category)
}

pub fn standard_rank(domain: Option<&str>) -> u8 {
    rank_in(STANDARD_DOMAIN_RANKS, domain)
}

/// Orders by rank, then by a secondary key. `None` keys sort first, matching
/// how SQLite orders NULLs.
pub fn by_rank_then<'a>(
    left: (u8, Option<&'a str>),
    right: (u8, Option<&'a str>),
) -> Ordering {
    left.0.cmp(&right.0).then_with(|| left.1.cmp(&right.1))
}
