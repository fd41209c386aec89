//! Relevance filtering and scoring for nearby-search candidates.
//!
//! Two stages: a hard include/exclude filter that keeps generic
//! tourist-attraction noise out, then an additive score that ranks true
//! historical landmarks above merely well-rated venues.

use crate::constants::RATING_SCORE_MULTIPLIER;
use crate::models::PlaceCandidate;
use std::collections::HashSet;

/// Venue types that disqualify a candidate outright. Commercial and utility
/// venues occasionally carry historical keywords in their names.
const EXCLUDED_VENUE_TYPES: &[&str] = &[
    "restaurant",
    "cafe",
    "shopping_mall",
    "store",
    "lodging",
    "gas_station",
    "parking",
    "bank",
];

/// Venue types that qualify a candidate when paired with a high rating.
const PREFERRED_VENUE_TYPES: &[&str] = &[
    "museum",
    "place_of_worship",
    "tourist_attraction",
    "establishment",
];

/// Name substrings that mark strong historical or cultural significance:
/// national designations, castle/shrine/temple terms, era markers.
/// A marker match is sufficient for inclusion on its own.
const HIGH_VALUE_MARKERS: &[&str] = &[
    "国宝",
    "重要文化財",
    "世界遺産",
    "史跡",
    "国指定",
    "城",
    "天守",
    "御殿",
    "門跡",
    "陣屋",
    "大社",
    "神宮",
    "總本山",
    "本山",
    "大本山",
    "古墳",
    "遺跡",
    "窯跡",
    "官衙",
    "合戦",
    "古戦場",
    "陣場",
    "要害",
    "宿場",
    "関所",
    "番所",
    "代官所",
    "明治",
    "文明開化",
    "産業遺産",
];

/// Additive scoring groups: each group contributes its score once when any
/// of its substrings appears in the name.
const SCORE_GROUPS: &[(&[&str], i32)] = &[
    (&["国宝", "重要文化財"], 100),
    (&["世界遺産"], 90),
    (&["史跡"], 80),
    (&["古戦場", "合戦"], 75),
    (&["城", "天守"], 70),
    (&["古墳", "遺跡"], 65),
    (&["神社", "大社"], 60),
    (&["寺", "院"], 60),
];

pub fn has_high_value_marker(name: &str) -> bool {
    HIGH_VALUE_MARKERS.iter().any(|marker| name.contains(marker))
}

fn has_excluded_type(candidate: &PlaceCandidate) -> bool {
    candidate
        .types
        .iter()
        .any(|t| EXCLUDED_VENUE_TYPES.contains(&t.as_str()))
}

fn has_preferred_type(candidate: &PlaceCandidate) -> bool {
    candidate
        .types
        .iter()
        .any(|t| PREFERRED_VENUE_TYPES.contains(&t.as_str()))
}

/// Name-derived score from the additive groups, without any rating bonus.
/// Used directly by the offline catalog path.
pub fn name_score(name: &str) -> i32 {
    SCORE_GROUPS
        .iter()
        .filter(|(substrings, _)| substrings.iter().any(|s| name.contains(s)))
        .map(|(_, score)| score)
        .sum()
}

/// Full candidate score: name groups plus `rating * 5` when present.
pub fn educational_score(candidate: &PlaceCandidate) -> f32 {
    let mut score = name_score(&candidate.name) as f32;
    if let Some(rating) = candidate.rating {
        score += rating * RATING_SCORE_MULTIPLIER;
    }
    score
}

/// Whether a candidate passes the inclusion rules. A high-value name marker
/// alone is sufficient; a preferred venue type additionally needs either a
/// marker or a rating at or above `min_rating`.
pub fn is_educational(candidate: &PlaceCandidate, min_rating: f32) -> bool {
    if has_excluded_type(candidate) {
        return false;
    }

    let marker = has_high_value_marker(&candidate.name);
    let preferred = has_preferred_type(candidate);
    let high_rating = candidate.rating.is_some_and(|r| r >= min_rating);

    (marker || preferred) && (marker || high_rating)
}

/// Filter one segment's raw candidates and pick the single best-scoring
/// survivor whose identity has not been used in a prior segment. Ties break
/// by list order — the earlier candidate wins.
pub fn select_best_candidate(
    candidates: Vec<PlaceCandidate>,
    used_ids: &HashSet<String>,
    min_rating: f32,
) -> Option<PlaceCandidate> {
    let mut best: Option<(f32, PlaceCandidate)> = None;

    for candidate in candidates {
        if used_ids.contains(&candidate.place_id) {
            continue;
        }
        if !is_educational(&candidate, min_rating) {
            continue;
        }

        let score = educational_score(&candidate);
        // Strict comparison keeps the first-seen candidate on equal scores.
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, candidate)),
        }
    }

    best.map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn candidate(name: &str, types: &[&str], rating: Option<f32>) -> PlaceCandidate {
        PlaceCandidate {
            place_id: format!("id-{}", name),
            name: name.to_string(),
            vicinity: None,
            coordinates: Coordinates::new(35.0, 139.0).unwrap(),
            types: types.iter().map(|t| t.to_string()).collect(),
            rating,
        }
    }

    #[test]
    fn test_excluded_types_never_pass() {
        // Historical keyword in the name does not rescue a commercial venue
        let c = candidate("城下町カフェ", &["cafe", "establishment"], Some(4.8));
        assert!(!is_educational(&c, 4.0));
    }

    #[test]
    fn test_marker_alone_is_sufficient() {
        let c = candidate("関ヶ原古戦場", &[], None);
        assert!(is_educational(&c, 4.0));
    }

    #[test]
    fn test_preferred_type_needs_rating_or_marker() {
        let low_rated = candidate("ふれあい広場", &["tourist_attraction"], Some(3.2));
        assert!(!is_educational(&low_rated, 4.0));

        let unrated = candidate("ふれあい広場", &["tourist_attraction"], None);
        assert!(!is_educational(&unrated, 4.0));

        let high_rated = candidate("ふれあい広場", &["tourist_attraction"], Some(4.3));
        assert!(is_educational(&high_rated, 4.0));

        let marked = candidate("宿場の資料館", &["museum"], None);
        assert!(is_educational(&marked, 4.0));
    }

    #[test]
    fn test_score_is_additive_over_groups() {
        // 史跡 (+80) and 城 (+70), no rating
        let c = candidate("小田原城跡 国指定史跡", &[], None);
        assert_eq!(educational_score(&c), 150.0);

        // Adding 国宝 (+100) raises the score - monotonic in matched groups
        let richer = candidate("小田原城跡 国指定史跡 国宝", &[], None);
        assert_eq!(educational_score(&richer), 250.0);

        // Rating contributes rating * 5 on top
        let rated = candidate("小田原城跡 国指定史跡", &[], Some(4.0));
        assert_eq!(educational_score(&rated), 170.0);
    }

    #[test]
    fn test_marker_name_outscores_rating_only() {
        let marked = candidate("姫路城", &["tourist_attraction"], None);
        let rated = candidate("展望タワー", &["tourist_attraction"], Some(5.0));
        assert!(educational_score(&marked) > educational_score(&rated));
    }

    #[test]
    fn test_select_best_prefers_highest_score() {
        let used = HashSet::new();
        let winner = select_best_candidate(
            vec![
                candidate("八幡神社", &[], Some(4.2)),
                candidate("名城 天守 国宝", &[], Some(4.2)),
            ],
            &used,
            4.0,
        )
        .unwrap();
        assert_eq!(winner.name, "名城 天守 国宝");
    }

    #[test]
    fn test_select_best_tie_breaks_by_list_order() {
        let used = HashSet::new();
        let winner = select_best_candidate(
            vec![
                candidate("一の宮神社", &[], Some(4.1)),
                candidate("二の宮神社", &[], Some(4.1)),
            ],
            &used,
            4.0,
        )
        .unwrap();
        assert_eq!(winner.name, "一の宮神社");
    }

    #[test]
    fn test_select_best_skips_used_identities() {
        let mut used = HashSet::new();
        used.insert("id-鶴岡八幡宮".to_string());

        let winner = select_best_candidate(
            vec![
                candidate("鶴岡八幡宮", &[], Some(4.6)),
                candidate("荏柄天神社", &[], Some(4.2)),
            ],
            &used,
            4.0,
        )
        .unwrap();
        assert_eq!(winner.name, "荏柄天神社");
    }

    #[test]
    fn test_select_best_returns_none_when_nothing_qualifies() {
        let used = HashSet::new();
        let result = select_best_candidate(
            vec![candidate("ドライブイン", &["restaurant"], Some(4.9))],
            &used,
            4.0,
        );
        assert!(result.is_none());
    }
}
