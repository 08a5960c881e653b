//! Source-reliability scoring for search result URLs.
//!
//! Matching is substring containment on the lowercased URL against fixed
//! domain lists; the first matching tier wins. Trusted tiers are checked
//! before the denylist, so a URL matching both keeps its tier.

/// Official league and statistics sites.
const TIER_OFFICIAL: &[&str] = &[
    "nba.com",
    "basketball-reference.com",
    "nfl.com",
    "mlb.com",
    "nhl.com",
];

/// Major sports media.
const TIER_MAJOR_MEDIA: &[&str] = &["espn.com", "si.com", "cbssports.com"];

/// Other reliable sports sources.
const TIER_RELIABLE: &[&str] = &[
    "bleacherreport.com",
    "sports.yahoo.com",
    "theatlantic.com",
    "reuters.com",
];

/// General news outlets with sports sections.
const TIER_GENERAL_NEWS: &[&str] = &["cnn.com", "bbc.com", "usatoday.com"];

/// Social, forum and blog domains excluded from trusted results.
const DENYLIST: &[&str] = &["reddit.com", "twitter.com", "facebook.com", "blog", "forum"];

/// Score a URL's reliability as a sports-statistics source.
///
/// Returns one of {0, 20, 40, 60, 80, 100}; 0 means untrusted.
pub fn source_priority(url: &str) -> i64 {
    let domain = url.to_lowercase();
    let matches = |list: &[&str]| list.iter().any(|d| domain.contains(d));

    if matches(TIER_OFFICIAL) {
        return 100;
    }
    if matches(TIER_MAJOR_MEDIA) {
        return 80;
    }
    if matches(TIER_RELIABLE) {
        return 60;
    }
    if matches(TIER_GENERAL_NEWS) {
        return 40;
    }
    if matches(DENYLIST) {
        return 0;
    }

    // Unknown domain: low but nonzero trust.
    20
}

/// A result is admissible as trusted evidence when its priority is positive.
pub fn is_trusted(url: &str) -> bool {
    source_priority(url) > 0
}
