use statdesk_core::ranking::{is_trusted, source_priority};

#[test]
fn official_league_domains_score_highest() {
    for url in [
        "https://www.nba.com/stats/players",
        "https://www.basketball-reference.com/players/c/curryst01.html",
        "https://www.nfl.com/stats",
        "https://www.mlb.com/stats",
        "https://www.nhl.com/stats",
    ] {
        assert_eq!(source_priority(url), 100, "url={url}");
    }
}

#[test]
fn major_sports_media_scores_80() {
    assert_eq!(source_priority("https://www.espn.com/nba/story"), 80);
    assert_eq!(source_priority("https://www.si.com/nba"), 80);
    assert_eq!(source_priority("https://www.cbssports.com/nba/news"), 80);
}

#[test]
fn reliable_sports_sources_score_60() {
    assert_eq!(source_priority("https://bleacherreport.com/articles/1"), 60);
    assert_eq!(source_priority("https://sports.yahoo.com/nba"), 60);
    assert_eq!(source_priority("https://www.reuters.com/sports"), 60);
}

#[test]
fn general_news_scores_40() {
    assert_eq!(source_priority("https://www.cnn.com/sport"), 40);
    assert_eq!(source_priority("https://www.bbc.com/sport"), 40);
    assert_eq!(source_priority("https://www.usatoday.com/sports"), 40);
}

#[test]
fn denylisted_domains_score_zero() {
    for url in [
        "https://www.reddit.com/r/nbadiscussion",
        "https://twitter.com/hoops",
        "https://www.facebook.com/groups/stats",
        "https://hoopsblog.example.com/post",
        "https://forum.example.net/thread/42",
    ] {
        assert_eq!(source_priority(url), 0, "url={url}");
        assert!(!is_trusted(url), "url={url}");
    }
}

#[test]
fn unknown_domains_get_default_low_trust() {
    assert_eq!(source_priority("https://example.org/page"), 20);
    assert!(is_trusted("https://example.org/page"));
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(source_priority("HTTPS://WWW.NBA.COM/STATS"), 100);
    assert_eq!(source_priority("HTTPS://REDDIT.COM/R/NBA"), 0);
}

#[test]
fn scoring_is_deterministic() {
    let url = "https://www.espn.com/nba/story";
    assert_eq!(source_priority(url), source_priority(url));
}
