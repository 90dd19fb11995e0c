use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use cricket_live::aggregator::assemble_live_view;
use cricket_live::fixtures::FixtureStore;
use cricket_live::model::{LiveView, Match, MatchSide, MatchStatus};
use cricket_live::poller::{FetchResult, RenderState};
use cricket_live::render::{self, GENERIC_ERROR};
use cricket_live::Error;

fn store() -> &'static FixtureStore {
    FixtureStore::embedded().expect("embedded fixtures")
}

fn bare_match() -> Match {
    Match {
        id: "tba-match".into(),
        title: "Qualifier 1".into(),
        format: "T20I".into(),
        status: MatchStatus::Upcoming,
        venue: String::new(),
        start_time: Utc.with_ymd_and_hms(2026, 11, 2, 13, 30, 0).unwrap(),
        home: MatchSide { team_id: "x".into(), name: String::new(), score: None, overs: None },
        away: MatchSide { team_id: "y".into(), name: "Nepal".into(), score: None, overs: None },
        toss: None,
        result: None,
    }
}

#[test]
fn card_uses_placeholders_for_missing_fields() {
    let card = render::render_match_card(&bare_match(), Tz::UTC);
    assert!(card.contains("Qualifier 1 [T20I] Upcoming"), "card was: {card}");
    assert!(card.lines().nth(1) == Some("TBA"), "card was: {card}");
    assert!(card.contains("Nepal"), "card was: {card}");
    assert!(card.contains("TBA (0 ov)"), "card was: {card}");
    assert!(!card.contains("Toss:"), "card was: {card}");
}

#[test]
fn card_shows_start_in_display_time_zone() {
    let m = store().match_by_id("ind-aus").unwrap();
    let card = render::render_match_card(m, chrono_tz::Asia::Kolkata);
    // 13:30 UTC is 19:00 in India
    assert!(card.contains("Mon Nov  2, 2026 7:00 PM IST"), "card was: {card}");
}

#[test]
fn live_view_shows_crease_recent_and_commentary() {
    let view = assemble_live_view(store(), "zim-durham").unwrap();
    let page = render::render_live_view(&view, Tz::UTC);
    assert!(page.contains("David Bedingham* 42 (37)"), "page was: {page}");
    assert!(page.contains("Bowling: Blessing Muzarabani 11.2-3-38-2"), "page was: {page}");
    assert!(page.contains("Recent: 4 0 2 1 0 4"), "page was: {page}");
    assert!(page.contains("[4] Muzarabani to Bedingham, FOUR"), "page was: {page}");
    assert!(page.contains("Innings 2 - DUR 156/3 (41.2 ov)"), "page was: {page}");
    assert!(page.contains("Extras 20 (b 4, lb 6, w 7, nb 3, p 0)"), "page was: {page}");
}

#[test]
fn scorecard_marks_not_out_and_missing_rates() {
    let store = store();
    let mut innings = store.innings_for_match("zim-durham")[1].clone();
    innings.batting[0].balls = 0;
    let card = render::render_scorecard(&innings);
    let lees = card.lines().find(|l| l.starts_with("Alex Lees")).unwrap();
    assert!(lees.contains("not out"), "line was: {lees}");
    assert!(lees.trim_end().ends_with("N/A"), "line was: {lees}");
    assert!(card.contains("Total 156/3 (41.2 ov)"), "card was: {card}");
}

#[test]
fn all_out_total_has_no_wicket_count() {
    let innings = store().innings_for_match("zim-durham")[0].clone();
    let card = render::render_scorecard(&innings);
    assert!(card.contains("Total 292 (88.3 ov)"), "card was: {card}");
}

#[test]
fn empty_sections_get_placeholders() {
    let mut m = bare_match();
    m.status = MatchStatus::Live;
    let page = render::render_live_view(&LiveView::from(m), Tz::UTC);
    assert!(page.contains("At the crease\n  TBA"), "page was: {page}");
    assert!(page.contains("Bowling: TBA"), "page was: {page}");
    assert!(page.contains("No commentary yet"), "page was: {page}");
}

#[test]
fn ticker_reads_whatever_is_present() {
    let view = assemble_live_view(store(), "zim-durham").unwrap();
    let ticker = render::render_ticker(&serde_json::to_value(&view).unwrap());
    assert!(ticker.contains("Durham 156/3 v Zimbabwe 292"), "ticker was: {ticker}");
    assert!(ticker.contains("bowling: Blessing Muzarabani"), "ticker was: {ticker}");

    let sparse = render::render_ticker(&serde_json::json!({"title": "Final"}));
    assert_eq!(sparse, "Final | TBA 0 v TBA 0 | bowling: N/A | N/A");
}

#[test]
fn state_rendering_covers_every_outcome() {
    let mut state = RenderState::new();
    assert_eq!(render::render_state(&state, Tz::UTC), "Loading match data...");

    state.apply(FetchResult { generation: 1, outcome: Ok(None) }, "ned-sco");
    assert_eq!(render::render_state(&state, Tz::UTC), "Match ned-sco not found");

    state.apply(
        FetchResult { generation: 2, outcome: Err(Error::Status { url: "u".into(), status: 503 }) },
        "ned-sco",
    );
    assert_eq!(render::render_state(&state, Tz::UTC), GENERIC_ERROR);
}

#[test]
fn sections_are_separated_by_blank_lines() {
    let card = render::render_match_card(&bare_match(), Tz::UTC);
    assert_eq!(card.lines().count(), 5, "card was: {card}");
    assert!(card.ends_with("(0 ov)\n"), "card was: {card}");

    let view = assemble_live_view(store(), "zim-durham").unwrap();
    let page = render::render_live_view(&view, Tz::UTC);
    assert!(page.contains("\n\nAt the crease\n  "), "page was: {page}");
    assert!(page.contains("\n\nRecent: "), "page was: {page}");
    assert!(page.contains("\n\nCommentary\n  "), "page was: {page}");
    assert!(page.contains("\n\nInnings 2 - DUR"), "page was: {page}");
    assert!(page.ends_with('\n') && !page.ends_with("\n\n"), "page was: {page}");
}
