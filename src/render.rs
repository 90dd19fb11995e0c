//! Plain-text presentation of matches and live views.
//!
//! Missing data is shown as a placeholder (`0`, `N/A`, `TBA`) and never
//! treated as an error here.

use chrono_tz::Tz;
use serde_json::Value;

use crate::fallback::{safe_access_or, with_fallback, with_fallback_opt};
use crate::model::{CommentaryKind, Innings, LiveView, Match, MatchSide, MatchStatus};
use crate::poller::{RenderState, ViewState};

pub const NOT_AVAILABLE: &str = "N/A";
pub const TO_BE_ANNOUNCED: &str = "TBA";
pub const GENERIC_ERROR: &str = "Unable to load match data. Retrying on the next update.";

fn side_line(side: &MatchSide, status: MatchStatus) -> String {
    let score = match (&side.score, status) {
        (Some(score), _) if !score.is_empty() => score.clone(),
        (_, MatchStatus::Upcoming) => TO_BE_ANNOUNCED.to_string(),
        _ => "0".to_string(),
    };
    let overs = side.overs.map(|o| o.to_string()).unwrap_or_else(|| "0".to_string());
    format!("{:<20} {:>8} ({} ov)", with_fallback(side.name.as_str(), TO_BE_ANNOUNCED), score, overs)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn match_card_lines(m: &Match, tz: Tz) -> Vec<String> {
    let local = m.start_time.with_timezone(&tz);
    let mut lines = vec![
        format!("{} [{}] {}", m.title, m.format, m.status.label()),
        with_fallback(m.venue.as_str(), TO_BE_ANNOUNCED).to_string(),
        local.format("%a %b %e, %Y %-I:%M %p %Z").to_string(),
        side_line(&m.home, m.status),
        side_line(&m.away, m.status),
    ];
    if let Some(toss) = m.toss.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Toss: {toss}"));
    }
    if let Some(result) = m.result.as_deref().filter(|r| !r.is_empty()) {
        lines.push(format!("Result: {result}"));
    }
    lines
}

/// Header card: title, format, status, venue, local start time and both sides.
pub fn render_match_card(m: &Match, tz: Tz) -> String {
    finish(match_card_lines(m, tz))
}

fn rate(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn scorecard_lines(innings: &Innings) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Innings {} - {} {} ({} ov)",
            innings.number,
            innings.team_id.to_uppercase(),
            innings.score_line(),
            innings.overs
        ),
        format!("{:<24} {:<28} {:>4} {:>4} {:>3} {:>3} {:>7}", "Batter", "", "R", "B", "4s", "6s", "SR"),
    ];
    lines.extend(innings.batting.iter().map(|b| {
        format!(
            "{:<24} {:<28} {:>4} {:>4} {:>3} {:>3} {:>7}",
            b.name,
            b.dismissal.as_deref().unwrap_or("not out"),
            b.runs,
            b.balls,
            b.fours,
            b.sixes,
            rate(b.strike_rate())
        )
    }));

    let e = &innings.extras;
    lines.push(format!(
        "Extras {} (b {}, lb {}, w {}, nb {}, p {})",
        e.total(),
        e.byes,
        e.leg_byes,
        e.wides,
        e.no_balls,
        e.penalty
    ));
    lines.push(format!("Total {} ({} ov)", innings.score_line(), innings.overs));

    lines.push(format!("{:<24} {:>5} {:>3} {:>4} {:>3} {:>6}", "Bowler", "O", "M", "R", "W", "Econ"));
    lines.extend(innings.bowling.iter().map(|b| {
        format!(
            "{:<24} {:>5} {:>3} {:>4} {:>3} {:>6}",
            b.name,
            b.overs.to_string(),
            b.maidens,
            b.runs,
            b.wickets,
            rate(b.economy())
        )
    }));
    lines
}

/// Batting and bowling tables for one innings.
pub fn render_scorecard(innings: &Innings) -> String {
    finish(scorecard_lines(innings))
}

/// The full live page: card, crease, recent balls, commentary, scorecards.
pub fn render_live_view(view: &LiveView, tz: Tz) -> String {
    let mut lines = match_card_lines(&view.base, tz);

    if view.base.status == MatchStatus::Live {
        lines.push(String::new());
        lines.push("At the crease".to_string());
        let batsmen = with_fallback_opt(view.current_batsmen.clone(), Vec::new());
        if batsmen.is_empty() {
            lines.push(format!("  {TO_BE_ANNOUNCED}"));
        }
        lines.extend(batsmen.iter().map(|b| {
            format!(
                "  {}{} {} ({})",
                b.name.as_deref().unwrap_or(TO_BE_ANNOUNCED),
                if b.on_strike { "*" } else { "" },
                b.runs,
                b.balls
            )
        }));
        lines.push(match &view.current_bowler {
            Some(b) => format!(
                "  Bowling: {} {}-{}-{}-{}",
                b.name.as_deref().unwrap_or(TO_BE_ANNOUNCED),
                b.overs,
                b.maidens,
                b.runs,
                b.wickets
            ),
            None => format!("  Bowling: {TO_BE_ANNOUNCED}"),
        });
    }

    if let Some(recent) = view.recent_balls.as_ref().filter(|r| !r.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Recent: {}", recent.join(" ")));
    }

    lines.push(String::new());
    lines.push("Commentary".to_string());
    let commentary = with_fallback_opt(view.commentary.clone(), Vec::new());
    if commentary.is_empty() {
        lines.push("  No commentary yet".to_string());
    }
    lines.extend(commentary.iter().map(|c| {
        let tag = match c.kind {
            Some(CommentaryKind::Wicket) => "[W] ",
            Some(CommentaryKind::Four) => "[4] ",
            Some(CommentaryKind::Six) => "[6] ",
            _ => "",
        };
        format!("  {:>5}  {}{}", with_fallback(c.over.as_str(), NOT_AVAILABLE), tag, c.text)
    }));

    for inn in view.innings.iter().flatten() {
        lines.push(String::new());
        lines.extend(scorecard_lines(inn));
    }
    finish(lines)
}

/// One-line summary read straight from JSON, whatever fields it happens to have.
pub fn render_ticker(value: &Value) -> String {
    let title: String = safe_access_or(value, "title", TO_BE_ANNOUNCED.to_string());
    let home: String = safe_access_or(value, "home.name", TO_BE_ANNOUNCED.to_string());
    let home_score: String = safe_access_or(value, "home.score", "0".to_string());
    let away: String = safe_access_or(value, "away.name", TO_BE_ANNOUNCED.to_string());
    let away_score: String = safe_access_or(value, "away.score", "0".to_string());
    let bowler: String = safe_access_or(value, "currentBowler.name", NOT_AVAILABLE.to_string());
    let last: String = safe_access_or(value, "commentary.0.text", NOT_AVAILABLE.to_string());
    format!("{title} | {home} {home_score} v {away} {away_score} | bowling: {bowler} | {last}")
}

/// Whatever the poller currently holds.
pub fn render_state(state: &RenderState, tz: Tz) -> String {
    match state.view() {
        ViewState::Loading => "Loading match data...".to_string(),
        ViewState::NotFound(id) => format!("Match {id} not found"),
        ViewState::Failed(_) => GENERIC_ERROR.to_string(),
        ViewState::Ready(view) => render_live_view(view, tz),
    }
}
