use tracing::{debug, instrument};

use crate::fixtures::FixtureStore;
use crate::model::{CurrentBatter, CurrentBowler, LiveView, MatchStatus};

/// Most recent commentary entries attached to a view.
pub const COMMENTARY_LIMIT: usize = 10;
/// Length of the recent-balls strip.
pub const RECENT_BALLS: usize = 6;

/// Join a match with its innings, live record and ball history.
///
/// Returns `None` only when the match itself is unknown. Anything else that is
/// missing leaves the matching section empty and the base match untouched, so
/// a match with no innings and no live record comes back as just the match.
#[instrument(level = "debug", skip(store))]
pub fn assemble_live_view(store: &FixtureStore, match_id: &str) -> Option<LiveView> {
    let base = store.match_by_id(match_id)?;
    let completed = base.status == MatchStatus::Completed;
    let mut view = LiveView::from(base.clone());

    let innings = store.innings_for_match(match_id);
    if !innings.is_empty() {
        // Latest innings with ball records feeds the recent-balls strip
        let recent: Option<Vec<String>> = innings.iter().rev().find_map(|inn| {
            let balls: Vec<String> = store.balls_for_innings(&inn.id).map(|b| b.outcome()).collect();
            (!balls.is_empty()).then(|| {
                let start = balls.len().saturating_sub(RECENT_BALLS);
                balls[start..].to_vec()
            })
        });
        view.recent_balls = recent;
        view.innings = Some(innings.into_iter().cloned().collect());
    }

    if let Some(live) = store.live_state(match_id) {
        if !live.commentary.is_empty() {
            view.commentary = Some(live.commentary.iter().take(COMMENTARY_LIMIT).cloned().collect());
        }

        if completed {
            debug!(match_id, "Dropping crease snapshot for completed match");
        } else {
            if !live.current_batsmen.is_empty() {
                view.current_batsmen = Some(
                    live.current_batsmen
                        .iter()
                        .map(|b| resolve_batter(store, b))
                        .collect(),
                );
            }
            view.current_bowler = live.current_bowler.as_ref().map(|b| resolve_bowler(store, b));
        }
    }

    Some(view)
}

/// Live views for every match in the store, in fixture order.
pub fn assemble_all(store: &FixtureStore) -> Vec<LiveView> {
    store
        .matches()
        .iter()
        .filter_map(|m| assemble_live_view(store, &m.id))
        .collect()
}

fn resolve_batter(store: &FixtureStore, batter: &CurrentBatter) -> CurrentBatter {
    let mut out = batter.clone();
    if let Some(player) = store.player(&batter.player_id) {
        out.name = Some(player.name.clone());
    }
    out
}

fn resolve_bowler(store: &FixtureStore, bowler: &CurrentBowler) -> CurrentBowler {
    let mut out = bowler.clone();
    if let Some(player) = store.player(&bowler.player_id) {
        out.name = Some(player.name.clone());
    }
    out
}
