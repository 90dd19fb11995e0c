use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::error::{Error, Result};
use crate::model::{Ball, BallNumber, Innings, LiveState, Match, Player, Team};

const EMBEDDED_FIXTURES: &str = include_str!("../data/fixtures.json");

// Parsed on first access. The parse error is kept as text because
// `serde_json::Error` cannot be cloned out of a shared static.
static EMBEDDED: LazyLock<std::result::Result<FixtureStore, String>> =
    LazyLock::new(|| FixtureStore::from_json(EMBEDDED_FIXTURES).map_err(|e| e.to_string()));

/// Constant tables of reference and match data.
///
/// Built once and only ever handed out by shared reference, so there is no
/// write path once the document has been accepted.
#[derive(Debug, Deserialize)]
pub struct FixtureStore {
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    players: Vec<Player>,
    #[serde(default)]
    matches: Vec<Match>,
    #[serde(default)]
    innings: Vec<Innings>,
    #[serde(default)]
    balls: Vec<Ball>,
    #[serde(default)]
    live: Vec<LiveState>,
}

impl FixtureStore {
    /// The fixture set compiled into the binary.
    pub fn embedded() -> Result<&'static FixtureStore> {
        EMBEDDED.as_ref().map_err(|e| Error::Fixture(e.clone()))
    }

    /// Parse and check a fixture document (no embedding).
    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    pub fn from_json(body: &str) -> Result<Self> {
        let store: FixtureStore = serde_json::from_str(body).map_err(|source| Error::Decode {
            what: "fixture document".to_string(),
            source,
        })?;
        let violations = store.violations();
        if !violations.is_empty() {
            for v in &violations {
                warn!(violation = %v, "Fixture invariant violated");
            }
            return Err(Error::Fixture(violations.join("; ")));
        }
        info!(
            teams = store.teams.len(),
            players = store.players.len(),
            matches = store.matches.len(),
            innings = store.innings.len(),
            balls = store.balls.len(),
            "Loaded fixture store"
        );
        Ok(store)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn players_for_team<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a Player> + 'a {
        self.players.iter().filter(move |p| p.team_id == team_id)
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_by_id(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Innings of a match in batting order.
    pub fn innings_for_match(&self, match_id: &str) -> Vec<&Innings> {
        let mut innings: Vec<&Innings> = self.innings.iter().filter(|i| i.match_id == match_id).collect();
        innings.sort_by_key(|i| i.number);
        innings
    }

    /// Deliveries of an innings in the order they were bowled.
    pub fn balls_for_innings<'a>(&'a self, innings_id: &'a str) -> impl Iterator<Item = &'a Ball> + 'a {
        self.balls.iter().filter(move |b| b.innings_id == innings_id)
    }

    pub fn live_state(&self, match_id: &str) -> Option<&LiveState> {
        self.live.iter().find(|l| l.match_id == match_id)
    }

    /// Every broken reference or ordering rule in the document.
    fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();

        for p in &self.players {
            if self.team(&p.team_id).is_none() {
                out.push(format!("player {} references unknown team {}", p.id, p.team_id));
            }
        }

        for inn in &self.innings {
            let Some(m) = self.match_by_id(&inn.match_id) else {
                out.push(format!("innings {} references unknown match {}", inn.id, inn.match_id));
                continue;
            };
            let Some(opponent) = m.opponent_of(&inn.team_id) else {
                out.push(format!("innings {} is batted by {}, which is not playing in {}", inn.id, inn.team_id, m.id));
                continue;
            };
            for entry in &inn.batting {
                if self.player(&entry.player_id).is_some_and(|p| p.team_id != inn.team_id) {
                    out.push(format!("innings {} lists {} as a batter for the wrong side", inn.id, entry.player_id));
                }
            }
            for entry in &inn.bowling {
                if self.player(&entry.player_id).is_some_and(|p| p.team_id != opponent.team_id) {
                    out.push(format!("innings {} lists {} as a bowler for the wrong side", inn.id, entry.player_id));
                }
            }
        }

        let mut last_ball: HashMap<&str, BallNumber> = HashMap::new();
        for ball in &self.balls {
            if let Some(prev) = last_ball.insert(&ball.innings_id, ball.number) {
                if ball.number < prev {
                    out.push(format!("ball {} in innings {} comes after {}", ball.number, ball.innings_id, prev));
                }
            }
        }

        for live in &self.live {
            if self.match_by_id(&live.match_id).is_none() {
                out.push(format!("live record references unknown match {}", live.match_id));
            }
        }

        out
    }
}
