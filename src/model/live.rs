use serde::{Deserialize, Serialize};

use crate::model::cricket_match::Match;
use crate::model::innings::Innings;
use crate::model::overs::Overs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentaryKind {
    Wicket,
    Four,
    Six,
    Milestone,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryEntry {
    pub over: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommentaryKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBatter {
    pub player_id: String,
    /// Resolved from the players table during aggregation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
    #[serde(default)]
    pub on_strike: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBowler {
    pub player_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub overs: Overs,
    #[serde(default)]
    pub maidens: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
}

/// Per-match live record: commentary (newest first) and who is at the crease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveState {
    pub match_id: String,
    #[serde(default)]
    pub commentary: Vec<CommentaryEntry>,
    #[serde(default)]
    pub current_batsmen: Vec<CurrentBatter>,
    #[serde(default)]
    pub current_bowler: Option<CurrentBowler>,
}

/// A match joined with whatever live data exists for it.
///
/// The base match is flattened so its fields keep their names and values in
/// JSON. Every other section is optional and left out entirely when the
/// fixtures or the API have nothing for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveView {
    #[serde(flatten)]
    pub base: Match,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innings: Option<Vec<Innings>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<Vec<CommentaryEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_batsmen: Option<Vec<CurrentBatter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bowler: Option<CurrentBowler>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_balls: Option<Vec<String>>,
}

impl From<Match> for LiveView {
    fn from(base: Match) -> Self {
        LiveView {
            base,
            innings: None,
            commentary: None,
            current_batsmen: None,
            current_bowler: None,
            recent_balls: None,
        }
    }
}

impl LiveView {
    /// True when nothing beyond the base match was attached.
    pub fn is_bare(&self) -> bool {
        self.innings.is_none()
            && self.commentary.is_none()
            && self.current_batsmen.is_none()
            && self.current_bowler.is_none()
            && self.recent_balls.is_none()
    }
}
