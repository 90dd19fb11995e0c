use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::overs::Overs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[serde(alias = "in-progress")]
    Live,
    Upcoming,
    Completed,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Live => "LIVE",
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Completed => "Completed",
        }
    }
}

/// One of the two teams in a match, with its transient score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    pub team_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overs: Option<Overs>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub title: String,
    pub format: String,
    pub status: MatchStatus,
    #[serde(default)]
    pub venue: String,
    pub start_time: DateTime<Utc>,
    pub home: MatchSide,
    pub away: MatchSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Match {
    /// The side that is not `team_id`, if `team_id` plays in this match.
    pub fn opponent_of(&self, team_id: &str) -> Option<&MatchSide> {
        if self.home.team_id == team_id {
            Some(&self.away)
        } else if self.away.team_id == team_id {
            Some(&self.home)
        } else {
            None
        }
    }
}
