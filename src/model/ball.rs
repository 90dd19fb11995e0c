use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a delivery within an innings, `over.ball`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BallNumber {
    pub over: u32,
    pub ball: u8,
}

impl fmt::Display for BallNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.over, self.ball)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExtraKind::Wide => "wd",
            ExtraKind::NoBall => "nb",
            ExtraKind::Bye => "b",
            ExtraKind::LegBye => "lb",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ball {
    pub innings_id: String,
    pub number: BallNumber,
    pub batsman_id: String,
    pub bowler_id: String,
    #[serde(default)]
    pub runs: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraKind>,
    /// Present exactly when a wicket fell on this delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<DismissalKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl Ball {
    pub fn is_wicket(&self) -> bool {
        self.dismissal.is_some()
    }

    /// Short code for a recent-balls strip: `W`, `4`, `1wd`, `0`.
    pub fn outcome(&self) -> String {
        if self.is_wicket() {
            return "W".to_string();
        }
        match self.extra {
            Some(kind) => format!("{}{}", self.runs, kind.code()),
            None => self.runs.to_string(),
        }
    }
}
