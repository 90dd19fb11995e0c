use serde::{Deserialize, Serialize};

use crate::model::overs::{BALLS_PER_OVER, Overs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extras {
    pub byes: u32,
    pub leg_byes: u32,
    pub wides: u32,
    pub no_balls: u32,
    pub penalty: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.byes + self.leg_byes + self.wides + self.no_balls + self.penalty
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingEntry {
    pub player_id: String,
    pub name: String,
    /// `None` while the batter is not out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<String>,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
}

impl BattingEntry {
    pub fn strike_rate(&self) -> Option<f64> {
        (self.balls > 0).then(|| f64::from(self.runs) * 100.0 / f64::from(self.balls))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingEntry {
    pub player_id: String,
    pub name: String,
    #[serde(default)]
    pub overs: Overs,
    #[serde(default)]
    pub maidens: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
}

impl BowlingEntry {
    /// Runs conceded per six legal balls.
    pub fn economy(&self) -> Option<f64> {
        let balls = self.overs.total_balls();
        (balls > 0).then(|| f64::from(self.runs) * f64::from(BALLS_PER_OVER) / f64::from(balls))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    pub id: String,
    pub match_id: String,
    pub number: u8,
    pub team_id: String,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u8,
    #[serde(default)]
    pub overs: Overs,
    #[serde(default)]
    pub batting: Vec<BattingEntry>,
    #[serde(default)]
    pub bowling: Vec<BowlingEntry>,
    #[serde(default)]
    pub extras: Extras,
}

impl Innings {
    /// Score in the usual `runs/wickets` form; all out is written without wickets.
    pub fn score_line(&self) -> String {
        if self.wickets >= 10 {
            self.runs.to_string()
        } else {
            format!("{}/{}", self.runs, self.wickets)
        }
    }
}
