use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const BALLS_PER_OVER: u32 = 6;

/// Overs in cricket notation: `41.2` is 41 completed overs and 2 legal balls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Overs {
    pub completed: u32,
    pub balls: u8,
}

impl Overs {
    pub fn new(completed: u32, balls: u8) -> Option<Self> {
        (u32::from(balls) < BALLS_PER_OVER).then_some(Self { completed, balls })
    }

    /// Total legal deliveries.
    pub fn total_balls(&self) -> u32 {
        self.completed * BALLS_PER_OVER + u32::from(self.balls)
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.balls == 0 {
            write!(f, "{}", self.completed)
        } else {
            write!(f, "{}.{}", self.completed, self.balls)
        }
    }
}

impl FromStr for Overs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, part) = s.split_once('.').unwrap_or((s, "0"));
        let completed = whole
            .parse::<u32>()
            .map_err(|e| format!("invalid overs {s:?}: {e}"))?;
        let balls = part
            .parse::<u8>()
            .map_err(|e| format!("invalid overs {s:?}: {e}"))?;
        Overs::new(completed, balls).ok_or_else(|| format!("invalid overs {s:?}: at most 5 balls past the over"))
    }
}

impl Serialize for Overs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Overs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // APIs send overs either as "41.2" or as the float 41.2
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Whole(u32),
            Number(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Raw::Whole(n) => Ok(Overs { completed: n, balls: 0 }),
            Raw::Number(n) => format!("{n:.1}").parse().map_err(serde::de::Error::custom),
        }
    }
}
