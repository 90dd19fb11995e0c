pub mod ball;
pub mod cricket_match;
pub mod innings;
pub mod live;
pub mod overs;
pub mod player;
pub mod team;

pub use ball::{Ball, BallNumber, DismissalKind, ExtraKind};
pub use cricket_match::{Match, MatchSide, MatchStatus};
pub use innings::{BattingEntry, BowlingEntry, Extras, Innings};
pub use live::{CommentaryEntry, CommentaryKind, CurrentBatter, CurrentBowler, LiveState, LiveView};
pub use overs::Overs;
pub use player::{Player, PlayerRole};
pub use team::Team;
