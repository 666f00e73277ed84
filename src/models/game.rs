//! Match, match references and the two player slots of a match.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two player positions of a match. Also the side of a player in a draft.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Slot {
    #[default]
    One,
    Two,
}

impl Slot {
    /// The opposing slot.
    pub fn other(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }

    /// Slot fed by the match at `index` of the previous round (even -> One, odd -> Two).
    pub fn from_parity(index: usize) -> Self {
        if index % 2 == 0 {
            Slot::One
        } else {
            Slot::Two
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::One => 1,
            Slot::Two => 2,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Slot::One),
            2 => Ok(Slot::Two),
            other => Err(format!("slot must be 1 or 2, got {other}")),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Coordinate of a match: 0-based round and 0-based position within the round.
///
/// Persisted as `"<round>-<index>"`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MatchRef {
    pub round: usize,
    pub index: usize,
}

impl MatchRef {
    pub fn new(round: usize, index: usize) -> Self {
        Self { round, index }
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.round, self.index)
    }
}

/// Error parsing a persisted match reference.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid match reference {0:?}, expected \"<round>-<match>\"")]
pub struct ParseMatchRefError(String);

impl FromStr for MatchRef {
    type Err = ParseMatchRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMatchRefError(s.to_string());
        let (round, index) = s.split_once('-').ok_or_else(err)?;
        Ok(Self {
            round: round.parse().map_err(|_| err())?,
            index: index.parse().map_err(|_| err())?,
        })
    }
}

impl From<MatchRef> for String {
    fn from(r: MatchRef) -> Self {
        r.to_string()
    }
}

impl TryFrom<String> for MatchRef {
    type Error = ParseMatchRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where the winner (or loser) of a match goes next.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Advance {
    #[serde(rename = "match")]
    pub to: MatchRef,
    pub slot: Slot,
}

/// Lifecycle of a single match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    #[default]
    SetUp,
    BanPick,
    Playing,
    Finished,
}

/// A bracket match. Slots are empty ("TBD") until a preceding match decides them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub players: [Option<Player>; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_match: Option<Advance>,
    /// Double elimination only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_match: Option<Advance>,
    pub status: MatchStatus,
    /// None until the match is finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Slot>,
}

impl Match {
    pub fn new(players: [Option<Player>; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            players,
            win_match: None,
            loss_match: None,
            status: MatchStatus::SetUp,
            winner: None,
        }
    }

    pub fn player(&self, slot: Slot) -> Option<&Player> {
        self.players[slot.index()].as_ref()
    }

    /// Both slots are filled.
    pub fn is_ready(&self) -> bool {
        self.players.iter().all(Option::is_some)
    }

    pub fn winning_player(&self) -> Option<&Player> {
        self.winner.and_then(|w| self.player(w))
    }
}
