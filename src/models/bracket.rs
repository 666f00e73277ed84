//! Rounds, brackets and bracket formats.

use crate::models::game::{Match, MatchRef, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from bracket generation and result recording.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BracketError {
    #[error("At least 2 players are required (got {0})")]
    NotEnoughPlayers(usize),
    #[error("Unsupported bracket format {0:?}")]
    UnsupportedFormat(String),
    #[error("No match at {0}")]
    MatchNotFound(MatchRef),
    /// One or both slots are still TBD.
    #[error("Match {0} does not have two players yet")]
    MatchNotReady(MatchRef),
    #[error("Match {0} is already finished")]
    MatchFinished(MatchRef),
    /// An advancement link points at a slot that is already taken.
    #[error("Slot {slot} of match {at} is already occupied")]
    SlotOccupied { at: MatchRef, slot: Slot },
}

/// Elimination format of a bracket.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketFormat {
    #[default]
    Single,
    Double,
}

impl FromStr for BracketFormat {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_elimination" | "single-elimination" => Ok(BracketFormat::Single),
            "double" | "double_elimination" | "double-elimination" => Ok(BracketFormat::Double),
            _ => Err(BracketError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for BracketFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketFormat::Single => write!(f, "single"),
            BracketFormat::Double => write!(f, "double"),
        }
    }
}

/// Matches of one round, indexed by position. Positions without a match are `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round {
    pub matches: Vec<Option<Match>>,
}

impl Round {
    pub fn get(&self, index: usize) -> Option<&Match> {
        self.matches.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Match> {
        self.matches.get_mut(index).and_then(Option::as_mut)
    }

    /// Width of the round, counting empty positions.
    pub fn width(&self) -> usize {
        self.matches.len()
    }

    /// True when the round holds no match at all.
    pub fn is_empty(&self) -> bool {
        self.matches.iter().all(Option::is_none)
    }

    /// Created matches with their position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Match)> {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_ref().map(|m| (i, m)))
    }
}

/// Winners and losers bracket rounds at the same depth of a double elimination bracket.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DoubleRound {
    pub winners_bracket: Round,
    pub losers_bracket: Round,
}

/// A generated bracket.
///
/// In a double elimination bracket, [`MatchRef::round`] uses one numbering for both sides:
/// winners rounds first (the grand final is the last of them), then losers rounds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "rounds", rename_all = "snake_case")]
pub enum Bracket {
    Single(Vec<Round>),
    Double(Vec<DoubleRound>),
}

impl Bracket {
    pub fn format(&self) -> BracketFormat {
        match self {
            Bracket::Single(_) => BracketFormat::Single,
            Bracket::Double(_) => BracketFormat::Double,
        }
    }

    /// Number of winners-side rounds, grand final included.
    fn winners_rounds(rounds: &[DoubleRound]) -> usize {
        rounds
            .iter()
            .take_while(|r| !r.winners_bracket.is_empty())
            .count()
    }

    fn round(&self, round: usize) -> Option<&Round> {
        match self {
            Bracket::Single(rounds) => rounds.get(round),
            Bracket::Double(rounds) => {
                let offset = Self::winners_rounds(rounds);
                if round < offset {
                    Some(&rounds[round].winners_bracket)
                } else {
                    rounds.get(round - offset).map(|r| &r.losers_bracket)
                }
            }
        }
    }

    fn round_mut(&mut self, round: usize) -> Option<&mut Round> {
        match self {
            Bracket::Single(rounds) => rounds.get_mut(round),
            Bracket::Double(rounds) => {
                let offset = Self::winners_rounds(rounds);
                if round < offset {
                    Some(&mut rounds[round].winners_bracket)
                } else {
                    rounds.get_mut(round - offset).map(|r| &mut r.losers_bracket)
                }
            }
        }
    }

    /// Resolve a match reference.
    pub fn get(&self, at: MatchRef) -> Option<&Match> {
        self.round(at.round).and_then(|r| r.get(at.index))
    }

    pub fn get_mut(&mut self, at: MatchRef) -> Option<&mut Match> {
        self.round_mut(at.round).and_then(|r| r.get_mut(at.index))
    }

    /// Every created match with its reference, winners side before losers side.
    pub fn matches(&self) -> Vec<(MatchRef, &Match)> {
        let rounds: Vec<&Round> = match self {
            Bracket::Single(rounds) => rounds.iter().collect(),
            Bracket::Double(rounds) => {
                let offset = Self::winners_rounds(rounds);
                rounds[..offset]
                    .iter()
                    .map(|r| &r.winners_bracket)
                    .chain(rounds.iter().map(|r| &r.losers_bracket))
                    .collect()
            }
        };
        rounds
            .into_iter()
            .enumerate()
            .flat_map(|(round, r)| r.iter().map(move |(index, m)| (MatchRef::new(round, index), m)))
            .collect()
    }

    /// The match whose winner takes the tournament (single final or grand final).
    pub fn final_ref(&self) -> Option<MatchRef> {
        self.matches()
            .into_iter()
            .find(|(_, m)| m.win_match.is_none())
            .map(|(at, _)| at)
    }
}
