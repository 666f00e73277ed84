//! Ban/pick draft: turn script, persisted status entries, and the live draft session.

use crate::models::game::Slot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors raised while resolving draft turns.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("The draft is already complete")]
    Complete,
    #[error("It is player {expected}'s turn, not player {actual}'s")]
    NotYourTurn { expected: Slot, actual: Slot },
    #[error("A character must be chosen")]
    EmptyCharacter,
    #[error("{0} is not in the character pool")]
    UnknownCharacter(String),
    #[error("{0} has already been banned or picked")]
    CharacterUnavailable(String),
    /// A resolved entry follows an unresolved one in persisted status.
    #[error("Turn {0} is resolved before an earlier turn")]
    OutOfOrder(usize),
}

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftAction {
    Ban,
    Pick,
}

/// One turn of the draft script.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnEntry {
    pub player: Slot,
    #[serde(rename = "type")]
    pub action: DraftAction,
}

impl TurnEntry {
    pub fn new(player: Slot, action: DraftAction) -> Self {
        Self { player, action }
    }
}

/// Persisted form of a draft turn; `character` is unset until the turn is resolved.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BanPickStatus {
    pub player: Slot,
    #[serde(rename = "type")]
    pub action: DraftAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// When the turn was resolved. Older entries without it are restored with the load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// A resolved turn in the draft's event log.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DraftEvent {
    pub turn: usize,
    pub player: Slot,
    pub action: DraftAction,
    pub character: String,
    pub resolved_at: DateTime<Utc>,
}

/// Where the draft currently stands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DraftState {
    AwaitingTurn {
        turn: usize,
        player: Slot,
        action: DraftAction,
    },
    Complete,
}

/// A live ban/pick draft for one match.
///
/// Progress is the append-only event log; the current state is the first script
/// entry without an event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftSession {
    script: Vec<TurnEntry>,
    events: Vec<DraftEvent>,
    /// Allowed characters; empty means any name is accepted.
    #[serde(default)]
    pool: Vec<String>,
}

impl DraftSession {
    pub fn new(script: Vec<TurnEntry>) -> Self {
        Self {
            script,
            events: Vec::new(),
            pool: Vec::new(),
        }
    }

    /// Restrict choices to a fixed character pool.
    pub fn with_pool(script: Vec<TurnEntry>, pool: Vec<String>) -> Self {
        Self {
            pool,
            ..Self::new(script)
        }
    }

    /// Rebuild a session from persisted status entries, keeping their timestamps.
    pub fn from_status(entries: &[BanPickStatus]) -> Result<Self, DraftError> {
        let mut session = Self::new(
            entries
                .iter()
                .map(|e| TurnEntry::new(e.player, e.action))
                .collect(),
        );
        let resolved = entries
            .iter()
            .take_while(|e| e.character.is_some())
            .count();
        if let Some(pos) = entries[resolved..].iter().position(|e| e.character.is_some()) {
            return Err(DraftError::OutOfOrder(resolved + pos));
        }
        for entry in &entries[..resolved] {
            if let Some(character) = &entry.character {
                session.resolve(entry.player, character.clone())?;
                if let (Some(at), Some(event)) = (entry.resolved_at, session.events.last_mut()) {
                    event.resolved_at = at;
                }
            }
        }
        Ok(session)
    }

    pub fn script(&self) -> &[TurnEntry] {
        &self.script
    }

    pub fn events(&self) -> &[DraftEvent] {
        &self.events
    }

    pub fn state(&self) -> DraftState {
        let turn = self.events.len();
        match self.script.get(turn) {
            Some(entry) => DraftState::AwaitingTurn {
                turn,
                player: entry.player,
                action: entry.action,
            },
            None => DraftState::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == DraftState::Complete
    }

    /// Resolve the active turn for `player` with `character`.
    pub fn resolve(
        &mut self,
        player: Slot,
        character: impl Into<String>,
    ) -> Result<DraftState, DraftError> {
        let DraftState::AwaitingTurn {
            turn,
            player: expected,
            action,
        } = self.state()
        else {
            return Err(DraftError::Complete);
        };
        if player != expected {
            return Err(DraftError::NotYourTurn {
                expected,
                actual: player,
            });
        }
        let character = character.into().trim().to_string();
        if character.is_empty() {
            return Err(DraftError::EmptyCharacter);
        }
        if !self.pool.is_empty() && !self.pool.iter().any(|c| c.eq_ignore_ascii_case(&character)) {
            return Err(DraftError::UnknownCharacter(character));
        }
        if self.is_taken(&character) {
            return Err(DraftError::CharacterUnavailable(character));
        }
        log::debug!("draft turn {turn}: player {player} {action:?} {character}");
        self.events.push(DraftEvent {
            turn,
            player,
            action,
            character,
            resolved_at: Utc::now(),
        });
        Ok(self.state())
    }

    fn is_taken(&self, character: &str) -> bool {
        self.events
            .iter()
            .any(|e| e.character.eq_ignore_ascii_case(character))
    }

    /// Characters still available from the pool (empty when there is no pool).
    pub fn available(&self) -> Vec<&str> {
        let taken: HashSet<String> = self
            .events
            .iter()
            .map(|e| e.character.to_ascii_lowercase())
            .collect();
        self.pool
            .iter()
            .filter(|c| !taken.contains(&c.to_ascii_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Every banned character, in draft order.
    pub fn bans(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.action == DraftAction::Ban)
            .map(|e| e.character.as_str())
            .collect()
    }

    /// Characters picked by `player`, in draft order.
    pub fn picks(&self, player: Slot) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.action == DraftAction::Pick && e.player == player)
            .map(|e| e.character.as_str())
            .collect()
    }

    /// Persisted mirror of the draft, one entry per scripted turn.
    pub fn status(&self) -> Vec<BanPickStatus> {
        self.script
            .iter()
            .enumerate()
            .map(|(i, entry)| BanPickStatus {
                player: entry.player,
                action: entry.action,
                character: self.events.get(i).map(|e| e.character.clone()),
                resolved_at: self.events.get(i).map(|e| e.resolved_at),
            })
            .collect()
    }
}
