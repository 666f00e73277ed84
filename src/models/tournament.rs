//! Tournament and TournamentState.

use crate::models::bracket::{Bracket, BracketError, BracketFormat};
use crate::models::draft::DraftError;
use crate::models::game::MatchRef;
use crate::models::player::{Player, PlayerId};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    #[error("Invalid state for this action")]
    InvalidState,
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    /// Names are unique, case-insensitive.
    #[error("A player with this name already exists")]
    DuplicatePlayerName,
    #[error("Player not found")]
    PlayerNotFound(PlayerId),
    #[error("Match {0} cannot do this in its current status")]
    InvalidMatchStatus(MatchRef),
    #[error(transparent)]
    Bracket(#[from] BracketError),
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Adding and removing players; no bracket yet.
    #[default]
    Registration,
    /// Bracket generated; matches being played.
    InProgress,
    /// Final decided.
    Completed,
}

/// Full tournament state: roster, draft settings, bracket and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: BracketFormat,
    /// Roster in seed order.
    pub players: Vec<Player>,
    /// Bans per match draft.
    pub ban_count: u32,
    /// Picks per match draft.
    pub pick_count: u32,
    pub state: TournamentState,
    pub bracket: Option<Bracket>,
}

impl Tournament {
    /// Create a new tournament in Registration state with no players.
    pub fn new(name: impl Into<String>, format: BracketFormat, ban_count: u32, pick_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            players: Vec::new(),
            ban_count,
            pick_count,
            state: TournamentState::Registration,
            bracket: None,
        }
    }

    /// Create a tournament with an initial roster. Still in Registration until started.
    pub fn with_players(players: Vec<Player>, format: BracketFormat) -> Self {
        Self {
            players,
            ..Self::new("", format, 2, 2)
        }
    }

    /// Add a player (Registration only). Returns the new player's id.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        email: Option<String>,
    ) -> Result<PlayerId, TournamentError> {
        if self.state != TournamentState::Registration {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        let mut player = Player::new(name_trimmed);
        player.email = email.filter(|e| !e.trim().is_empty());
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player by id (Registration only).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.state != TournamentState::Registration {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Randomize seed order (Registration only).
    pub fn shuffle_seeds(&mut self) -> Result<(), TournamentError> {
        if self.state != TournamentState::Registration {
            return Err(TournamentError::InvalidState);
        }
        self.players.shuffle(&mut rand::thread_rng());
        Ok(())
    }

    /// Winner of the final, once the tournament is completed.
    pub fn champion(&self) -> Option<&Player> {
        if self.state != TournamentState::Completed {
            return None;
        }
        let bracket = self.bracket.as_ref()?;
        bracket.get(bracket.final_ref()?)?.winning_player()
    }
}
