//! Setup phase: start tournament (transition from Registration to InProgress).

use crate::logic::generate_bracket;
use crate::models::{Tournament, TournamentError, TournamentState};

/// Start the tournament: generate the bracket from the roster (at least 2 players) in seed order.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Registration {
        return Err(TournamentError::InvalidState);
    }
    let bracket = generate_bracket(tournament.format, &tournament.players)?;
    tournament.bracket = Some(bracket);
    tournament.state = TournamentState::InProgress;
    log::info!(
        "Tournament {} started: {} players, {} elimination",
        tournament.id,
        tournament.players.len(),
        tournament.format
    );
    Ok(())
}
