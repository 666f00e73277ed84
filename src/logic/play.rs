//! Match play: ban/pick, playing, and reporting results.

use crate::logic::{determine_turn, record_bracket_result};
use crate::models::{
    BracketError, DraftSession, Match, MatchRef, MatchStatus, Player, Slot, Tournament,
    TournamentError, TournamentState,
};

fn active_match(tournament: &mut Tournament, at: MatchRef) -> Result<&mut Match, TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let bracket = tournament
        .bracket
        .as_mut()
        .ok_or(TournamentError::InvalidState)?;
    Ok(bracket.get_mut(at).ok_or(BracketError::MatchNotFound(at))?)
}

/// Open the ban/pick draft for a match. The match must have both players and still be in set-up.
///
/// `first_player` overrides who takes the opening ban (player 1 by default).
pub fn start_ban_pick(
    tournament: &mut Tournament,
    at: MatchRef,
    first_player: Option<Slot>,
) -> Result<DraftSession, TournamentError> {
    let (ban_count, pick_count) = (tournament.ban_count, tournament.pick_count);
    let m = active_match(tournament, at)?;
    if m.status != MatchStatus::SetUp || !m.is_ready() {
        return Err(TournamentError::InvalidMatchStatus(at));
    }
    m.status = MatchStatus::BanPick;
    Ok(DraftSession::new(determine_turn(ban_count, pick_count, first_player)))
}

/// Mark a match as being played (from set-up, or after its draft).
pub fn start_playing(tournament: &mut Tournament, at: MatchRef) -> Result<(), TournamentError> {
    let m = active_match(tournament, at)?;
    if !matches!(m.status, MatchStatus::SetUp | MatchStatus::BanPick) || !m.is_ready() {
        return Err(TournamentError::InvalidMatchStatus(at));
    }
    m.status = MatchStatus::Playing;
    Ok(())
}

/// Report the winner of a match. Deciding the final completes the tournament.
pub fn record_match_result(
    tournament: &mut Tournament,
    at: MatchRef,
    winner: Slot,
) -> Result<Player, TournamentError> {
    active_match(tournament, at)?;
    let bracket = tournament
        .bracket
        .as_mut()
        .ok_or(TournamentError::InvalidState)?;
    let won = record_bracket_result(bracket, at, winner)?;
    if bracket.final_ref() == Some(at) {
        tournament.state = TournamentState::Completed;
        log::info!("Tournament {} completed: {} wins", tournament.id, won.name);
    }
    Ok(won)
}
