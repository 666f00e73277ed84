//! Format dispatch and result propagation through a generated bracket.

use crate::logic::{generate_double_bracket, generate_single_bracket};
use crate::models::{Bracket, BracketError, BracketFormat, MatchRef, MatchStatus, Player, Slot};

/// Generate a bracket of the given format.
pub fn generate_bracket(format: BracketFormat, players: &[Player]) -> Result<Bracket, BracketError> {
    match format {
        BracketFormat::Single => generate_single_bracket(players).map(Bracket::Single),
        BracketFormat::Double => generate_double_bracket(players).map(Bracket::Double),
    }
}

/// Record the winner of a match and move both players along their advancement links.
///
/// The match must hold two players and not be finished. Returns the winning player.
pub fn record_bracket_result(
    bracket: &mut Bracket,
    at: MatchRef,
    winner: Slot,
) -> Result<Player, BracketError> {
    let m = bracket.get(at).ok_or(BracketError::MatchNotFound(at))?;
    if m.status == MatchStatus::Finished {
        return Err(BracketError::MatchFinished(at));
    }
    let (Some(won), Some(lost)) = (m.player(winner).cloned(), m.player(winner.other()).cloned())
    else {
        return Err(BracketError::MatchNotReady(at));
    };
    let (win_match, loss_match) = (m.win_match, m.loss_match);

    // Check both targets before touching anything.
    for advance in [win_match, loss_match].into_iter().flatten() {
        let target = bracket
            .get(advance.to)
            .ok_or(BracketError::MatchNotFound(advance.to))?;
        if target.player(advance.slot).is_some() {
            return Err(BracketError::SlotOccupied {
                at: advance.to,
                slot: advance.slot,
            });
        }
    }
    for (advance, player) in [(win_match, won.clone()), (loss_match, lost)] {
        if let Some(advance) = advance {
            if let Some(target) = bracket.get_mut(advance.to) {
                target.players[advance.slot.index()] = Some(player);
            }
        }
    }
    if let Some(m) = bracket.get_mut(at) {
        m.winner = Some(winner);
        m.status = MatchStatus::Finished;
    }
    log::debug!("match {at}: {} wins", won.name);
    Ok(won)
}
