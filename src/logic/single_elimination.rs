//! Single elimination bracket generation.

use crate::logic::seeding::Layout;
use crate::models::{BracketError, Player, Round};

/// Generate a single elimination bracket. Roster order is seed order.
///
/// Produces `ceil(log2(N))` rounds. When `N` is not a power of two, round 0 only holds the
/// play-in matches, each at the position whose winner slot it fills; seeds with a bye are
/// placed straight into round 1.
pub fn generate_single_bracket(players: &[Player]) -> Result<Vec<Round>, BracketError> {
    if players.len() < 2 {
        return Err(BracketError::NotEnoughPlayers(players.len()));
    }
    let rounds = Layout::winners(players.len()).build(players);
    log::debug!(
        "generated single elimination bracket: {} players, {} rounds",
        players.len(),
        rounds.len()
    );
    Ok(rounds)
}
