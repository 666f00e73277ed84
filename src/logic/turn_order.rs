//! Ban/pick turn order.

use crate::models::{DraftAction, Slot, TurnEntry};

/// One block of the draft: a single opening turn, then the rest in pairs. Pair 0 goes to
/// player 2, pair 1 to player 1, and so on; a trailing odd turn keeps its pair's player.
fn block(count: u32, opener: Slot, action: DraftAction) -> impl Iterator<Item = TurnEntry> {
    let paired = (0..count.saturating_sub(1)).map(move |i| {
        let player = if (i / 2) % 2 == 1 { Slot::One } else { Slot::Two };
        TurnEntry::new(player, action)
    });
    std::iter::once(TurnEntry::new(opener, action)).chain(paired)
}

/// Lazy form of [`determine_turn`]. The length is `max(ban_count, 1) + max(pick_count, 1)`
/// and is reported exactly by `size_hint`.
pub fn turn_order(
    ban_count: u32,
    pick_count: u32,
    first_player: Option<Slot>,
) -> impl Iterator<Item = TurnEntry> {
    block(ban_count, first_player.unwrap_or(Slot::One), DraftAction::Ban)
        .chain(block(pick_count, Slot::One, DraftAction::Pick))
}

/// Turn order for a ban/pick draft.
///
/// The opening ban belongs to `first_player` (player 1 by default). The remaining bans go
/// in pairs: player 2, player 1, player 2 and so on. The pick block always opens with
/// player 1 and then pairs the same way. A count of 0 still yields the block's opening turn.
pub fn determine_turn(ban_count: u32, pick_count: u32, first_player: Option<Slot>) -> Vec<TurnEntry> {
    turn_order(ban_count, pick_count, first_player).collect()
}
