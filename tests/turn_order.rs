//! Integration tests for ban/pick turn order.

use banpick_tournament::{determine_turn, turn_order, DraftAction, Slot, TurnEntry};
use DraftAction::{Ban, Pick};

fn turns(spec: &[(u8, DraftAction)]) -> Vec<TurnEntry> {
    spec.iter()
        .map(|&(player, action)| TurnEntry::new(Slot::try_from(player).unwrap(), action))
        .collect()
}

#[test]
fn two_bans_two_picks_alternate() {
    assert_eq!(
        determine_turn(2, 2, None),
        turns(&[(1, Ban), (2, Ban), (1, Pick), (2, Pick)])
    );
}

#[test]
fn remaining_bans_go_in_pairs() {
    assert_eq!(
        determine_turn(4, 2, None),
        turns(&[(1, Ban), (2, Ban), (2, Ban), (1, Ban), (1, Pick), (2, Pick)])
    );
    assert_eq!(
        determine_turn(1, 6, None),
        turns(&[
            (1, Ban),
            (1, Pick),
            (2, Pick),
            (2, Pick),
            (1, Pick),
            (1, Pick),
            (2, Pick),
        ])
    );
}

#[test]
fn zero_bans_still_open_with_a_ban() {
    assert_eq!(
        determine_turn(0, 2, None),
        turns(&[(1, Ban), (1, Pick), (2, Pick)])
    );
    assert_eq!(determine_turn(0, 0, None), turns(&[(1, Ban), (1, Pick)]));
}

#[test]
fn single_counts_have_no_pairs() {
    assert_eq!(determine_turn(1, 1, None), turns(&[(1, Ban), (1, Pick)]));
}

#[test]
fn first_player_two_only_takes_the_opening_ban() {
    assert_eq!(
        determine_turn(3, 3, Some(Slot::Two)),
        turns(&[(2, Ban), (2, Ban), (2, Ban), (1, Pick), (2, Pick), (2, Pick)])
    );
    assert_eq!(
        determine_turn(5, 1, Some(Slot::Two)),
        turns(&[(2, Ban), (2, Ban), (2, Ban), (1, Ban), (1, Ban), (1, Pick)])
    );
    assert_eq!(determine_turn(5, 3, Some(Slot::One)), determine_turn(5, 3, None));
}

#[test]
fn huge_counts_do_not_overflow() {
    let n = u32::MAX as usize;
    let order = turn_order(u32::MAX, u32::MAX, Some(Slot::Two));
    assert_eq!(order.size_hint(), (2 * n, Some(2 * n)));

    let head: Vec<TurnEntry> = turn_order(u32::MAX, 1, None).take(5).collect();
    assert_eq!(head, turns(&[(1, Ban), (2, Ban), (2, Ban), (1, Ban), (1, Ban)]));
}

#[test]
fn length_and_block_shape() {
    for bans in 0..8u32 {
        for picks in 0..8u32 {
            let order = determine_turn(bans, picks, None);
            assert_eq!(order.len(), (bans.max(1) + picks.max(1)) as usize);
            assert_eq!(determine_turn(bans, picks, Some(Slot::Two))[1..], order[1..]);

            let ban_block = bans.max(1) as usize;
            assert!(order[..ban_block].iter().all(|t| t.action == Ban));
            assert!(order[ban_block..].iter().all(|t| t.action == Pick));
            assert_eq!(order[0].player, Slot::One);
            assert_eq!(order[ban_block].player, Slot::One);

            // After the opener, turns come in same-player pairs.
            for block in [&order[1..ban_block], &order[ban_block + 1..]] {
                for pair in block.chunks(2) {
                    assert!(pair.iter().all(|t| t.player == pair[0].player));
                }
            }
        }
    }
}

#[test]
fn turn_entries_serialize_like_ban_pick_status() {
    let json = serde_json::to_value(determine_turn(1, 1, Some(Slot::Two))).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "player": 2, "type": "ban" },
            { "player": 1, "type": "pick" },
        ])
    );
}
