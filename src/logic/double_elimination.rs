//! Double elimination bracket generation.
//!
//! Round numbering: winners rounds `0..k`, the grand final at `k`, then the losers rounds.
//! Losers round 0 takes the losers of winners round 0 in pairs. After that, odd losers
//! rounds take one survivor each from the previous losers round plus a loser dropping from
//! winners round `t`, and even losers rounds halve the field.

use crate::logic::seeding::{Feed, Layout};
use crate::models::{BracketError, DoubleRound, MatchRef, Player, Round};

/// Position in the winners round a loser drops from. Odd drop rounds reverse the order and
/// even ones swap halves, which keeps early rematches apart.
fn fold(t: usize, j: usize, width: usize) -> usize {
    if t % 2 == 1 {
        width - 1 - j
    } else {
        (j + width / 2) % width
    }
}

fn double_layout(players: usize) -> Layout {
    let Layout { mut rounds, .. } = Layout::winners(players);
    let k = rounds.len();
    let width = players.next_power_of_two();
    let losers_rounds = 2 * (k - 1);
    let losers = |l: usize| k + 1 + l;

    // Grand final, wired once the losers side exists.
    rounds.push(Vec::new());
    for l in 0..losers_rounds {
        let feeds: Vec<[Feed; 2]> = if l == 0 {
            (0..width / 4)
                .map(|j| {
                    [
                        Feed::Loser(MatchRef::new(0, 2 * j)),
                        Feed::Loser(MatchRef::new(0, 2 * j + 1)),
                    ]
                })
                .collect()
        } else if l % 2 == 1 {
            let t = l.div_ceil(2);
            let m = width >> (t + 1);
            (0..m)
                .map(|j| {
                    [
                        Feed::Winner(MatchRef::new(losers(l - 1), j)),
                        Feed::Loser(MatchRef::new(t, fold(t, j, m))),
                    ]
                })
                .collect()
        } else {
            let m = rounds[losers(l - 1)].len() / 2;
            (0..m)
                .map(|j| {
                    [
                        Feed::Winner(MatchRef::new(losers(l - 1), 2 * j)),
                        Feed::Winner(MatchRef::new(losers(l - 1), 2 * j + 1)),
                    ]
                })
                .collect()
        };
        rounds.push(feeds);
    }

    let winners_final = MatchRef::new(k - 1, 0);
    rounds[k] = vec![if losers_rounds == 0 {
        // Two players: the loser of the only match gets a second chance in the grand final.
        [Feed::Winner(winners_final), Feed::Loser(winners_final)]
    } else {
        [
            Feed::Winner(winners_final),
            Feed::Winner(MatchRef::new(losers(losers_rounds - 1), 0)),
        ]
    }];

    let order = (0..k)
        .chain((0..losers_rounds).map(losers))
        .chain(std::iter::once(k))
        .collect();
    Layout { rounds, order }
}

/// Generate a double elimination bracket. Roster order is seed order.
///
/// Entry `i` of the result holds winners round `i` (the grand final is the last winners
/// round) and losers round `i`; the shorter side is padded with empty rounds.
pub fn generate_double_bracket(players: &[Player]) -> Result<Vec<DoubleRound>, BracketError> {
    if players.len() < 2 {
        return Err(BracketError::NotEnoughPlayers(players.len()));
    }
    let mut rounds = double_layout(players.len()).build(players).into_iter();
    // Winners rounds plus the grand final.
    let winners_rounds = players.len().next_power_of_two().trailing_zeros() as usize + 1;
    let mut winners: Vec<Round> = rounds.by_ref().take(winners_rounds).collect();
    let mut losers: Vec<Round> = rounds.collect();
    let losers_rounds = losers.len();

    let depth = winners.len().max(losers.len());
    winners.resize_with(depth, Round::default);
    losers.resize_with(depth, Round::default);
    log::debug!(
        "generated double elimination bracket: {} players, {} winners rounds, {} losers rounds",
        players.len(),
        winners_rounds,
        losers_rounds
    );
    Ok(winners
        .into_iter()
        .zip(losers)
        .map(|(winners_bracket, losers_bracket)| DoubleRound {
            winners_bracket,
            losers_bracket,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::fold;

    #[test]
    fn fold_alternates_reverse_and_half_swap() {
        assert_eq!((0..4).map(|j| fold(1, j, 4)).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!((0..4).map(|j| fold(2, j, 4)).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
        assert_eq!(fold(2, 0, 1), 0);
    }
}
