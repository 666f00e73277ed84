//! Seed order and bracket layout shared by both elimination formats.
//!
//! A layout describes every match position of a full power-of-two bracket and what feeds
//! each of its two slots. Building it against a roster resolves byes: a position with one
//! real feeder is skipped and that feeder moves on to the next slot, a position with none
//! is left empty.

use crate::models::{Advance, Match, MatchRef, Player, Round, Slot};

/// Standard bracket seed order for `width` slots (a power of two, at least 2).
///
/// Pairs are read two at a time: for 8 slots the order is `1,8,4,5,2,7,3,6`.
pub fn seed_order(width: usize) -> Vec<usize> {
    let mut order = vec![1, 2];
    while order.len() < width {
        let complement = order.len() * 2 + 1;
        order = order.iter().flat_map(|&s| [s, complement - s]).collect();
    }
    order
}

/// What feeds one slot of a match position.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Feed {
    /// 1-based seed; seeds above the roster size are byes.
    Seed(usize),
    Winner(MatchRef),
    Loser(MatchRef),
}

/// A feed that survived bye resolution.
#[derive(Clone, Copy, Debug)]
enum Source {
    Seed(usize),
    WinnerOf(MatchRef),
    LoserOf(MatchRef),
}

#[derive(Clone, Copy, Debug)]
enum Position {
    Match([Source; 2]),
    Bye(Source),
    Empty,
}

pub(crate) struct Layout {
    /// Feeds per match position, indexed by round.
    pub rounds: Vec<Vec<[Feed; 2]>>,
    /// Rounds in an order where every feeder is resolved before the match it feeds.
    pub order: Vec<usize>,
}

impl Layout {
    /// Winners-side layout for `players` entrants: round 0 pairs seeds, every later round
    /// pairs the winners of consecutive matches.
    pub fn winners(players: usize) -> Self {
        let width = players.next_power_of_two();
        // Play-in matches list the challenger first.
        let play_in = !players.is_power_of_two();
        let first: Vec<[Feed; 2]> = seed_order(width)
            .chunks_exact(2)
            .map(|pair| {
                let (high, low) = (Feed::Seed(pair[0]), Feed::Seed(pair[1]));
                if play_in { [low, high] } else { [high, low] }
            })
            .collect();

        let mut rounds = vec![first];
        let mut matches = width / 2;
        while matches > 1 {
            let prev = rounds.len() - 1;
            matches /= 2;
            rounds.push(
                (0..matches)
                    .map(|j| {
                        [
                            Feed::Winner(MatchRef::new(prev, 2 * j)),
                            Feed::Winner(MatchRef::new(prev, 2 * j + 1)),
                        ]
                    })
                    .collect(),
            );
        }
        let order = (0..rounds.len()).collect();
        Self { rounds, order }
    }

    fn source(feed: Feed, entrants: usize, positions: &[Vec<Position>]) -> Option<Source> {
        let at = |r: MatchRef| positions.get(r.round).and_then(|round| round.get(r.index));
        match feed {
            Feed::Seed(seed) if seed <= entrants => Some(Source::Seed(seed)),
            Feed::Seed(_) => None,
            Feed::Winner(r) => match at(r)? {
                Position::Match(_) => Some(Source::WinnerOf(r)),
                Position::Bye(source) => Some(*source),
                Position::Empty => None,
            },
            // Nobody loses a bye.
            Feed::Loser(r) => match at(r)? {
                Position::Match(_) => Some(Source::LoserOf(r)),
                Position::Bye(_) | Position::Empty => None,
            },
        }
    }

    /// Resolve byes against `players` and build the rounds with their advancement links.
    pub fn build(&self, players: &[Player]) -> Vec<Round> {
        let mut positions: Vec<Vec<Position>> = self
            .rounds
            .iter()
            .map(|round| vec![Position::Empty; round.len()])
            .collect();
        for &round in &self.order {
            for (index, feeds) in self.rounds[round].iter().enumerate() {
                let sources: Vec<Source> = feeds
                    .iter()
                    .filter_map(|&feed| Self::source(feed, players.len(), &positions))
                    .collect();
                positions[round][index] = match sources[..] {
                    [a, b] => Position::Match([a, b]),
                    [a] => Position::Bye(a),
                    _ => Position::Empty,
                };
            }
        }

        let seat = |source: &Source| match source {
            Source::Seed(seed) => players.get(seed - 1).cloned(),
            Source::WinnerOf(_) | Source::LoserOf(_) => None,
        };
        let mut rounds: Vec<Round> = positions
            .iter()
            .map(|round| Round {
                matches: round
                    .iter()
                    .map(|position| match position {
                        Position::Match([a, b]) => Some(Match::new([seat(a), seat(b)])),
                        Position::Bye(_) | Position::Empty => None,
                    })
                    .collect(),
            })
            .collect();

        for (round, row) in positions.iter().enumerate() {
            for (index, position) in row.iter().enumerate() {
                let Position::Match(sources) = position else {
                    continue;
                };
                let to = MatchRef::new(round, index);
                for (slot, source) in [Slot::One, Slot::Two].into_iter().zip(sources) {
                    let advance = Some(Advance { to, slot });
                    match *source {
                        Source::WinnerOf(from) => {
                            if let Some(m) = rounds[from.round].get_mut(from.index) {
                                m.win_match = advance;
                            }
                        }
                        Source::LoserOf(from) => {
                            if let Some(m) = rounds[from.round].get_mut(from.index) {
                                m.loss_match = advance;
                            }
                        }
                        Source::Seed(_) => {}
                    }
                }
            }
        }
        rounds
    }
}
