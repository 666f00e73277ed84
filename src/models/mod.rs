//! Data structures for ban/pick tournaments: players, matches, brackets, drafts.

mod bracket;
mod draft;
mod game;
mod player;
mod tournament;

pub use bracket::{Bracket, BracketError, BracketFormat, DoubleRound, Round};
pub use draft::{BanPickStatus, DraftAction, DraftError, DraftEvent, DraftSession, DraftState, TurnEntry};
pub use game::{Advance, Match, MatchId, MatchRef, MatchStatus, ParseMatchRefError, Slot};
pub use player::{Player, PlayerId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};
