//! Ban/pick tournament core: brackets, turn order, drafts and tournament state.

pub mod logic;
pub mod models;
pub mod roster;

pub use logic::{
    determine_turn, generate_bracket, generate_double_bracket, generate_single_bracket,
    record_bracket_result, record_match_result, seed_order, start_ban_pick, start_playing,
    start_tournament, turn_order,
};
pub use models::{
    Advance, BanPickStatus, Bracket, BracketError, BracketFormat, DoubleRound, DraftAction,
    DraftError, DraftEvent, DraftSession, DraftState, Match, MatchId, MatchRef, MatchStatus,
    ParseMatchRefError, Player, PlayerId, Round, Slot, Tournament, TournamentError, TournamentId,
    TournamentState, TurnEntry,
};
pub use roster::{read_roster, RosterError};
