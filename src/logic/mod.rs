//! Tournament business logic: bracket generation, turn order, setup and match play.

mod bracket;
mod double_elimination;
mod play;
mod seeding;
mod setup;
mod single_elimination;
mod turn_order;

pub use bracket::{generate_bracket, record_bracket_result};
pub use double_elimination::generate_double_bracket;
pub use play::{record_match_result, start_ban_pick, start_playing};
pub use seeding::seed_order;
pub use setup::start_tournament;
pub use single_elimination::generate_single_bracket;
pub use turn_order::{determine_turn, turn_order};
