//! Roster import from CSV (`name,email` columns, email optional). Row order is seed order.

use crate::models::Player;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Invalid roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {0} has an empty name")]
    EmptyName(usize),
    #[error("Duplicate player name {0:?}")]
    DuplicateName(String),
}

#[derive(Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    email: Option<String>,
}

/// Read players from CSV with a header row.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut players: Vec<Player> = Vec::new();
    for (i, row) in csv.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        if row.name.is_empty() {
            return Err(RosterError::EmptyName(i + 1));
        }
        if players.iter().any(|p| p.name.eq_ignore_ascii_case(&row.name)) {
            return Err(RosterError::DuplicateName(row.name));
        }
        let mut player = Player::new(row.name);
        player.email = row.email.filter(|e| !e.is_empty());
        players.push(player);
    }
    Ok(players)
}
