//! Integration tests for the tournament lifecycle: roster, start, drafts and results.

use banpick_tournament::{
    read_roster, record_match_result, start_ban_pick, start_playing, start_tournament,
    BracketError, BracketFormat, DraftState, MatchRef, MatchStatus, Player, RosterError, Slot,
    Tournament, TournamentError, TournamentState,
};

fn tournament_with_players(n: usize, format: BracketFormat) -> Tournament {
    let players: Vec<Player> = (1..=n).map(|i| Player::new(format!("P{i}"))).collect();
    Tournament::with_players(players, format)
}

fn status(t: &Tournament, at: MatchRef) -> MatchStatus {
    t.bracket.as_ref().unwrap().get(at).unwrap().status
}

#[test]
fn add_player_rejects_duplicates_and_blank_names() {
    let mut t = Tournament::new("Spring cup", BracketFormat::Single, 2, 2);
    t.add_player("Alice", Some("alice@example.com".to_string())).unwrap();
    assert_eq!(
        t.add_player("  alice ", None),
        Err(TournamentError::DuplicatePlayerName)
    );
    assert_eq!(t.add_player("   ", None), Err(TournamentError::EmptyPlayerName));
    t.add_player("Bob", Some(String::new())).unwrap();
    assert_eq!(t.players.len(), 2);
    assert_eq!(t.players[0].email.as_deref(), Some("alice@example.com"));
    assert_eq!(t.players[1].email, None);
}

#[test]
fn remove_player_only_during_registration() {
    let mut t = tournament_with_players(3, BracketFormat::Single);
    let id = t.players[2].id;
    t.remove_player(id).unwrap();
    assert_eq!(t.remove_player(id), Err(TournamentError::PlayerNotFound(id)));

    start_tournament(&mut t).unwrap();
    let first = t.players[0].id;
    assert_eq!(t.remove_player(first), Err(TournamentError::InvalidState));
    assert_eq!(t.add_player("Late", None), Err(TournamentError::InvalidState));
    assert_eq!(t.shuffle_seeds(), Err(TournamentError::InvalidState));
}

#[test]
fn start_requires_two_players() {
    let mut t = tournament_with_players(1, BracketFormat::Double);
    assert_eq!(
        start_tournament(&mut t),
        Err(TournamentError::Bracket(BracketError::NotEnoughPlayers(1)))
    );
    assert_eq!(t.state, TournamentState::Registration);
    assert!(t.bracket.is_none());
}

#[test]
fn shuffle_keeps_the_roster() {
    let mut t = tournament_with_players(16, BracketFormat::Single);
    let mut before: Vec<_> = t.players.iter().map(|p| p.id).collect();
    t.shuffle_seeds().unwrap();
    let mut after: Vec<_> = t.players.iter().map(|p| p.id).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn ban_pick_then_play_a_match() {
    let mut t = tournament_with_players(4, BracketFormat::Single);
    t.ban_count = 4;
    t.pick_count = 2;
    start_tournament(&mut t).unwrap();
    let first = MatchRef::new(0, 0);

    let draft = start_ban_pick(&mut t, first, None).unwrap();
    assert_eq!(draft.script().len(), 6);
    assert_eq!(status(&t, first), MatchStatus::BanPick);
    assert_eq!(
        start_ban_pick(&mut t, first, None).unwrap_err(),
        TournamentError::InvalidMatchStatus(first)
    );

    start_playing(&mut t, first).unwrap();
    assert_eq!(status(&t, first), MatchStatus::Playing);

    let won = record_match_result(&mut t, first, Slot::One).unwrap();
    assert_eq!(won.name, "P1");
    assert_eq!(status(&t, first), MatchStatus::Finished);
    assert_eq!(t.state, TournamentState::InProgress);
}

#[test]
fn draft_opener_can_be_overridden() {
    let mut t = tournament_with_players(2, BracketFormat::Single);
    start_tournament(&mut t).unwrap();
    let draft = start_ban_pick(&mut t, MatchRef::new(0, 0), Some(Slot::Two)).unwrap();
    assert!(matches!(
        draft.state(),
        DraftState::AwaitingTurn { player: Slot::Two, .. }
    ));
}

#[test]
fn undecided_matches_cannot_start() {
    let mut t = tournament_with_players(4, BracketFormat::Single);
    start_tournament(&mut t).unwrap();
    let final_match = MatchRef::new(1, 0);
    assert_eq!(
        start_ban_pick(&mut t, final_match, None).unwrap_err(),
        TournamentError::InvalidMatchStatus(final_match)
    );
    assert_eq!(
        start_playing(&mut t, final_match),
        Err(TournamentError::InvalidMatchStatus(final_match))
    );
    assert_eq!(
        record_match_result(&mut t, final_match, Slot::One),
        Err(TournamentError::Bracket(BracketError::MatchNotReady(final_match)))
    );
}

#[test]
fn deciding_the_final_completes_the_tournament() {
    let mut t = tournament_with_players(4, BracketFormat::Single);
    assert!(t.champion().is_none());
    start_tournament(&mut t).unwrap();
    record_match_result(&mut t, MatchRef::new(0, 0), Slot::One).unwrap();
    record_match_result(&mut t, MatchRef::new(0, 1), Slot::Two).unwrap();
    assert!(t.champion().is_none());
    record_match_result(&mut t, MatchRef::new(1, 0), Slot::Two).unwrap();

    assert_eq!(t.state, TournamentState::Completed);
    assert_eq!(t.champion().map(|p| p.name.as_str()), Some("P3"));
    assert_eq!(
        record_match_result(&mut t, MatchRef::new(0, 0), Slot::One),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn double_elimination_grand_final_completes_the_tournament() {
    let mut t = tournament_with_players(2, BracketFormat::Double);
    start_tournament(&mut t).unwrap();
    record_match_result(&mut t, MatchRef::new(0, 0), Slot::Two).unwrap();
    assert_eq!(t.state, TournamentState::InProgress);
    record_match_result(&mut t, MatchRef::new(1, 0), Slot::Two).unwrap();
    assert_eq!(t.state, TournamentState::Completed);
    assert_eq!(t.champion().map(|p| p.name.as_str()), Some("P1"));
}

#[test]
fn roster_reads_csv_in_seed_order() {
    let csv = "name,email\nAlice,alice@example.com\nBob,\n Carol ,carol@example.com\n";
    let players = read_roster(csv.as_bytes()).unwrap();
    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(players[0].email.as_deref(), Some("alice@example.com"));
    assert_eq!(players[1].email, None);
}

#[test]
fn roster_without_email_column() {
    let players = read_roster("name\nAlice\nBob\n".as_bytes()).unwrap();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.email.is_none()));
}

#[test]
fn roster_rejects_duplicates_and_blank_names() {
    assert!(matches!(
        read_roster("name\nAlice\nALICE\n".as_bytes()),
        Err(RosterError::DuplicateName(name)) if name == "ALICE"
    ));
    assert!(matches!(
        read_roster("name,email\nAlice,a@example.com\n,b@example.com\n".as_bytes()),
        Err(RosterError::EmptyName(2))
    ));
}
