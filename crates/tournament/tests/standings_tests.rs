//! End-to-end: play a seeded match, persist the standings and read them back.

use loa_core::Player;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner, Standings, TournamentConfig};

#[test]
fn test_match_standings_survive_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("tournament.toml");
    std::fs::write(
        &config_path,
        "name = \"Disk test\"\nrounds = 2\nmax_plies = 250\nseed = 3\nverbose = false\n",
    )
    .unwrap();
    let config = TournamentConfig::load(&config_path).unwrap();

    let players = [
        Player::engine("random", Box::new(RandomEngine::with_seed(3))),
        Player::engine("random (2)", Box::new(RandomEngine::with_seed(4))),
    ];
    let tournament = MatchRunner::new(MatchConfig::from(&config))
        .run_match(&config.name, players)
        .unwrap();

    let standings = tournament.standings();
    let path = dir.path().join(&config.standings_path);
    standings.save(&path).unwrap();

    let loaded = Standings::load(&path).unwrap();
    assert_eq!(loaded, standings);
    assert_eq!(loaded.name, "Disk test");
    assert_eq!(loaded.rounds.len(), 2);
    assert_eq!(loaded.generate_report(), standings.generate_report());

    let won: u32 = loaded.players.iter().map(|p| p.rounds_won).sum();
    let result = tournament.match_result();
    assert_eq!(won, result.wins + result.losses);
}
