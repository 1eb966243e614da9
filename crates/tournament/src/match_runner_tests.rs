use super::*;
use loa_core::Player;
use random_engine::RandomEngine;

fn engines(seed: u64) -> [Player; 2] {
    [
        Player::engine("Random A", Box::new(RandomEngine::with_seed(seed))),
        Player::engine("Random B", Box::new(RandomEngine::with_seed(seed + 1))),
    ]
}

fn quiet(num_rounds: u32, seed: u64) -> MatchConfig {
    MatchConfig {
        num_rounds,
        max_plies: Some(300),
        seed: Some(seed),
        verbose: false,
    }
}

#[test]
fn test_self_play() {
    let runner = MatchRunner::new(quiet(3, 9));
    let tournament = runner.run_match("self play", engines(9)).unwrap();

    // Self-play should complete without panic
    assert_eq!(tournament.match_result().total_rounds(), 3);
    assert_eq!(tournament.rounds_played(), 3);
    assert!(tournament.players().is_some());
}

#[test]
fn test_seeded_matches_repeat() {
    let first = MatchRunner::new(quiet(2, 21))
        .run_match("a", engines(21))
        .unwrap();
    let second = MatchRunner::new(quiet(2, 21))
        .run_match("a", engines(21))
        .unwrap();
    assert_eq!(first.standings(), second.standings());
}

#[test]
fn test_humans_cannot_play_unattended() {
    let players = [
        Player::engine("Bot", Box::new(RandomEngine::with_seed(1))),
        Player::human("Person"),
    ];
    let err = MatchRunner::new(quiet(1, 1))
        .run_match("m", players)
        .unwrap_err();
    assert!(matches!(err, TournamentError::HumanPlayer(name) if name == "Person"));
}

#[test]
fn test_config_conversion() {
    let config = TournamentConfig {
        rounds: 4,
        max_plies: 120,
        seed: Some(5),
        verbose: false,
        ..TournamentConfig::default()
    };
    let match_config = MatchConfig::from(&config);
    assert_eq!(match_config.num_rounds, 4);
    assert_eq!(match_config.max_plies, Some(120));
    assert_eq!(match_config.seed, Some(5));
    assert!(!match_config.verbose);
}
