//! Concurrency guarantees: atomic session creation and atomic
//! enrollment under simultaneous joins.

use std::sync::{Arc, Barrier};
use std::thread;

use wizard_session::{GameId, JoinRequest, PlayerId, SessionRegistry};

fn join_request(game: &str, player: &str, name: &str) -> JoinRequest {
    JoinRequest {
        game_id: GameId::new(game),
        player_id: PlayerId::new(player),
        player_name: name.to_string(),
    }
}

/// N concurrent joins with the same unknown game id and distinct player
/// ids yield exactly one session holding exactly N players.
#[test]
fn test_concurrent_joins_create_exactly_one_session() {
    const N: usize = 16;

    let registry = Arc::new(SessionRegistry::new());
    let barrier = Arc::new(Barrier::new(N));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .join(&join_request("shared", &format!("p{i}"), &format!("Player {i}")))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let view = handle.join().unwrap();
        // Every joiner sees the one shared session, with itself enrolled.
        assert_eq!(view.game_id, GameId::new("shared"));
        assert!(!view.players.is_empty());
    }

    assert_eq!(registry.len(), 1);

    let final_view = registry
        .join(&join_request("shared", "p0", "Player 0"))
        .unwrap();
    assert_eq!(final_view.players.len(), N);

    // Each player appears exactly once.
    let mut ids: Vec<_> = final_view
        .players
        .iter()
        .map(|p| p.id.as_str().to_string())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), N);
}

/// Concurrent joins by the same player id never double-enroll.
#[test]
fn test_concurrent_rejoins_are_idempotent() {
    const N: usize = 16;

    let registry = Arc::new(SessionRegistry::new());
    let barrier = Arc::new(Barrier::new(N));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .join(&join_request("g1", "p1", &format!("Name {i}")))
                    .unwrap()
            })
        })
        .collect();

    let mut seen_names = Vec::new();
    for handle in handles {
        let view = handle.join().unwrap();
        assert_eq!(view.players.len(), 1);
        assert_eq!(view.players[0].id, PlayerId::new("p1"));
        seen_names.push(view.players[0].name.clone());
    }

    // Whichever join won the race, every caller saw the same name.
    seen_names.sort();
    seen_names.dedup();
    assert_eq!(seen_names.len(), 1);
}

/// Joins to distinct games do not contend or cross-enroll.
#[test]
fn test_concurrent_joins_to_distinct_games() {
    const GAMES: usize = 8;
    const PLAYERS_PER_GAME: usize = 4;

    let registry = Arc::new(SessionRegistry::new());
    let barrier = Arc::new(Barrier::new(GAMES * PLAYERS_PER_GAME));

    let handles: Vec<_> = (0..GAMES)
        .flat_map(|g| (0..PLAYERS_PER_GAME).map(move |p| (g, p)))
        .map(|(g, p)| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .join(&join_request(&format!("g{g}"), &format!("p{p}"), "x"))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), GAMES);
    for g in 0..GAMES {
        let view = registry
            .join(&join_request(&format!("g{g}"), "p0", "x"))
            .unwrap();
        assert_eq!(view.players.len(), PLAYERS_PER_GAME);
    }
}

/// `get_or_create` hands every concurrent caller the same instance.
#[test]
fn test_get_or_create_single_instance_under_race() {
    const N: usize = 16;

    let registry = Arc::new(SessionRegistry::new());
    let barrier = Arc::new(Barrier::new(N));

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_create(&GameId::new("g1")).unwrap()
            })
        })
        .collect();

    let sessions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for session in &sessions[1..] {
        assert!(Arc::ptr_eq(&sessions[0], session));
    }
}
