//! Full games through the orchestrator.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use tictactoe::{
    GameConfig, GameEvent, MinimaxPlayer, Orchestrator, Outcome, Player, PlayerKind, RandomPlayer,
    Tally, play_game, run_session,
};
use tictactoe_core::{Board, Mark, MinimaxEngine, Move, SearchConfig};
use tokio::sync::mpsc;

/// Plays a fixed list of moves, legal or not.
struct ScriptedPlayer {
    mark: Mark,
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    fn new(mark: Mark, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            mark,
            moves: moves.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn get_move(&mut self, _board: &Board) -> Result<Move> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn minimax(mark: Mark, opening_shortcut: bool) -> Box<dyn Player> {
    let config = SearchConfig::default().opening_shortcut(opening_shortcut);
    Box::new(MinimaxPlayer::new(mark, MinimaxEngine::new(config)))
}

fn random(mark: Mark, seed: u64) -> Box<dyn Player> {
    Box::new(RandomPlayer::with_rng(mark, ChaCha8Rng::seed_from_u64(seed)))
}

fn drain(mut rx: mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_minimax_self_play_ties() {
    for shortcut in [false, true] {
        let mut orchestrator = Orchestrator::new(minimax(Mark::X, shortcut), minimax(Mark::O, shortcut));
        let mut board = Board::new();

        let outcome = orchestrator.play(&mut board).await.unwrap();
        assert_eq!(outcome, Outcome::Tie);
        assert!(board.is_tied());
    }
}

#[tokio::test]
async fn test_minimax_never_loses_to_random() {
    for seed in 0..12 {
        let mut as_o = Orchestrator::new(random(Mark::X, seed), minimax(Mark::O, true));
        let outcome = as_o.play(&mut Board::new()).await.unwrap();
        assert_ne!(outcome, Outcome::Winner(Mark::X), "seed {seed}");

        let mut as_x = Orchestrator::new(minimax(Mark::X, true), random(Mark::O, seed));
        let outcome = as_x.play(&mut Board::new()).await.unwrap();
        assert_ne!(outcome, Outcome::Winner(Mark::O), "seed {seed}");
    }
}

#[tokio::test]
async fn test_game_stops_at_first_win() {
    // X takes the top row while O plays the middle row one move behind.
    let (tx, rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new(Mark::X, [0, 1, 2])),
        Box::new(ScriptedPlayer::new(Mark::O, [3, 4, 5])),
    )
    .with_events(tx);
    let mut board = Board::new();

    let outcome = orchestrator.play(&mut board).await.unwrap();
    assert_eq!(outcome, Outcome::Winner(Mark::X));
    assert_eq!(board.available_moves().len(), 4);
    assert!(board.is_empty(5));

    let events = drain(rx);
    assert!(matches!(events.first(), Some(GameEvent::Started)));
    let moves: Vec<(Mark, Move)> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::MoveMade { mark, position, .. } => Some((*mark, *position)),
            _ => None,
        })
        .collect();
    assert_eq!(
        moves,
        vec![(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)]
    );
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver {
            outcome: Outcome::Winner(Mark::X)
        })
    ));
}

#[tokio::test]
async fn test_rejected_moves_are_retried() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new(Mark::X, [4, 0, 8, 2])),
        // Occupied, then out of range, then legal.
        Box::new(ScriptedPlayer::new(Mark::O, [4, 9, 1, 6, 5])),
    )
    .with_events(tx);
    let mut board = Board::new();

    // X: 4, 0, 8 completes the diagonal on its third accepted move.
    let outcome = orchestrator.play(&mut board).await.unwrap();
    assert_eq!(outcome, Outcome::Winner(Mark::X));

    let rejected: Vec<(Mark, Move)> = drain(rx)
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::MoveRejected { mark, position } => Some((mark, position)),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, vec![(Mark::O, 4), (Mark::O, 9)]);
    assert_eq!(board.get(1).and_then(|square| square.mark()), Some(Mark::O));
}

#[tokio::test]
async fn test_endless_illegal_moves_give_up() {
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new(Mark::X, std::iter::repeat_n(42, 100))),
        minimax(Mark::O, true),
    );

    let err = orchestrator.play(&mut Board::new()).await.unwrap_err();
    assert!(err.to_string().contains("illegal moves"));
}

#[tokio::test]
async fn test_seats_must_match_marks() {
    let mut orchestrator = Orchestrator::new(minimax(Mark::O, true), minimax(Mark::X, true));
    assert!(orchestrator.play(&mut Board::new()).await.is_err());
}

#[tokio::test]
async fn test_player_error_ends_game() {
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new(Mark::X, [0])),
        Box::new(ScriptedPlayer::new(Mark::O, [])),
    );
    let err = orchestrator.play(&mut Board::new()).await.unwrap_err();
    assert!(err.to_string().contains("script exhausted"));
}

#[tokio::test]
async fn test_silent_session_tallies_every_game() {
    let config = GameConfig::default()
        .with_x_player(PlayerKind::Random)
        .with_o_player(PlayerKind::Minimax)
        .with_games(6)
        .with_render(false);

    let tally = run_session(&config).await.unwrap();
    assert_eq!(tally.games(), 6);
    assert_eq!(*tally.x_wins(), 0);
}

#[tokio::test]
async fn test_play_game_without_rendering() {
    let config = GameConfig::default().with_render(false);
    let outcome = play_game(&config, minimax(Mark::X, false), minimax(Mark::O, false))
        .await
        .unwrap();

    let mut tally = Tally::default();
    tally.record(outcome);
    assert_eq!(*tally.ties(), 1);
}
