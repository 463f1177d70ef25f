//! Game state module - one 2048 session
//!
//! A [`Session`] owns the board, the score, the best score and the seeded
//! tile spawner. It is an explicit value: callers hold it and drive it with
//! [`Session::step`] (or the lower-level `apply_move` / `spawn_random_tile`
//! pair). Nothing here reads a clock or touches global state.

use crate::board::{Board, MoveResult};
use crate::rng::TileSpawner;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Win/loss flags reported by [`Session::is_terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terminal {
    /// A 2048 tile has been reached in this game (sticky).
    pub won: bool,
    /// No move can change the board.
    pub lost: bool,
}

/// Everything that happened in one [`Session::step`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Turn {
    /// The slide result. When `changed`, `merges` also carries the spawn event.
    pub result: MoveResult,
    pub spawned: Option<Pos>,
    /// This turn reached 2048 for the first time.
    pub newly_won: bool,
    /// This turn left the board without any possible move.
    pub newly_lost: bool,
}

/// One game of 2048 plus the best score across restarts.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    spawner: TileSpawner,
    score: u32,
    best_score: u32,
    won: bool,
    /// Monotonic game id (increments on every new game).
    game_id: u32,
    /// Number of changed moves in the current game.
    moves: u32,
}

impl Session {
    /// Create a session and start its first game.
    pub fn new(seed: u32) -> Self {
        let mut session = Self::with_board(Board::new(), seed);
        session.new_game();
        session
    }

    /// Create a session on a prepared board, without spawning anything.
    ///
    /// Score starts at 0. Useful for puzzles, replays and tests.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            spawner: TileSpawner::new(seed),
            score: 0,
            best_score: 0,
            won: board.has_tile(WIN_TILE),
            game_id: 0,
            moves: 0,
        }
    }

    /// Reset to a fresh game: empty board, two random tiles, score 0.
    ///
    /// The best score and the RNG stream carry over.
    pub fn new_game(&mut self) {
        self.board.clear();
        for _ in 0..START_TILES {
            self.spawn_random_tile();
        }
        self.score = 0;
        self.won = false;
        self.moves = 0;
        self.game_id = self.game_id.wrapping_add(1);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }

    /// Slide all tiles in `direction`.
    ///
    /// When the result is not `changed`, nothing was mutated. This does not
    /// spawn a tile; see [`Session::step`].
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let (next, result) = self.board.slide(direction);
        if !result.changed {
            return result;
        }

        debug_assert_eq!(next.sum(), self.board.sum());
        self.board = next;
        self.score += result.score_delta;
        self.best_score = self.best_score.max(self.score);
        self.moves += 1;
        if self.board.has_tile(WIN_TILE) {
            self.won = true;
        }
        result
    }

    /// Put a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` without touching the board when it is full.
    pub fn spawn_random_tile(&mut self) -> Option<Pos> {
        self.spawner.spawn(&mut self.board).map(|(pos, _)| pos)
    }

    /// Current win/loss flags.
    pub fn is_terminal(&self) -> Terminal {
        Terminal {
            won: self.won || self.board.has_tile(WIN_TILE),
            lost: self.board.is_stuck(),
        }
    }

    pub fn status(&self) -> GameStatus {
        let t = self.is_terminal();
        if t.lost {
            GameStatus::Lost
        } else if t.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Play one turn: slide, and if anything changed spawn a tile and
    /// re-evaluate the win/loss flags.
    pub fn step(&mut self, direction: Direction) -> Turn {
        let before = self.is_terminal();
        let mut result = self.apply_move(direction);
        if !result.changed {
            return Turn {
                result,
                ..Turn::default()
            };
        }

        let spawned = self.spawn_random_tile();
        if let Some(cell) = spawned {
            result.merges.push(MergeEvent {
                cell,
                value: self.board.get(cell),
                is_newly_spawned: true,
            });
        }

        let after = self.is_terminal();
        Turn {
            result,
            spawned,
            newly_won: after.won && !before.won,
            newly_lost: after.lost && !before.lost,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let t = self.is_terminal();
        out.board = self.board.rows();
        out.score = self.score;
        out.best_score = self.best_score;
        out.won = t.won;
        out.lost = t.lost;
        out.game_id = self.game_id;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(row: [u32; GRID_SIZE]) -> Board {
        Board::from_rows([row, [0; GRID_SIZE], [0; GRID_SIZE], [0; GRID_SIZE]])
    }

    #[test]
    fn test_new_session_has_two_tiles() {
        let session = Session::new(12345);
        assert_eq!(session.board().empty_count(), CELL_COUNT - START_TILES);
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.game_id(), 1);
        for &v in session.board().cells() {
            assert!(v == 0 || v == 2 || v == 4);
        }
    }

    #[test]
    fn test_new_game_keeps_best_score() {
        let mut session = Session::with_board(row_board([2, 2, 4, 4]), 1);
        session.apply_move(Direction::Left);
        assert_eq!(session.score(), 12);
        assert_eq!(session.best_score(), 12);

        session.new_game();
        assert_eq!(session.score(), 0);
        assert_eq!(session.best_score(), 12);
        assert_eq!(session.game_id(), 1);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_unchanged_move_mutates_nothing() {
        let board = row_board([8, 4, 2, 0]);
        let mut session = Session::with_board(board, 3);
        let seed = session.seed();

        let turn = session.step(Direction::Left);
        assert!(!turn.result.changed);
        assert_eq!(turn.spawned, None);
        assert_eq!(*session.board(), board);
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        // No tile was drawn from the RNG either.
        assert_eq!(session.seed(), seed);
    }

    #[test]
    fn test_step_spawns_after_changed_move() {
        let mut session = Session::with_board(row_board([0, 0, 0, 2]), 5);
        let turn = session.step(Direction::Left);

        assert!(turn.result.changed);
        let spawned = turn.spawned.unwrap();
        assert_ne!(spawned, Pos::new(0, 0));
        assert_eq!(session.board().empty_count(), CELL_COUNT - 2);

        let spawn_event = turn.result.merges.last().unwrap();
        assert!(spawn_event.is_newly_spawned);
        assert_eq!(spawn_event.cell, spawned);
        assert_eq!(spawn_event.value, session.board().get(spawned));
    }

    #[test]
    fn test_win_is_sticky() {
        let mut session = Session::with_board(row_board([1024, 1024, 0, 0]), 1);
        let turn = session.step(Direction::Left);
        assert!(turn.newly_won);
        assert!(session.is_terminal().won);

        // Merge the 2048 away into 4096.
        let mut session = Session::with_board(row_board([2048, 2048, 0, 0]), 1);
        assert!(session.is_terminal().won);
        session.apply_move(Direction::Left);
        assert!(!session.board().has_tile(WIN_TILE));
        assert!(session.is_terminal().won);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_lost_detection() {
        let stuck = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let session = Session::with_board(stuck, 1);
        assert!(session.is_terminal().lost);
        assert_eq!(session.status(), GameStatus::Lost);

        let one_pair = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 4],
        ]);
        assert!(!Session::with_board(one_pair, 1).is_terminal().lost);
    }

    #[test]
    fn test_lost_takes_priority_over_won_in_status() {
        let board = Board::from_rows([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let session = Session::with_board(board, 1);
        let t = session.is_terminal();
        assert!(t.won && t.lost);
        assert_eq!(session.status(), GameStatus::Lost);
    }

    #[test]
    fn test_snapshot_copies_state() {
        let mut session = Session::with_board(row_board([2, 2, 4, 4]), 1);
        session.apply_move(Direction::Right);
        let snap = session.snapshot();
        assert_eq!(snap.board[0], [0, 0, 4, 8]);
        assert_eq!(snap.score, 12);
        assert_eq!(snap.best_score, 12);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.max_tile, 8);
        assert!(!snap.won);
        assert!(!snap.lost);
    }
}
