//! Click-driven turn and selection handling.
//!
//! `GameState` holds who is on turn, which square is picked up and which side
//! was last flagged in check. Every click is a transition that takes the state
//! and the board and hands back the next state plus what changed, so the
//! rendering side only has to redraw according to the outcomes.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::{Board, Move, Piece, Side, Square};
use crate::error::{MoveError, MoveResult};
use crate::move_generation::{check_after_move, is_move_legal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Recompute the check flag after every applied move.
    pub detect_check: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { detect_check: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed. Carries the reason the click was rejected.
    Ignored(MoveError),
    Selected(Square),
    Unselected(Square),
    MoveApplied { from: Square, to: Square, captured: Option<Piece> },
    NewTurn(Side),
    CheckFlag(Option<Side>),
}

/// A click yields one outcome, or three when it completes a move.
pub type Outcomes = ArrayVec<MoveOutcome, 3>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub turn: Side,
    pub selection: Option<Square>,
    pub check: Option<Side>,
}

impl Default for GameState {
    fn default() -> Self {
        Self { turn: Side::White, selection: None, check: None }
    }
}

impl GameState {
    pub fn on_square_clicked(self, board: &mut Board, square: Square, config: &GameConfig) -> (GameState, Outcomes) {
        let result = match self.selection {
            None => self.select(board, square).map(|state| (state, single(MoveOutcome::Selected(square)))),
            Some(from) if from == square => {
                debug!(%square, "unselected");
                Ok((GameState { selection: None, ..self }, single(MoveOutcome::Unselected(square))))
            }
            Some(from) => self.validate_move(board, from, square).map(|_| self.apply_move(board, from, square, config)),
        };
        result.unwrap_or_else(|error| {
            trace!(%square, %error, "click ignored");
            (self, single(MoveOutcome::Ignored(error)))
        })
    }

    fn select(self, board: &Board, square: Square) -> MoveResult<GameState> {
        if !square.is_in_bounds() {
            return Err(MoveError::OutOfBoundsSquare(square));
        }
        let piece = board.get(square).ok_or(MoveError::NoPieceAtSource(square))?;
        if piece.side != self.turn {
            return Err(MoveError::WrongTurnColor { square, side: piece.side });
        }
        debug!(%square, %piece, "selected");
        Ok(GameState { selection: Some(square), ..self })
    }
    fn validate_move(&self, board: &Board, from: Square, to: Square) -> MoveResult<()> {
        if !to.is_in_bounds() {
            return Err(MoveError::OutOfBoundsSquare(to));
        }
        if !is_move_legal(board, from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(())
    }
    fn apply_move(self, board: &mut Board, from: Square, to: Square, config: &GameConfig) -> (GameState, Outcomes) {
        let captured = board.move_piece(from, to);
        let turn = self.turn.enemy();
        let check = if config.detect_check { check_after_move(board, self.turn) } else { None };
        debug!(mov = %Move::new(from, to), ?captured, next = %turn, ?check, "move applied");

        let mut outcomes = Outcomes::new();
        outcomes.push(MoveOutcome::MoveApplied { from, to, captured });
        outcomes.push(MoveOutcome::NewTurn(turn));
        outcomes.push(MoveOutcome::CheckFlag(check));
        (GameState { turn, selection: None, check }, outcomes)
    }
}

fn single(outcome: MoveOutcome) -> Outcomes {
    let mut outcomes = Outcomes::new();
    outcomes.push(outcome);
    outcomes
}

/// A board together with the turn and selection state that drives it.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(Board::start_pos(), Side::White, config)
    }
    /// Starts from an arbitrary position with `turn` to move.
    pub fn from_board(board: Board, turn: Side, config: GameConfig) -> Self {
        Self { board, state: GameState { turn, ..GameState::default() }, config }
    }

    pub fn square_clicked(&mut self, square: Square) -> Outcomes {
        let (state, outcomes) = self.state.on_square_clicked(&mut self.board, square, &self.config);
        self.state = state;
        outcomes
    }
    /// Selects `mov.from` and moves it to `mov.to` in one go. On error the
    /// game, including any current selection, is left untouched.
    pub fn play(&mut self, mov: Move) -> MoveResult<Outcomes> {
        let selected = GameState { selection: None, ..self.state }.select(&self.board, mov.from)?;
        selected.validate_move(&self.board, mov.from, mov.to)?;
        let (state, outcomes) = selected.apply_move(&mut self.board, mov.from, mov.to, &self.config);
        self.state = state;
        Ok(outcomes)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn state(&self) -> GameState {
        self.state
    }
    pub fn turn(&self) -> Side {
        self.state.turn
    }
    pub fn selection(&self) -> Option<Square> {
        self.state.selection
    }
    pub fn check(&self) -> Option<Side> {
        self.state.check
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceType;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }
    fn only(outcomes: Outcomes) -> MoveOutcome {
        assert_eq!(outcomes.len(), 1, "{outcomes:?}");
        outcomes[0]
    }

    #[test]
    fn initial_state() {
        let game = Game::default();
        assert_eq!(game.state(), GameState { turn: Side::White, selection: None, check: None });
        assert_eq!(game.board(), &Board::start_pos());
        assert_eq!(game.piece_at(sq("e1")), Some(Piece::new(PieceType::King, Side::White)));
    }
    #[test]
    fn opening_scenario() {
        let mut game = Game::default();

        assert_eq!(only(game.square_clicked(Square::new(6, 4))), MoveOutcome::Selected(Square::new(6, 4)));
        let outcomes = game.square_clicked(Square::new(4, 4));
        assert_eq!(
            outcomes.as_slice(),
            [
                MoveOutcome::MoveApplied { from: Square::new(6, 4), to: Square::new(4, 4), captured: None },
                MoveOutcome::NewTurn(Side::Black),
                MoveOutcome::CheckFlag(None),
            ]
        );
        assert_eq!(game.turn(), Side::Black);
        assert_eq!(game.piece_at(Square::new(4, 4)), Some(Piece::new(PieceType::Pawn, Side::White)));
        assert_eq!(game.piece_at(Square::new(6, 4)), None);

        assert_eq!(only(game.square_clicked(Square::new(1, 3))), MoveOutcome::Selected(Square::new(1, 3)));
        let outcomes = game.square_clicked(Square::new(3, 3));
        assert_eq!(outcomes[0], MoveOutcome::MoveApplied { from: Square::new(1, 3), to: Square::new(3, 3), captured: None });
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.selection(), None);
    }
    #[test]
    fn clicking_empty_square_without_selection_is_ignored() {
        let mut game = Game::default();
        assert_eq!(only(game.square_clicked(sq("e4"))), MoveOutcome::Ignored(MoveError::NoPieceAtSource(sq("e4"))));
        assert_eq!(game.state(), GameState::default());
    }
    #[test]
    fn cannot_select_opponent_piece() {
        let mut game = Game::default();
        let outcome = only(game.square_clicked(sq("e7")));
        assert_eq!(outcome, MoveOutcome::Ignored(MoveError::WrongTurnColor { square: sq("e7"), side: Side::Black }));
        assert_eq!(game.selection(), None);
    }
    #[test]
    fn off_board_clicks_are_ignored() {
        let mut game = Game::default();
        let outside = Square::new(8, 0);
        assert_eq!(only(game.square_clicked(outside)), MoveOutcome::Ignored(MoveError::OutOfBoundsSquare(outside)));

        game.square_clicked(sq("b1"));
        let outside = Square::new(-2, 3);
        assert_eq!(only(game.square_clicked(outside)), MoveOutcome::Ignored(MoveError::OutOfBoundsSquare(outside)));
        assert_eq!(game.selection(), Some(sq("b1")));
    }
    #[test]
    fn clicking_selection_again_unselects() {
        let mut game = Game::default();
        game.square_clicked(sq("g1"));
        assert_eq!(only(game.square_clicked(sq("g1"))), MoveOutcome::Unselected(sq("g1")));
        assert_eq!(game.state(), GameState::default());
    }
    #[test]
    fn illegal_destination_keeps_selection() {
        let mut game = Game::default();
        game.square_clicked(sq("g1"));
        let before = game.board().clone();

        let outcome = only(game.square_clicked(sq("g3")));
        assert_eq!(outcome, MoveOutcome::Ignored(MoveError::IllegalMove { from: sq("g1"), to: sq("g3") }));
        // another own piece is just an illegal destination
        let outcome = only(game.square_clicked(sq("e2")));
        assert_eq!(outcome, MoveOutcome::Ignored(MoveError::IllegalMove { from: sq("g1"), to: sq("e2") }));

        assert_eq!(game.selection(), Some(sq("g1")));
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.board(), &before);

        game.square_clicked(sq("f3"));
        assert_eq!(game.piece_at(sq("f3")), Some(Piece::new(PieceType::Knight, Side::White)));
    }
    #[test]
    fn turn_alternates_only_on_applied_moves() {
        let mut game = Game::default();
        let moves = ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6"];
        for mov in moves {
            let before = game.turn();
            let from = sq(&mov[0..2]);
            let to = sq(&mov[2..4]);

            game.square_clicked(from);
            game.square_clicked(from);
            assert_eq!(game.turn(), before);
            game.square_clicked(sq("d4"));
            assert_eq!(game.turn(), before);

            game.square_clicked(from);
            let outcomes = game.square_clicked(to);
            assert!(matches!(outcomes[0], MoveOutcome::MoveApplied { .. }), "{mov}: {outcomes:?}");
            assert_eq!(game.turn(), before.enemy());
        }
    }
    #[test]
    fn capture_reports_captured_piece() {
        let mut game = Game::default();
        for mov in ["e2e4", "d7d5"] {
            game.play(mov.parse().unwrap()).unwrap();
        }
        game.square_clicked(sq("e4"));
        let outcomes = game.square_clicked(sq("d5"));
        assert_eq!(outcomes[0], MoveOutcome::MoveApplied { from: sq("e4"), to: sq("d5"), captured: Some(Piece::new(PieceType::Pawn, Side::Black)) });
        assert_eq!(game.board().pieces(Side::Black).count(), 15);
    }
    #[test]
    fn check_flag_follows_attacks_on_the_king() {
        // queen checks along the diagonal, the king steps aside
        let board = Board::from_fen("4k3/8/8/8/8/8/3P4/3QK3").unwrap();
        let mut game = Game::from_board(board, Side::White, GameConfig::default());

        let outcomes = game.play("d1a4".parse().unwrap()).unwrap();
        assert_eq!(outcomes[2], MoveOutcome::CheckFlag(Some(Side::Black)));
        assert_eq!(game.check(), Some(Side::Black));

        let outcomes = game.play("e8d8".parse().unwrap()).unwrap();
        assert_eq!(outcomes[2], MoveOutcome::CheckFlag(None));
        assert_eq!(game.check(), None);
    }
    #[test]
    fn check_detection_can_be_disabled() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3").unwrap();
        let mut game = Game::from_board(board, Side::White, GameConfig { detect_check: false });
        let outcomes = game.play("d1a4".parse().unwrap()).unwrap();
        assert_eq!(outcomes[2], MoveOutcome::CheckFlag(None));
        assert_eq!(game.check(), None);
    }
    #[test]
    fn failed_play_leaves_game_untouched() {
        let mut game = Game::default();
        game.square_clicked(sq("b1"));
        let before = game.state();

        assert_eq!(game.play("e2e5".parse().unwrap()), Err(MoveError::IllegalMove { from: sq("e2"), to: sq("e5") }));
        assert_eq!(game.play("e7e5".parse().unwrap()), Err(MoveError::WrongTurnColor { square: sq("e7"), side: Side::Black }));
        assert_eq!(game.play("e4e5".parse().unwrap()), Err(MoveError::NoPieceAtSource(sq("e4"))));
        assert_eq!(game.state(), before);
        assert_eq!(game.board(), &Board::start_pos());

        game.play("e2e4".parse().unwrap()).unwrap();
        assert_eq!(game.selection(), None);
        assert_eq!(game.turn(), Side::Black);
    }
    #[test]
    fn transitions_are_plain_values() {
        let mut board = Board::start_pos();
        let config = GameConfig::default();
        let state = GameState::default();

        let (selected, _) = state.on_square_clicked(&mut board, sq("d2"), &config);
        assert_eq!(selected.selection, Some(sq("d2")));
        assert_eq!(state.selection, None);

        let (moved, outcomes) = selected.on_square_clicked(&mut board, sq("d4"), &config);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(moved, GameState { turn: Side::Black, selection: None, check: None });
        assert!(board.is_occupied(sq("d4")));
    }
}
