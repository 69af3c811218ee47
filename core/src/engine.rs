use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// The authoritative game state: board, cat position, status, and move
/// counter. Every mutation happens behind `&mut self` as a whole; a partially
/// applied move is never observable. `Won` and `Lost` are terminal, so all
/// further mutating calls are no-ops until the caller starts a fresh game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatGame {
    board: Board,
    cat: Coord2,
    state: GameState,
    move_count: Saturating<CellCount>,
}

impl CatGame {
    /// Wrap a board holding exactly one cat cell. The initial state is always
    /// `Playing`; a seeded position that already decides the game resolves on
    /// the first player action.
    pub fn new(board: Board) -> Result<Self> {
        let mut cats = board.cat_cells();
        let cat = cats.next().ok_or(GameError::MissingCat)?;
        if cats.next().is_some() {
            return Err(GameError::MultipleCats);
        }

        Ok(Self {
            board,
            cat,
            state: GameState::Playing,
            move_count: Saturating(0),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn cat(&self) -> Coord2 {
        self.cat
    }

    pub fn move_count(&self) -> CellCount {
        self.move_count.0
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    /// Place a blocker on an open cell, then let the cat respond with one
    /// step. Placing on a blocked or cat-occupied cell, or after the game has
    /// ended, changes nothing.
    pub fn place_blocker(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() || !self.board[coords].is_open() {
            return Ok(MoveOutcome::NoChange);
        }

        self.board[coords] = Cell::Blocked;
        self.move_count += 1;
        Ok(self.advance_cat())
    }

    /// Pre-place a blocker on the cat's next intended step, as a player aid.
    /// The cat does not move and no move is counted. When the current
    /// position already decides the game, only the state is updated.
    pub fn request_hint(&mut self) -> Result<HintOutcome> {
        if self.state.is_finished() {
            return Ok(HintOutcome::NoChange);
        }

        let Some(route) = find_escape(&self.board, self.cat) else {
            self.state = GameState::Won;
            return Ok(HintOutcome::Trapped);
        };
        let Some(step) = route.next_step() else {
            self.state = GameState::Lost;
            return Ok(HintOutcome::Escaped);
        };

        if !self.board[step].is_open() {
            return Ok(HintOutcome::NoChange);
        }

        let mut preview = self.board.clone();
        preview[step] = Cell::Blocked;
        let state = match find_escape(&preview, self.cat) {
            None => GameState::Won,
            Some(route) if route.next_step().is_none() => GameState::Lost,
            Some(_) => GameState::Playing,
        };

        self.board = preview;
        self.state = state;
        Ok(match state {
            GameState::Won => HintOutcome::Trapped,
            GameState::Lost => HintOutcome::Escaped,
            GameState::Playing => HintOutcome::Placed(step),
        })
    }

    /// One cat response: follow the shortest escape route by a single step.
    fn advance_cat(&mut self) -> MoveOutcome {
        let Some(route) = find_escape(&self.board, self.cat) else {
            self.state = GameState::Won;
            return MoveOutcome::Trapped;
        };
        let Some(next_step) = route.next_step() else {
            // Already sitting on the border; nothing left to chase.
            self.state = GameState::Lost;
            return MoveOutcome::Escaped;
        };

        self.board[self.cat] = Cell::Open;
        self.board[next_step] = Cell::Cat;
        self.cat = next_step;

        if self.board.is_edge(next_step) {
            self.state = GameState::Lost;
            MoveOutcome::Escaped
        } else {
            MoveOutcome::Advanced
        }
    }
}
