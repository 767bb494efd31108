use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Only a restart leaves a finished state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from first click to win or loss, restartable in place.
///
/// Every action runs to completion before returning, so a restart can never observe a
/// half-finished cascade.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    started: bool,
    elapsed_seconds: u32,
    flags_remaining: i32,
    flag_mode: bool,
    triggered_mine: Option<Coord2>,
    rng: SmallRng,
}

impl GameSession {
    /// Starts a game with randomly placed mines; `seed` drives this and every later restart.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = new_board(config, &mut RandomMinePlacer::from_rng(&mut rng))?;
        Ok(Self::from_board(board, rng))
    }

    /// Starts a game whose layout comes from `placer`. Later random restarts use a fixed seed.
    pub fn with_placer<P: MinePlacer + ?Sized>(
        config: GameConfig,
        placer: &mut P,
    ) -> Result<Self> {
        let board = new_board(config, placer)?;
        Ok(Self::from_board(board, SmallRng::seed_from_u64(0)))
    }

    fn from_board(board: Board, rng: SmallRng) -> Self {
        Self {
            flags_remaining: i32::from(board.mine_count()),
            board,
            status: GameStatus::InProgress,
            started: false,
            elapsed_seconds: 0,
            flag_mode: false,
            triggered_mine: None,
            rng,
        }
    }

    /// Throws the current game away and deals a new random board; legal in any status.
    ///
    /// On error the current game is left untouched.
    pub fn restart(&mut self, config: GameConfig) -> Result<()> {
        let mut placer = RandomMinePlacer::from_rng(&mut self.rng);
        self.restart_with(config, &mut placer)
    }

    pub fn restart_with<P: MinePlacer + ?Sized>(
        &mut self,
        config: GameConfig,
        placer: &mut P,
    ) -> Result<()> {
        let board = new_board(config, placer)?;
        log::debug!(
            "Restarting as {}x{} with {} mines",
            config.rows,
            config.columns,
            config.mines
        );
        self.flags_remaining = i32::from(board.mine_count());
        self.board = board;
        self.status = GameStatus::InProgress;
        self.started = false;
        self.elapsed_seconds = 0;
        self.triggered_mine = None;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Starts at the mine count and moves only when the player places or removes a flag.
    ///
    /// Flags dropped by a cascade or covered by a loss are not credited back. Goes negative
    /// once the player over-flags.
    pub fn flags_remaining(&self) -> i32 {
        self.flags_remaining
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.cell_at(coords)
    }

    pub fn flag_mode(&self) -> bool {
        self.flag_mode
    }

    pub fn set_flag_mode(&mut self, flag_mode: bool) {
        self.flag_mode = flag_mode;
    }

    pub fn toggle_flag_mode(&mut self) -> bool {
        self.flag_mode = !self.flag_mode;
        self.flag_mode
    }

    /// A plain click: flags in flag mode, reveals otherwise.
    pub fn click(&mut self, coords: Coord2) -> Result<Turn> {
        if self.flag_mode {
            self.toggle_flag(coords)
        } else {
            self.reveal(coords)
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Turn> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            return Ok(self.turn(Vec::new(), None));
        }

        let cell = self.board[coords];
        if !matches!(cell.state(), CellState::Hidden) {
            return Ok(self.turn(Vec::new(), None));
        }

        self.started = true;
        if cell.has_mine() {
            return Ok(self.lose(coords));
        }

        let mut updates = Vec::new();
        let outcome = reveal_single(&mut self.board, coords, &mut updates)?;
        if outcome.adjacent_mine_count == 0 {
            cascade(&mut self.board, coords, &mut updates)?;
        }

        let event = self.check_win();
        Ok(self.turn(updates, event))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<Turn> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            return Ok(self.turn(Vec::new(), None));
        }

        let (state, delta) = match self.board[coords].state() {
            CellState::Hidden => (CellState::Flagged, -1),
            CellState::Flagged => (CellState::Hidden, 1),
            CellState::Revealed(_) | CellState::Exploded => {
                return Ok(self.turn(Vec::new(), None));
            }
        };
        self.board.set_state(coords, state);
        self.flags_remaining += delta;
        log::trace!(
            "Flag toggled at {:?}, {} flags remaining",
            coords,
            self.flags_remaining()
        );

        Ok(self.turn(Vec::from([CellUpdate { coords, state }]), None))
    }

    /// Transitions to [`GameStatus::Won`] once every safe cell is revealed.
    ///
    /// Returns the win event only on the call that makes the transition, so it can be polled.
    pub fn check_win(&mut self) -> Option<GameEvent> {
        if self.status.is_finished() {
            return None;
        }
        if self.board.revealed_count() != self.board.safe_cell_count() {
            return None;
        }

        self.status = GameStatus::Won;
        log::debug!("Game won after {} seconds", self.elapsed_seconds);
        Some(GameEvent::GameWon {
            elapsed_seconds: self.elapsed_seconds,
        })
    }

    /// Advances the clock by one second while a started game is still running.
    pub fn tick(&mut self) -> u32 {
        if self.started && !self.status.is_finished() {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
        self.elapsed_seconds
    }

    fn lose(&mut self, triggered: Coord2) -> Turn {
        self.status = GameStatus::Lost;
        self.triggered_mine = Some(triggered);

        let mine_locations = self.board.mine_locations();
        let mut updates = Vec::with_capacity(mine_locations.len());
        for &coords in &mine_locations {
            self.board.set_state(coords, CellState::Exploded);
            updates.push(CellUpdate {
                coords,
                state: CellState::Exploded,
            });
        }

        log::debug!(
            "Game lost on mine {:?} after {} seconds",
            triggered,
            self.elapsed_seconds
        );
        self.turn(
            updates,
            Some(GameEvent::GameOver {
                mine_locations,
                triggered,
            }),
        )
    }

    fn turn(&self, updates: Vec<CellUpdate>, event: Option<GameEvent>) -> Turn {
        Turn {
            status: self.status,
            updates,
            flags_remaining: self.flags_remaining(),
            event,
        }
    }
}

fn new_board<P: MinePlacer + ?Sized>(config: GameConfig, placer: &mut P) -> Result<Board> {
    let mut board = Board::from_config(config)?;
    board.place_mines(placer)?;
    Ok(board)
}
