//! Game session controller: move validation and CPU orchestration.

use crate::chance::Randomness;
use crate::coordinate::Coordinate;
use crate::error::MoveError;
use crate::game::Game;
use crate::types::Mark;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Orchestrates a single game's lifecycle: creation with random mark
/// assignment, human move validation, and the CPU's uniform-random replies.
///
/// The controller holds no per-game state; each call operates on the game it
/// is given. Per-game consistency under concurrent requests is the storage
/// collaborator's concern, not handled here.
#[derive(Debug)]
pub struct SessionController<R> {
    randomness: R,
}

impl<R: Randomness> SessionController<R> {
    /// Creates a controller around the given randomness source.
    pub fn new(randomness: R) -> Self {
        Self { randomness }
    }

    /// Creates a new game for `player_id` with a fresh id and a uniformly
    /// random mark assignment. When the human draws `O`, crosses open, so
    /// the CPU places its first move before the game is handed over. The
    /// board is empty at that point, so no outcome check is needed.
    #[instrument(skip(self, player_id))]
    pub fn create_game(&mut self, player_id: impl Into<String>) -> Game {
        let game_id = Uuid::new_v4().to_string();
        let human_plays_as = self.randomness.mark();
        let mut game = Game::new(game_id, player_id.into(), human_plays_as);

        info!(
            game_id = %game.game_id(),
            human_plays_as = ?human_plays_as,
            "Game created"
        );

        if human_plays_as == Mark::O {
            self.apply_cpu_random_move(&mut game)
                .expect("empty board always has an available spot");
        }

        game
    }

    /// Applies the human's move and, while the game is still ongoing
    /// afterwards, one CPU reply.
    ///
    /// Occupancy is the only validation: a move onto a taken spot fails with
    /// [`MoveError::InvalidMove`] and leaves the game untouched. A human
    /// move that ends the game is never answered, so the move list grows by
    /// exactly one in that case and by two otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the spot is already taken.
    #[instrument(skip(self, game), fields(game_id = %game.game_id()))]
    pub fn apply_human_move(
        &mut self,
        game: &mut Game,
        coordinate: Coordinate,
    ) -> Result<(), MoveError> {
        game.add_move(coordinate)?;
        debug!(
            x = coordinate.x(),
            y = coordinate.y(),
            moves = game.moves().len(),
            "Human move applied"
        );

        if game.outcome().is_ongoing() {
            self.apply_cpu_random_move(game)?;
        }

        Ok(())
    }

    /// Appends one CPU move chosen uniformly at random among the available
    /// spots.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMoves`] if the board is full.
    #[instrument(skip(self, game), fields(game_id = %game.game_id()))]
    pub fn apply_cpu_random_move(&mut self, game: &mut Game) -> Result<(), MoveError> {
        let available = game.available_spots();
        if available.is_empty() {
            return Err(MoveError::NoAvailableMoves);
        }

        let choice = available[self.randomness.index(available.len())];
        // Drawn from the available set, so it cannot collide.
        game.push_unchecked(choice);
        debug!(
            x = choice.x(),
            y = choice.y(),
            moves = game.moves().len(),
            "CPU move applied"
        );

        Ok(())
    }
}
