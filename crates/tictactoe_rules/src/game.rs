//! The persisted game entity and its serialization view.

use crate::coordinate::Coordinate;
use crate::error::MoveError;
use crate::rules;
use crate::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};

/// A single game of tic-tac-toe against the random CPU opponent.
///
/// Only the fields here are persisted. Board, available spots, and outcome
/// are computed accessors over the append-only `moves` list, recomputed on
/// every read so they can never diverge from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    game_id: String,
    player_id: String,
    human_plays_as: Mark,
    #[serde(default)]
    moves: Vec<Coordinate>,
}

impl Game {
    /// Creates a game with an empty move list. Construction goes through
    /// [`SessionController::create_game`](crate::SessionController::create_game),
    /// which owns id generation and the random mark assignment.
    pub(crate) fn new(game_id: String, player_id: String, human_plays_as: Mark) -> Self {
        Self {
            game_id,
            player_id,
            human_plays_as,
            moves: Vec::new(),
        }
    }

    /// Opaque unique game identifier.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Identifier of the owning player.
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// The mark the human plays as, fixed at creation. The CPU plays the
    /// other mark.
    pub fn human_plays_as(&self) -> Mark {
        self.human_plays_as
    }

    /// The ordered move list, the sole source of truth for board state.
    pub fn moves(&self) -> &[Coordinate] {
        &self.moves
    }

    /// The board derived by replaying the move list.
    pub fn board(&self) -> Board {
        rules::board(&self.moves)
    }

    /// Currently empty spots, in row-major order.
    pub fn available_spots(&self) -> Vec<Coordinate> {
        rules::available(&self.moves)
    }

    /// The derived game classification.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.moves, self.human_plays_as)
    }

    /// Appends a move after checking occupancy. Occupancy is the only
    /// validation: turn order is already encoded by index parity.
    pub(crate) fn add_move(&mut self, coordinate: Coordinate) -> Result<(), MoveError> {
        if self.moves.contains(&coordinate) {
            return Err(MoveError::InvalidMove { coordinate });
        }
        self.moves.push(coordinate);
        Ok(())
    }

    /// Appends a move known to be vacant (drawn from the available set).
    pub(crate) fn push_unchecked(&mut self, coordinate: Coordinate) {
        self.moves.push(coordinate);
    }

    /// Builds the full serialization view, recomputing the derived fields.
    pub fn view(&self) -> GameView {
        GameView {
            game_id: self.game_id.clone(),
            player_id: self.player_id.clone(),
            human_plays_as: self.human_plays_as,
            moves: self.moves.clone(),
            game_state: self.board(),
            available_spots: self.available_spots(),
            game_result: self.outcome(),
        }
    }
}

/// Full wire representation of a game: the stored fields plus the three
/// derived fields, always recomputed from the move list.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    /// Opaque unique game identifier.
    pub game_id: String,
    /// Identifier of the owning player.
    pub player_id: String,
    /// The human's mark.
    pub human_plays_as: Mark,
    /// The ordered move list.
    pub moves: Vec<Coordinate>,
    /// Derived board grid.
    pub game_state: Board,
    /// Derived empty spots.
    pub available_spots: Vec<Coordinate>,
    /// Derived outcome.
    pub game_result: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(x: u8, y: u8) -> Coordinate {
        Coordinate::new(x, y).unwrap()
    }

    fn game_with_moves(moves: &[Coordinate]) -> Game {
        let mut game = Game::new("g-1".into(), "p-1".into(), Mark::X);
        for mv in moves {
            game.add_move(*mv).unwrap();
        }
        game
    }

    #[test]
    fn test_add_move_rejects_occupied_spot() {
        let mut game = game_with_moves(&[spot(1, 1)]);
        let before = game.moves().to_vec();

        let err = game.add_move(spot(1, 1)).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                coordinate: spot(1, 1)
            }
        );
        assert_eq!(game.moves(), before.as_slice());
    }

    #[test]
    fn test_available_spots_decrease_after_moves() {
        let mut game = game_with_moves(&[]);
        let before = game.available_spots().len();

        game.add_move(spot(0, 0)).unwrap();
        let after = game.available_spots();

        assert_eq!(after.len(), before - 1);
        assert!(!after.contains(&spot(0, 0)));
    }

    #[test]
    fn test_derived_accessors_are_pure() {
        let game = game_with_moves(&[spot(0, 0), spot(1, 0), spot(2, 2)]);
        assert_eq!(game.board(), game.board());
        assert_eq!(game.available_spots(), game.available_spots());
        assert_eq!(game.outcome(), game.outcome());
    }

    #[test]
    fn test_stored_serialization_excludes_derived_fields() {
        let game = game_with_moves(&[spot(1, 1)]);
        let json = serde_json::to_value(&game).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("game_id"));
        assert!(object.contains_key("player_id"));
        assert!(object.contains_key("human_plays_as"));
        assert!(object.contains_key("moves"));
    }

    #[test]
    fn test_view_includes_derived_fields() {
        let game = game_with_moves(&[spot(1, 1)]);
        let json = serde_json::to_value(game.view()).unwrap();

        assert_eq!(json["game_id"], "g-1");
        assert_eq!(json["human_plays_as"], "X");
        assert_eq!(json["game_state"][1][1], "X");
        assert_eq!(json["game_result"], "ongoing");
        assert_eq!(json["available_spots"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_stored_roundtrip_preserves_moves() {
        let game = game_with_moves(&[spot(0, 0), spot(2, 1)]);
        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
    }
}
