//! Error taxonomy shared across the engine.

use thiserror::Error;

/// Why a fleet placement was rejected or could not be produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship counts, bounds or clearance rules were violated.
    #[error("fleet violates count, bounds or clearance rules")]
    InvalidFleet,
    /// The game already has its ships.
    #[error("ships have already been placed for this game")]
    AlreadyPlaced,
    /// The anchor scan was exhausted: the board cannot hold the configured
    /// fleet. A configuration error, never retried internally.
    #[error("no valid position exists for the configured fleet on this board")]
    Unplaceable,
}

/// Why a shot request was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    #[error("the game is already over")]
    GameOver,
    #[error("ships must be placed before shooting")]
    ShipsNotPlaced,
    #[error("the target coordinate is outside the board")]
    OutOfBounds,
    #[error("this coordinate was already targeted by the acting player")]
    AlreadyShot,
}

/// Top-level engine error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("game {id} does not exist")]
    NotFound { id: u64 },
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Shot(#[from] ShotError),
}
