//! The game aggregate: two sides, an append-only turn history, and the
//! queries derived from it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::config::Difficulty;
use crate::ship::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Bot,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Bot,
            Player::Bot => Player::Human,
        }
    }
}

/// One recorded shot. Turns are append-only and authoritative: turn order,
/// sunk ships and the win condition are all derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based, contiguous within a game.
    pub number: u32,
    pub player: Player,
    pub target: Coordinate,
    pub hit: bool,
}

/// Derived phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    AwaitingShips,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub human: Side,
    pub bot: Side,
    pub turns: Vec<Turn>,
    pub difficulty: Difficulty,
    pub winner: Option<Player>,
}

impl Game {
    /// A fresh game: no ships, no turns, no winner.
    pub fn new(id: u64, difficulty: Difficulty) -> Self {
        Self {
            id,
            human: Side::new(),
            bot: Side::new(),
            turns: Vec::new(),
            difficulty,
            winner: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.winner.is_some() {
            GameStatus::Complete
        } else if self.human.is_empty() {
            GameStatus::AwaitingShips
        } else {
            GameStatus::InProgress
        }
    }

    pub fn side(&self, player: Player) -> &Side {
        match player {
            Player::Human => &self.human,
            Player::Bot => &self.bot,
        }
    }

    pub fn side_mut(&mut self, player: Player) -> &mut Side {
        match player {
            Player::Human => &mut self.human,
            Player::Bot => &mut self.bot,
        }
    }

    /// Whose turn it is, recomputed from the history every time: nobody
    /// has shot yet means the human begins; the latest shot was a hit
    /// means the same player goes again; a miss means the turn passed.
    pub fn next_shooter(&self) -> Player {
        match self.turns.last() {
            None => Player::Human,
            Some(turn) if turn.hit => turn.player,
            Some(turn) => turn.player.opponent(),
        }
    }

    /// Every coordinate `player` has fired at so far.
    pub fn shots_by(&self, player: Player) -> BTreeSet<Coordinate> {
        self.turns
            .iter()
            .filter(|turn| turn.player == player)
            .map(|turn| turn.target)
            .collect()
    }

    pub fn has_shot(&self, player: Player, target: Coordinate) -> bool {
        self.turns
            .iter()
            .any(|turn| turn.player == player && turn.target == target)
    }

    /// Whether `shooter` has hit every cell of the opposing fleet.
    pub fn is_won_by(&self, shooter: Player) -> bool {
        let defender = self.side(shooter.opponent());
        !defender.is_empty() && defender.ship_cells().is_subset(&self.shots_by(shooter))
    }
}
