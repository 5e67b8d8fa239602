//! Shot resolution, placement acceptance and the game state machine.

use rand::Rng;

use crate::bot::{BotGunner, BotPlacer};
use crate::common::{GameError, PlacementError, ShotError};
use crate::config::{Difficulty, GameConfig};
use crate::game::{Game, GameStatus, Player, Turn};
use crate::placement::PlacementValidator;
use crate::ship::{Coordinate, Ship};
use crate::store::GameStore;

/// The rules engine. Owns the persistence collaborator and the bot
/// strategies; every randomized operation draws from the caller's RNG.
pub struct Engine<S: GameStore> {
    store: S,
    config: GameConfig,
    validator: PlacementValidator,
    placer: BotPlacer,
    gunner: BotGunner,
}

impl<S: GameStore> Engine<S> {
    pub fn new(store: S, config: GameConfig) -> Self {
        Self {
            validator: PlacementValidator::new(config.clone()),
            placer: BotPlacer::new(config.clone()),
            gunner: BotGunner::new(config.clone()),
            store,
            config,
        }
    }

    /// Create an empty game. `None` falls back to the default difficulty.
    pub fn create_game(&mut self, difficulty: Option<Difficulty>) -> Game {
        let game = self
            .store
            .create(Game::new(0, difficulty.unwrap_or_default()));
        log::debug!("created game {} ({:?})", game.id, game.difficulty);
        game
    }

    pub fn games(&self) -> Vec<Game> {
        self.store.all()
    }

    pub fn game(&self, id: u64) -> Result<Game, GameError> {
        self.store.find(id).ok_or(GameError::NotFound { id })
    }

    /// Validate and install the human fleet, then let the bot place its
    /// own. Moves the game from `AwaitingShips` to `InProgress`; on any
    /// rejection the game is left untouched.
    pub fn place_ships<R: Rng>(
        &mut self,
        rng: &mut R,
        id: u64,
        ships: Vec<Ship>,
    ) -> Result<Game, GameError> {
        let mut game = self.game(id)?;
        if game.status() != GameStatus::AwaitingShips {
            return Err(PlacementError::AlreadyPlaced.into());
        }
        if !self.validator.is_fleet_valid(&ships) {
            return Err(PlacementError::InvalidFleet.into());
        }

        let human_fleet: Vec<Ship> = ships
            .into_iter()
            .enumerate()
            .map(|(i, ship)| Ship::new(i as u32 + 1, ship.kind, ship.orientation, ship.anchor))
            .collect();
        let next_id = human_fleet.len() as u32 + 1;
        let bot_fleet = self.placer.place_fleet(rng, next_id)?;
        game.human.set_ships(human_fleet);
        game.bot.set_ships(bot_fleet);
        log::info!("game {}: fleets placed, battle begins", game.id);
        Ok(self.store.save(game))
    }

    /// Resolve a shot request at `target`. A hit keeps the turn with the
    /// shooter; a miss hands the turn to the bot, which keeps firing until
    /// it misses or wins. The whole chain commits in a single save.
    pub fn shoot<R: Rng>(
        &mut self,
        rng: &mut R,
        id: u64,
        target: Coordinate,
    ) -> Result<Game, GameError> {
        let mut game = self.game(id)?;
        match game.status() {
            GameStatus::Complete => return Err(ShotError::GameOver.into()),
            GameStatus::AwaitingShips => return Err(ShotError::ShipsNotPlaced.into()),
            GameStatus::InProgress => {}
        }
        if !self.config.in_bounds(target) {
            return Err(ShotError::OutOfBounds.into());
        }
        let shooter = game.next_shooter();
        if game.has_shot(shooter, target) {
            return Err(ShotError::AlreadyShot.into());
        }

        let hit = resolve_shot(&mut game, shooter, target);
        log::debug!(
            "game {}: {:?} fires at {} ({})",
            game.id,
            shooter,
            target,
            if hit { "hit" } else { "miss" }
        );

        if !hit && game.winner.is_none() {
            self.run_bot_chain(rng, &mut game);
        }
        if let Some(winner) = game.winner {
            log::info!(
                "game {}: {:?} wins after {} turns",
                game.id,
                winner,
                game.turns.len()
            );
        }
        Ok(self.store.save(game))
    }

    // The bot returns fire after a miss and keeps the turn for as long as
    // it hits, or until its hit ends the game.
    fn run_bot_chain<R: Rng>(&self, rng: &mut R, game: &mut Game) {
        loop {
            let Some(target) = self.gunner.choose_target(rng, game) else {
                break;
            };
            let hit = resolve_shot(game, Player::Bot, target);
            log::debug!(
                "game {}: Bot fires at {} ({})",
                game.id,
                target,
                if hit { "hit" } else { "miss" }
            );
            if !hit || game.winner.is_some() {
                break;
            }
        }
    }
}

/// Append the turn for one resolved shot and fold its consequences back
/// into the aggregate. The struck ship's `sunk` flag is recomputed from the
/// shooter's full shot history, never counted, and the winner is set the
/// instant the last opposing ship cell has been hit.
fn resolve_shot(game: &mut Game, shooter: Player, target: Coordinate) -> bool {
    let defender = shooter.opponent();
    let struck = game.side(defender).ship_at(target).map(|ship| ship.id);
    game.turns.push(Turn {
        number: game.turns.len() as u32 + 1,
        player: shooter,
        target,
        hit: struck.is_some(),
    });

    let Some(ship_id) = struck else {
        return false;
    };

    let shots = game.shots_by(shooter);
    let sunk = game
        .side(defender)
        .ship_by_id(ship_id)
        .map_or(false, |ship| ship.cells().is_subset(&shots));
    if sunk {
        if let Some(ship) = game.side_mut(defender).ship_by_id_mut(ship_id) {
            ship.sunk = true;
        }
        if game.is_won_by(shooter) {
            game.winner = Some(shooter);
        }
    }
    true
}
