use flotilla::{
    Coordinate, Difficulty, Game, GameStatus, Orientation, Player, Ship, ShipKind, Turn,
};

fn coord(x: u8, y: u8) -> Coordinate {
    Coordinate::new(x, y)
}

fn turn(number: u32, player: Player, x: u8, y: u8, hit: bool) -> Turn {
    Turn {
        number,
        player,
        target: coord(x, y),
        hit,
    }
}

#[test]
fn human_shoots_first_on_an_empty_history() {
    let game = Game::new(1, Difficulty::Medium);
    assert_eq!(game.next_shooter(), Player::Human);
}

#[test]
fn a_hitter_keeps_the_turn() {
    let mut game = Game::new(1, Difficulty::Medium);
    game.turns.push(turn(1, Player::Human, 3, 3, true));
    assert_eq!(game.next_shooter(), Player::Human);

    game.turns.push(turn(2, Player::Human, 4, 3, false));
    game.turns.push(turn(3, Player::Bot, 1, 1, true));
    assert_eq!(game.next_shooter(), Player::Bot);
}

#[test]
fn a_miss_passes_the_turn() {
    let mut game = Game::new(1, Difficulty::Medium);
    game.turns.push(turn(1, Player::Human, 3, 3, false));
    assert_eq!(game.next_shooter(), Player::Bot);

    game.turns.push(turn(2, Player::Bot, 1, 1, false));
    assert_eq!(game.next_shooter(), Player::Human);
}

#[test]
fn status_follows_ships_and_winner() {
    let mut game = Game::new(1, Difficulty::Medium);
    assert_eq!(game.status(), GameStatus::AwaitingShips);

    game.human.set_ships(vec![Ship::new(
        1,
        ShipKind::Submarine,
        Orientation::Horizontal,
        coord(5, 5),
    )]);
    assert_eq!(game.status(), GameStatus::InProgress);

    game.winner = Some(Player::Human);
    assert_eq!(game.status(), GameStatus::Complete);
}

#[test]
fn shot_history_is_tracked_per_player() {
    let mut game = Game::new(1, Difficulty::Medium);
    game.turns.push(turn(1, Player::Human, 3, 3, false));
    game.turns.push(turn(2, Player::Bot, 3, 3, false));
    game.turns.push(turn(3, Player::Human, 4, 4, false));

    assert_eq!(game.shots_by(Player::Human).len(), 2);
    assert_eq!(game.shots_by(Player::Bot).len(), 1);
    assert!(game.has_shot(Player::Human, coord(4, 4)));
    assert!(!game.has_shot(Player::Bot, coord(4, 4)));
}

#[test]
fn winning_requires_every_opposing_ship_cell() {
    let mut game = Game::new(1, Difficulty::Medium);
    game.bot.set_ships(vec![Ship::new(
        1,
        ShipKind::Destroyer,
        Orientation::Horizontal,
        coord(1, 1),
    )]);

    game.turns.push(turn(1, Player::Human, 1, 1, true));
    assert!(!game.is_won_by(Player::Human));

    game.turns.push(turn(2, Player::Human, 2, 1, true));
    assert!(game.is_won_by(Player::Human));
}

#[test]
fn an_empty_side_is_never_beaten() {
    let game = Game::new(1, Difficulty::Medium);
    assert!(!game.is_won_by(Player::Human));
    assert!(!game.is_won_by(Player::Bot));
}
