use flotilla::{
    init_logging, BotPlacer, Coordinate, Difficulty, Engine, GameConfig, MemoryStore, Player,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

fn parse_difficulty(name: &str) -> Option<Difficulty> {
    match name {
        "very-easy" => Some(Difficulty::VeryEasy),
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        "very-hard" => Some(Difficulty::VeryHard),
        "unbeatable" => Some(Difficulty::Unbeatable),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [difficulty]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let difficulty = match args.get(2) {
        Some(name) => parse_difficulty(name)
            .ok_or_else(|| anyhow::anyhow!("unknown difficulty: {}", name))?,
        None => Difficulty::default(),
    };

    init_logging();
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::standard();
    let mut engine = Engine::new(MemoryStore::new(), config.clone());

    let game = engine.create_game(Some(difficulty));
    // The human stand-in borrows the bot's placement strategy for its own
    // fleet and shoots blind.
    let fleet = BotPlacer::new(config.clone()).place_fleet(&mut rng, 1)?;
    let mut game = engine.place_ships(&mut rng, game.id, fleet)?;

    while game.winner.is_none() {
        let tried = game.shots_by(Player::Human);
        let untried: Vec<Coordinate> = (1..=config.width())
            .flat_map(|x| (1..=config.height()).map(move |y| Coordinate::new(x, y)))
            .filter(|coord| !tried.contains(coord))
            .collect();
        let target = untried[rng.random_range(0..untried.len())];
        game = engine.shoot(&mut rng, game.id, target)?;
    }

    let result = json!({
        "winner": game.winner.map(|w| format!("{:?}", w)),
        "difficulty": format!("{:?}", game.difficulty),
        "turns": game.turns.len(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
