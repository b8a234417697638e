use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, ComputerPlayer, GameConfig, GameSession, GameStatus, Player, Side};
use serde::Serialize;

/// Play seeded autopilot games and print a JSON summary.
#[derive(Parser)]
struct Args {
    /// Seed of the first game; game `i` uses `seed + i`.
    seed: u64,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
}

#[derive(Serialize)]
struct Summary {
    games: u64,
    player_wins: u64,
    computer_wins: u64,
    average_turns: f64,
}

fn play(seed: u64) -> anyhow::Result<(GameStatus, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(GameConfig::default().with_seed(seed), &mut rng)?;
    let mut autopilot = ComputerPlayer::new();
    while session.status() == GameStatus::InProgress {
        let (row, col) = autopilot
            .select_target(&mut rng, &session.side(Side::Computer).board)
            .ok_or_else(|| anyhow::anyhow!("no target left in a running game"))?;
        session.play_turn(row, col, &mut rng)?;
    }
    Ok((session.status(), session.turns()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut summary = Summary {
        games: args.games,
        player_wins: 0,
        computer_wins: 0,
        average_turns: 0.0,
    };
    let mut total_turns = 0usize;
    for i in 0..args.games {
        let (status, turns) = play(args.seed.wrapping_add(i))?;
        total_turns += turns;
        match status {
            GameStatus::Won => summary.player_wins += 1,
            GameStatus::Lost => summary.computer_wins += 1,
            GameStatus::InProgress => {}
        }
    }
    if args.games > 0 {
        summary.average_turns = total_turns as f64 / args.games as f64;
    }

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
