use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use salvo::{
    coord_to_string, init_logging, ui, CliPlayer, ComputerPlayer, GameConfig, GameSession,
    GameStatus, Player, Side, TurnReport, DEFAULT_SHIP_SIZES,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Ship sizes placed in order (default 1,2,2,3,4,5)"
    )]
    ships: Option<Vec<usize>>,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            ship_sizes: self
                .ships
                .clone()
                .unwrap_or_else(|| DEFAULT_SHIP_SIZES.to_vec()),
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer, entering targets on stdin.
    Play(GameArgs),
    /// Let the computer play your side too and watch the result.
    Auto(GameArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let config = args.config();
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = config.rng();
            let session = GameSession::new(config, &mut rng)?;
            run(session, CliPlayer::stdin(), rng, true)
        }
        Commands::Auto(args) => {
            let config = args.config();
            let mut rng = config.rng();
            let session = GameSession::new(config, &mut rng)?;
            run(session, ComputerPlayer::new(), rng, false)
        }
    }
}

fn print_boards(session: &GameSession) {
    let computer = session.side(Side::Computer);
    let player = session.side(Side::Player);
    println!("\nEnemy waters:");
    print!("{}", ui::render_board(&computer.board, &computer.fleet, false));
    println!("{}", ui::legend(false));
    println!("\nYour fleet:");
    print!("{}", ui::render_board(&player.board, &player.fleet, true));
    println!("{}", ui::legend(true));
}

fn print_turn(report: &TurnReport) {
    let shot = report.player_shot;
    let mut messages = report.messages().into_iter();
    if let Some(msg) = messages.next() {
        println!("You fired at {}: {}", coord_to_string(shot.row, shot.col), msg);
    }
    if let Some(shot) = report.computer_shot {
        if let Some(msg) = messages.next() {
            println!(
                "Computer fired at {}: {}",
                coord_to_string(shot.row, shot.col),
                msg
            );
        }
    }
    for msg in messages {
        println!("{}", msg);
    }
}

fn run<P: Player>(
    mut session: GameSession,
    mut player: P,
    mut rng: SmallRng,
    interactive: bool,
) -> anyhow::Result<()> {
    while session.status() == GameStatus::InProgress {
        if interactive {
            print_boards(&session);
        }
        let target = &session.side(Side::Computer).board;
        let Some((row, col)) = player.select_target(&mut rng, target) else {
            println!("No more input, leaving the game.");
            return Ok(());
        };
        let report = session.play_turn(row, col, &mut rng)?;
        print_turn(&report);
    }

    print_boards(&session);
    match session.status() {
        GameStatus::Won => println!("\nVICTORY! You sank the whole enemy fleet."),
        GameStatus::Lost => println!("\nDEFEAT. All your ships have been destroyed."),
        GameStatus::InProgress => {}
    }
    println!("Turns played: {}", session.turns());
    Ok(())
}
