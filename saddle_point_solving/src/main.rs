use std::fs::File;
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

use nfg_lite::game::{GameError, PayoffMatrix, Player};
use nfg_lite::GameAnalyzer;

use log::{error, info};

#[derive(StructOpt, Debug)]
#[structopt(name = "SaddlePointSolver")]
struct Opt {
    // Input payoff matrix, one row per line. Uses the demo game if omitted.
    #[structopt(short = "g", long = "input_game_file")]
    input_file: Option<PathBuf>,

    // Also list the pure security strategies of both players
    #[structopt(short = "s", long = "security_strategies")]
    security_strategies: bool,
}

fn demo_game() -> Vec<Vec<f64>> {
    vec![
        vec![3.0, 2.0, 4.0],
        vec![1.0, 4.0, 2.0],
        vec![2.0, 3.0, 1.0],
    ]
}

fn load_game(opt: &Opt) -> Result<GameAnalyzer, GameError> {
    match opt.input_file {
        Some(ref path) => {
            info!("Reading payoff matrix from {:?}", path);
            let game_file = File::open(path)?;
            Ok(GameAnalyzer::from_matrix(PayoffMatrix::deserialize(game_file)?))
        }
        None => {
            info!("No input file given, solving the demo game");
            GameAnalyzer::new(demo_game())
        }
    }
}

fn security_summary(game: &GameAnalyzer) -> String {
    format!(
        "Security strategies (Player A rows): {:?}\nSecurity strategies (Player B columns): {:?}",
        game.security_strategies(Player::Player1),
        game.security_strategies(Player::Player2)
    )
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();

    match load_game(&opt) {
        Ok(ref game) => {
            info!(
                "Payoff matrix has {:?} rows and {:?} columns",
                game.num_rows(),
                game.num_cols()
            );
            println!("Payoff Matrix:");
            println!("{}", game.matrix());
            println!("\n{}", game.analyze_game());

            if opt.security_strategies {
                println!("\n{}", security_summary(game));
            }
        }
        Err(err) => {
            error!("Could not build game: {:?}", err);
            println!("Error: {}", err);
            exit(1);
        }
    }
}
