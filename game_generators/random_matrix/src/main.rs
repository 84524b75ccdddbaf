// Random payoff matrices for the saddle point solver.

extern crate env_logger;
extern crate structopt;

use nfg_lite::game::PayoffMatrix;
use nfg_lite::GameAnalyzer;

use log::{error, info, warn};
use structopt::StructOpt;

use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

#[derive(Debug, Clone, PartialOrd, PartialEq)]
pub struct Config {
    pub size: (usize, usize),
    pub payoff_range: (f64, f64),

    // Round every payoff to the nearest integer. Ties are then common,
    // and so are saddle points. Rounded payoffs lie in [round(low), round(high)].
    pub integer: bool,
}

impl Config {
    pub fn new(size: (usize, usize), payoff_range: (f64, f64), integer: bool) -> Config {
        Config {
            size,
            payoff_range,
            integer,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.size.0 <= 1 || self.size.1 <= 1 {
            return Err(format!(
                "Matrix must be at least 2 × 2, got {} × {}",
                self.size.0, self.size.1
            ));
        }
        if !self.payoff_range.0.is_finite() || !self.payoff_range.1.is_finite() {
            return Err(format!(
                "Payoff range [{}, {}) must be finite",
                self.payoff_range.0, self.payoff_range.1
            ));
        }
        if !(self.payoff_range.0 < self.payoff_range.1) {
            return Err(format!(
                "Payoff range [{}, {}) is empty",
                self.payoff_range.0, self.payoff_range.1
            ));
        }
        Ok(())
    }
}

/// Draws a payoff matrix uniformly from `config.payoff_range`.
/// The same seed always produces the same matrix.
pub fn random_payoffs(config: &Config, random_seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaChaRng::seed_from_u64(random_seed);
    let (low, high) = config.payoff_range;

    let mut payoffs = Vec::<Vec<f64>>::new();
    for _i in 0..config.size.0 {
        let mut row = Vec::<f64>::new();
        for _j in 0..config.size.1 {
            let rand_payoff: f64 = rng.gen_range(low, high);
            row.push(if config.integer {
                rand_payoff.round()
            } else {
                rand_payoff
            });
        }
        payoffs.push(row);
    }
    payoffs
}

#[derive(StructOpt, Debug)]
#[structopt(name = "random_matrix")]
struct Opt {
    #[structopt(short = "o", long = "output_file")]
    output_file: PathBuf,

    // Number of rows followed by number of columns
    #[structopt(short = "n", long = "size")]
    size: Vec<usize>,

    // Lower (inclusive) and upper (exclusive) payoff. With --integer the
    // draws are rounded, so round(upper) may appear.
    #[structopt(short = "u", long = "payoffs")]
    payoff_range: Vec<f64>,

    #[structopt(short = "r", long = "random_seed", default_value = "0")]
    random_seed: u64,

    #[structopt(short = "i", long = "integer")]
    integer: bool,
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();

    if opt.size.len() != 2 || opt.payoff_range.len() != 2 {
        error!("Expected two sizes and two payoffs, got {:?} and {:?}", opt.size, opt.payoff_range);
        eprintln!("Error: --size and --payoffs each take exactly two values");
        exit(1);
    }

    let config = Config::new(
        (opt.size[0], opt.size[1]),
        (opt.payoff_range[0], opt.payoff_range[1]),
        opt.integer,
    );
    if let Err(err) = config.validate() {
        error!("Invalid config {:?}: {}", config, err);
        eprintln!("Error: {}", err);
        exit(1);
    }

    info!("Generating {:?} game with seed {:?}", config, opt.random_seed);
    let payoffs = random_payoffs(&config, opt.random_seed);

    let matrix = match PayoffMatrix::new(payoffs) {
        Ok(matrix) => matrix,
        Err(err) => {
            error!("Could not build payoff matrix: {:?}", err);
            eprintln!("Error: {}", err);
            exit(1);
        }
    };

    let game = GameAnalyzer::from_matrix(matrix.clone());
    match game.value() {
        Some(value) => info!("Generated game has a saddle point with value {:?}", value),
        None => warn!("Generated game has no pure strategy equilibrium"),
    }

    let result = File::create(&opt.output_file)
        .and_then(|mut file_writer| matrix.persist(&mut file_writer));
    if let Err(err) = result {
        error!("Could not write {:?}: {:?}", opt.output_file, err);
        eprintln!("Error: could not write {:?}: {}", opt.output_file, err);
        exit(1);
    }
}
