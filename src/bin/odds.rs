//! Odds Binary
//!
//! Estimates the chance that the given hole cards end up as the outright
//! best hand, against random opponents and a randomly completed board.

use clap::Parser;
use colored::Colorize;
use pokerodds::cards::*;
use pokerodds::evaluation::Evaluator;
use pokerodds::simulation::Calculator;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The player's two hole cards, e.g. "AH AS"
    #[arg(long, required = true)]
    hole: String,
    /// Community cards revealed so far, e.g. "2C 7D TH"
    #[arg(long, default_value = "")]
    board: String,
    /// Number of opponents still in the hand
    #[arg(short, long, default_value_t = 1)]
    opponents: usize,
    /// Number of simulated deals
    #[arg(short = 'n', long, default_value_t = pokerodds::ITERATIONS)]
    iterations: usize,
    /// Log simulation details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    pokerodds::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let hole = Hole::try_from(args.hole.as_str())?;
    let board = Card::parse(&args.board)?;
    let calculator = Calculator::new(args.opponents, hole, &board)?;
    let chance = calculator.equity(args.iterations)?;
    let wins = (chance * args.iterations as f32).round() as usize;
    println!("Number of opponents: {}", calculator.opponents());
    println!("Your cards:          {}", calculator.hole().nice());
    println!("Cards on table:      {}", calculator.board().nice());
    let known = hole
        .cards()
        .into_iter()
        .chain(board.iter().copied())
        .collect::<Vec<_>>();
    if let Ok(ranking) = Evaluator::from(known.as_slice()).ranking() {
        println!("Best hand so far:    {}", ranking);
    }
    let line = format!(
        "{}/{} ({:.1}%)",
        wins,
        args.iterations,
        chance * 100.0
    );
    println!(
        "Winning chance:      {}",
        match chance {
            p if p >= 0.5 => line.green(),
            p if p >= 0.2 => line.yellow(),
            _ => line.red(),
        }
    );
    Ok(())
}
