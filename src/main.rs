use std::error::Error;
use std::io;

use clap::Parser;
use japanesejoker_rs::console::Console;
use rand::{rngs::StdRng, SeedableRng};

/// Two player Japanese Joker at the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the dealer choice and shuffle, random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Silence log output
    #[arg(short, long)]
    quiet: bool,

    /// Log more detail (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print cards without suit colors
    #[arg(long)]
    no_color: bool,

    /// Print a JSON summary once the game ends
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(level)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::debug!("seed: {:?}", args.seed);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), !args.no_color);
    let game = console.play(&mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string(&game.summary())?);
    }
    Ok(())
}
