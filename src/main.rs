#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{
    banner, init_logging, place_fleet, print_board, print_final_stats, print_fleet,
    print_instructions, print_pattern, print_strike_report, prompt_strike_center, GameSession,
    PatternShape,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::debug;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Single-player naval strike simulation", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible random placements (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Hide intact ship cells on board displays after placement")]
    hide_ships: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (random placements will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    debug!("session starting");

    banner("NAVAL STRIKE - MASTER LEVEL");
    print_instructions();

    let mut session = GameSession::new();
    place_fleet(&mut session, &mut rng)?;

    let reveal = !cli.hide_ships;
    print_board(session.grid(), reveal);
    print_fleet(session.fleet());

    banner("SPECIAL ATTACK PATTERNS");
    for shape in PatternShape::ALL {
        print_pattern(shape);
    }

    banner("COMBAT BEGINS");
    for shape in PatternShape::ALL {
        let center = prompt_strike_center(shape)?;
        let report = session.strike(shape, center);
        print_strike_report(&report);
    }

    banner("FINAL BOARD");
    print_board(session.grid(), reveal);
    print_final_stats(session.stats());
    if session.fleet().all_destroyed() {
        println!("\n🎉 VICTORY! The entire fleet was destroyed!");
    }
    banner("END OF SIMULATION");
    Ok(())
}
